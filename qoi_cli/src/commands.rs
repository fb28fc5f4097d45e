//! The `encode`, `decode` and `benchmark` subcommands.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::info;
use qoi_codec::{decode_image, encode_image, DecodeOptions, EncodeOptions, Image};

use crate::paths::{find_pngs, sibling_path};
use crate::png_io::{read_png, write_png};
use crate::report::{benchmark_table, CodecResult};

/// Runs `op` `iterations` times and returns the last result together with
/// the mean duration of a single run.
fn time_mean<T, F>(iterations: u32, mut op: F) -> Result<(T, Duration)>
where
  F: FnMut() -> Result<T>,
{
  let start = Instant::now();
  let mut result = op()?;

  for _ in 1..iterations {
    result = op()?;
  }

  Ok((result, start.elapsed() / iterations.max(1)))
}

/// The encoded size as a fraction of the raw pixel data.
fn rate(size: usize, image: &Image) -> f64 {
  let raw = image.width() as f64 * image.height() as f64 * image.channels() as f64;

  if raw == 0.0 {
    0.0
  } else {
    size as f64 / raw
  }
}

/// Benchmarks a single PNG file against QOI and returns one result per codec.
pub fn benchmark_file(path: &Path, iterations: u32, options: &DecodeOptions) -> Result<Vec<CodecResult>> {
  let png_bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

  let (image, png_decode_time) = time_mean(iterations, || read_png(png_bytes.as_slice()))
    .with_context(|| format!("Failed to decode PNG {}", path.display()))?;

  let (png_encoded, png_encode_time) = time_mean(iterations, || {
    let mut dest = Vec::with_capacity(png_bytes.len());
    write_png(&image, &mut dest)?;
    Ok(dest)
  })
  .context("Failed to encode PNG")?;

  let (qoi_encoded, qoi_encode_time) =
    time_mean(iterations, || Ok(qoi_codec::encode(&image)?)).context("Failed to encode QOI")?;

  let qoi_path = sibling_path(path, "", "qoi");
  fs::write(&qoi_path, &qoi_encoded)
    .with_context(|| format!("Failed to write {}", qoi_path.display()))?;

  let (decoded, qoi_decode_time) = time_mean(iterations, || {
    let file = File::open(&qoi_path)?;
    Ok(decode_image(BufReader::new(file), options)?)
  })
  .with_context(|| format!("Failed to decode QOI {}", qoi_path.display()))?;

  if decoded != image {
    anyhow::bail!("QOI round trip of {} does not match the source image", path.display());
  }

  info!(
    "{}: {}x{}, PNG {} bytes, QOI {} bytes",
    path.display(),
    image.width(),
    image.height(),
    png_encoded.len(),
    qoi_encoded.len()
  );

  Ok(vec![
    CodecResult {
      algorithm: "QOI",
      decode_time: qoi_decode_time,
      encode_time: qoi_encode_time,
      size: qoi_encoded.len(),
      rate: rate(qoi_encoded.len(), &image),
    },
    CodecResult {
      algorithm: "PNG",
      decode_time: png_decode_time,
      encode_time: png_encode_time,
      size: png_encoded.len(),
      rate: rate(png_encoded.len(), &image),
    },
  ])
}

/// Benchmarks every PNG below `dir` and prints one table per file.
pub fn benchmark_dir(iterations: u32, dir: &Path, options: &DecodeOptions) -> Result<()> {
  let files = find_pngs(dir).with_context(|| format!("Failed to walk {}", dir.display()))?;

  info!("Benchmarking {} file(s) with {} iteration(s)", files.len(), iterations);

  for path in files {
    let results = benchmark_file(&path, iterations, options)?;
    println!("{}", benchmark_table(&path.display().to_string(), &results));
  }

  Ok(())
}

/// Encodes a PNG file into a `.qoi` file next to it.
pub fn encode_file(path: &Path, options: &EncodeOptions) -> Result<()> {
  let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
  let image = read_png(BufReader::new(file))
    .with_context(|| format!("Failed to decode PNG {}", path.display()))?;

  let dest = sibling_path(path, "", "qoi");
  let out = File::create(&dest).with_context(|| format!("Failed to create {}", dest.display()))?;

  encode_image(&image, BufWriter::new(out), options)
    .with_context(|| format!("Failed to write {}", dest.display()))?;

  info!("Wrote {}", dest.display());

  Ok(())
}

/// Decodes a `.qoi` file into a `_decoded.png` file next to it.
pub fn decode_file(path: &Path, options: &DecodeOptions) -> Result<()> {
  let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
  let image = decode_image(BufReader::new(file), options)
    .with_context(|| format!("Failed to decode QOI {}", path.display()))?;

  let dest = sibling_path(path, "_decoded", "png");
  let out = File::create(&dest).with_context(|| format!("Failed to create {}", dest.display()))?;

  let mut writer = BufWriter::new(out);

  write_png(&image, &mut writer).with_context(|| format!("Failed to write {}", dest.display()))?;
  writer.flush().with_context(|| format!("Failed to write {}", dest.display()))?;

  info!("Wrote {}", dest.display());

  Ok(())
}
