use std::io;

use log::debug;

use crate::error::Error;
use crate::image::Image;
use crate::meta::{ImageMeta, QOI_BYTES_END, QOI_HEADER_LEN, QOI_MAX_RUN};
use crate::op::Op;
use crate::options::EncodeOptions;
use crate::pixel::{Pixel, PixelDiff};
use crate::state::State;

/// Encodes an image into a QOI stream written to the provided `writer`.
///
/// Pixels are visited in row-major order. The header's channel and colorspace
/// bytes come from `options`; they do not influence the encoded ops.
///
/// Note that this function performs frequent small writes, so it's
/// recommended to provide a buffered IO implementation such as
/// `std::io::BufWriter` when writing to a file.
pub fn encode_image<W: io::Write>(
  image: &Image,
  mut writer: W,
  options: &EncodeOptions,
) -> Result<(), Error> {
  let meta = ImageMeta {
    width: image.width(),
    height: image.height(),
    channels: options.channels as u8,
    colorspace: options.colorspace as u8,
  };

  debug!("Encoding {}x{} image", meta.width, meta.height);

  writer.write_all(&meta.to_bytes())?;

  let mut state = State::new();

  for &pixel in image.pixels() {
    encode_pixel(&mut state, pixel, &mut writer)?;
    state.prev_pixel = pixel;
  }

  // A run still pending here ends at the image's last pixel.
  if state.run_count > 0 {
    Op::Run(state.run_count).into_bytes(&mut writer)?;
  }

  writer.write_all(&QOI_BYTES_END)?;
  writer.flush()?;

  Ok(())
}

/// Encodes an image in memory using the default [EncodeOptions].
pub fn encode(image: &Image) -> Result<Vec<u8>, Error> {
  // Worst case every pixel is an `Op::Rgba`.
  let capacity = QOI_HEADER_LEN + image.pixels().len() * 5 + QOI_BYTES_END.len();
  let mut dest = Vec::with_capacity(capacity);

  encode_image(image, &mut dest, &EncodeOptions::default())?;

  debug!("Encoded {} pixels into {} bytes", image.pixels().len(), dest.len());

  Ok(dest)
}

// Attempts to encode and write the provided pixel using the QOI OP encoding
// scheme and provided `state`. Does not advance `state.prev_pixel`.
pub(crate) fn encode_pixel<W: io::Write>(
  state: &mut State,
  pixel: Pixel,
  mut writer: W,
) -> Result<(), Error> {
  if pixel == state.prev_pixel {
    state.run_count += 1;

    if state.run_count == QOI_MAX_RUN {
      Op::Run(QOI_MAX_RUN).into_bytes(&mut writer)?;
      state.run_count = 0;
    }

    return Ok(());
  }

  if state.run_count > 0 {
    Op::Run(state.run_count).into_bytes(&mut writer)?;
    state.run_count = 0;
  }

  if let Some(index) = state.cache_match_or_replace(pixel) {
    Op::Index(index).into_bytes(&mut writer)?;
    return Ok(());
  }

  let op = match pixel.diff(&state.prev_pixel) {
    Some(PixelDiff::Diff(dr, dg, db)) => Op::Diff(dr, dg, db),
    Some(PixelDiff::Luma(dg, dr_dg, db_dg)) => Op::Luma(dg, dr_dg, db_dg),
    None if pixel.a == state.prev_pixel.a => Op::Rgb(pixel.r, pixel.g, pixel.b),
    None => Op::Rgba(pixel.r, pixel.g, pixel.b, pixel.a),
  };

  op.into_bytes(&mut writer)?;

  Ok(())
}
