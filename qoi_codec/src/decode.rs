use std::io;

use log::{debug, trace};

use crate::error::Error;
use crate::image::{pixel_count, Image};
use crate::meta::{Colorspace, ImageMeta, QOI_BYTES_END, QOI_BYTES_MAGIC, QOI_HEADER_LEN};
use crate::op::Op;
use crate::options::DecodeOptions;
use crate::pixel::{Pixel, PixelDiff};
use crate::state::State;

const PREALLOC_PIXELS: usize = 1 << 22;

/// Decodes a QOI stream read from the provided `reader` into an [Image].
///
/// The stream is consumed one byte at a time and only as far as needed, so
/// bytes following the image are left unread unless `options` asks for strict
/// end marker validation.
///
/// Note that this function performs frequent small reads, so it's recommended
/// to provide a buffered IO implementation such as `std::io::BufReader` when
/// reading from a file.
pub fn decode_image<R: io::Read>(mut reader: R, options: &DecodeOptions) -> Result<Image, Error> {
  let meta = decode_header(&mut reader)?;

  if meta.width > options.max_width() || meta.height > options.max_height() {
    return Err(Error::LimitExceeded {
      width: meta.width,
      height: meta.height,
      max_width: options.max_width(),
      max_height: options.max_height(),
    });
  }

  let num_pixels = pixel_count(meta.width, meta.height)?;

  debug!("Decoding {}x{} image", meta.width, meta.height);

  let mut state = State::new();
  let mut bytes = reader.bytes();
  // Grows past this as pixels arrive, so a header alone cannot force a
  // huge allocation.
  let mut pixels = Vec::with_capacity(num_pixels.min(PREALLOC_PIXELS));

  for _ in 0..num_pixels {
    let pixel = decode_pixel(&mut state, &mut bytes)?;

    state.prev_pixel = pixel;
    pixels.push(pixel);
  }

  if options.strict() {
    for expected in QOI_BYTES_END {
      let byte = bytes.next().ok_or(Error::InvalidTrailer)??;

      if byte != expected {
        return Err(Error::InvalidTrailer);
      }
    }
  }

  Image::new(meta.width, meta.height, pixels)
}

/// Decodes an in-memory QOI stream using the default [DecodeOptions].
pub fn decode(data: &[u8]) -> Result<Image, Error> {
  decode_image(data, &DecodeOptions::default())
}

// Attempts to decode the image's header, returning the image's `ImageMeta`
// data upon success. The channel and colorspace bytes are passed through
// without validation.
fn decode_header<R: io::Read>(mut reader: R) -> Result<ImageMeta, Error> {
  let mut header_buf = [0; QOI_HEADER_LEN];
  reader.read_exact(&mut header_buf)?;

  if &header_buf[..4] != QOI_BYTES_MAGIC {
    return Err(Error::InvalidHeader);
  }

  let meta = ImageMeta {
    width: u32::from_be_bytes([header_buf[4], header_buf[5], header_buf[6], header_buf[7]]),
    height: u32::from_be_bytes([header_buf[8], header_buf[9], header_buf[10], header_buf[11]]),
    channels: header_buf[12],
    colorspace: header_buf[13],
  };

  trace!(
    "Header channels {}, colorspace {} ({:?})",
    meta.channels,
    meta.colorspace,
    Colorspace::from_byte(meta.colorspace)
  );

  Ok(meta)
}

// Attempts to decode a single "next" pixel from the provided decoding `state`
// and encoded `bytes`. Pixels produced by a run leave the cache untouched,
// every other pixel is written to its cache slot. Does not advance
// `state.prev_pixel`.
fn decode_pixel<I: Iterator<Item = Result<u8, io::Error>>>(
  state: &mut State,
  bytes: &mut I,
) -> Result<Pixel, Error> {
  if state.run_count > 0 {
    state.run_count -= 1;
    return Ok(state.prev_pixel);
  }

  let pixel = match Op::try_from_bytes(bytes)? {
    Op::Index(index) => state.cache[index as usize],
    Op::Diff(dr, dg, db) => Pixel::from_diff(PixelDiff::Diff(dr, dg, db), &state.prev_pixel),
    Op::Luma(dg, dr_dg, db_dg) => {
      Pixel::from_diff(PixelDiff::Luma(dg, dr_dg, db_dg), &state.prev_pixel)
    }
    Op::Run(count) => {
      // This pixel is the first of the run.
      state.run_count = count - 1;
      return Ok(state.prev_pixel);
    }
    Op::Rgb(r, g, b) => Pixel { r, g, b, a: state.prev_pixel.a },
    Op::Rgba(r, g, b, a) => Pixel { r, g, b, a },
  };

  state.cache_insert(pixel);

  Ok(pixel)
}
