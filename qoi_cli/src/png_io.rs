use std::io;

use anyhow::{bail, Result};
use png::{BitDepth, ColorType, Transformations};
use qoi_codec::{Image, Pixel};

/// Decodes the first frame of a PNG image into an [Image].
///
/// Palettes and sub-byte samples are expanded and 16-bit samples are
/// stripped, so every color type ends up as 8-bit grey, grey + alpha, RGB or
/// RGBA before it is converted. Missing alpha becomes 255.
pub fn read_png<R: io::Read>(reader: R) -> Result<Image> {
  let mut decoder = png::Decoder::new(reader);
  decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);

  let mut reader = decoder.read_info()?;
  let mut buf = vec![0; reader.output_buffer_size()];
  let info = reader.next_frame(&mut buf)?;
  let bytes = &buf[..info.buffer_size()];

  if info.bit_depth != BitDepth::Eight {
    bail!("unsupported PNG bit depth {:?} after expansion", info.bit_depth);
  }

  let image = match info.color_type {
    ColorType::Rgb => Image::from_rgb8(info.width, info.height, bytes)?,
    ColorType::Rgba => Image::from_rgba8(info.width, info.height, bytes)?,
    ColorType::Grayscale => {
      let pixels = bytes.iter().map(|&v| Pixel::opaque(v, v, v)).collect();
      Image::new(info.width, info.height, pixels)?
    }
    ColorType::GrayscaleAlpha => {
      let pixels = bytes
        .chunks_exact(2)
        .map(|px| Pixel::new(px[0], px[0], px[0], px[1]))
        .collect();
      Image::new(info.width, info.height, pixels)?
    }
    ColorType::Indexed => bail!("PNG palette was not expanded"),
  };

  Ok(image)
}

/// Encodes an [Image] as an 8-bit RGBA PNG.
pub fn write_png<W: io::Write>(image: &Image, writer: W) -> Result<()> {
  let mut encoder = png::Encoder::new(writer, image.width(), image.height());
  encoder.set_color(ColorType::Rgba);
  encoder.set_depth(BitDepth::Eight);

  let mut writer = encoder.write_header()?;
  writer.write_image_data(&image.to_rgba8())?;
  writer.finish()?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn png_bytes(width: u32, height: u32, color: ColorType, data: &[u8]) -> Vec<u8> {
    let mut dest = Vec::new();
    let mut encoder = png::Encoder::new(&mut dest, width, height);
    encoder.set_color(color);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder.write_header().expect("Failed to write PNG header");
    writer.write_image_data(data).expect("Failed to write PNG data");
    writer.finish().expect("Failed to finish PNG");

    dest
  }

  #[test]
  fn test_png_round_trip() {
    let pixels = vec![
      Pixel::new(1, 2, 3, 4),
      Pixel::new(255, 0, 128, 255),
      Pixel::new(9, 9, 9, 0),
      Pixel::new(0, 0, 0, 255),
    ];
    let image = Image::new(2, 2, pixels).expect("Failed to create image");
    let mut dest = Vec::new();

    write_png(&image, &mut dest).expect("Failed to write PNG");

    assert_eq!(read_png(dest.as_slice()).expect("Failed to read PNG"), image);
  }

  #[test]
  fn test_rgb_png_is_opaque() {
    let source = png_bytes(2, 1, ColorType::Rgb, &[10, 20, 30, 40, 50, 60]);
    let image = read_png(source.as_slice()).expect("Failed to read PNG");

    assert_eq!(image.pixels(), &[Pixel::opaque(10, 20, 30), Pixel::opaque(40, 50, 60)]);
  }

  #[test]
  fn test_grayscale_pngs() {
    let grey = png_bytes(2, 1, ColorType::Grayscale, &[7, 200]);
    let image = read_png(grey.as_slice()).expect("Failed to read PNG");

    assert_eq!(image.pixels(), &[Pixel::opaque(7, 7, 7), Pixel::opaque(200, 200, 200)]);

    let grey_alpha = png_bytes(1, 1, ColorType::GrayscaleAlpha, &[7, 99]);
    let image = read_png(grey_alpha.as_slice()).expect("Failed to read PNG");

    assert_eq!(image.pixels(), &[Pixel::new(7, 7, 7, 99)]);
  }

  #[test]
  fn test_garbage_is_rejected() {
    assert!(read_png(&b"not a png"[..]).is_err());
  }
}
