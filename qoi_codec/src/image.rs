use crate::error::Error;
use crate::pixel::Pixel;

/// A row-major grid of pixels with its origin in the top-left corner.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
  width: u32,
  height: u32,
  pixels: Vec<Pixel>,
}

impl Image {
  /// Creates an image from its dimensions and `width * height` pixels.
  pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, Error> {
    let expected = pixel_count(width, height)?;

    if pixels.len() != expected {
      return Err(Error::PixelCountMismatch { expected, actual: pixels.len() });
    }

    Ok(Self { width, height, pixels })
  }

  /// Creates an image from interleaved 8-bit RGBA samples.
  pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> Result<Self, Error> {
    let pixels = data
      .chunks_exact(4)
      .map(|px| Pixel::new(px[0], px[1], px[2], px[3]))
      .collect();

    Self::from_samples(width, height, data.len(), 4, pixels)
  }

  /// Creates an opaque image from interleaved 8-bit RGB samples.
  pub fn from_rgb8(width: u32, height: u32, data: &[u8]) -> Result<Self, Error> {
    let pixels = data
      .chunks_exact(3)
      .map(|px| Pixel::opaque(px[0], px[1], px[2]))
      .collect();

    Self::from_samples(width, height, data.len(), 3, pixels)
  }

  // Rejects sample buffers with a trailing partial pixel before handing off to
  // `new`.
  fn from_samples(
    width: u32,
    height: u32,
    len: usize,
    channels: usize,
    pixels: Vec<Pixel>,
  ) -> Result<Self, Error> {
    if len % channels != 0 {
      let expected = pixel_count(width, height)?;
      return Err(Error::PixelCountMismatch { expected, actual: len / channels });
    }

    Self::new(width, height, pixels)
  }

  /// The image's width.
  pub fn width(&self) -> u32 {
    self.width
  }

  /// The image's height.
  pub fn height(&self) -> u32 {
    self.height
  }

  /// All pixels in row-major order.
  pub fn pixels(&self) -> &[Pixel] {
    &self.pixels
  }

  /// Consumes the image, returning its pixels in row-major order.
  pub fn into_pixels(self) -> Vec<Pixel> {
    self.pixels
  }

  /// The pixel at column `x` of row `y`, or `None` outside the image.
  pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
    if x >= self.width || y >= self.height {
      return None;
    }

    self
      .pixels
      .get(y as usize * self.width as usize + x as usize)
      .copied()
  }

  /// Returns `true` when every pixel is fully opaque.
  pub fn is_opaque(&self) -> bool {
    self.pixels.iter().all(|pixel| pixel.a == 255)
  }

  /// The number of channels needed to represent the image without loss, 3
  /// for fully opaque images and 4 otherwise.
  pub fn channels(&self) -> u8 {
    if self.is_opaque() {
      3
    } else {
      4
    }
  }

  /// Interleaved 8-bit RGBA samples.
  pub fn to_rgba8(&self) -> Vec<u8> {
    self
      .pixels
      .iter()
      .flat_map(|pixel| <[u8; 4]>::from(*pixel))
      .collect()
  }
}

// `width * height`, failing when it does not fit in a `usize`.
pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize, Error> {
  (width as usize)
    .checked_mul(height as usize)
    .ok_or(Error::InvalidDimensions)
}
