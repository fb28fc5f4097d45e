use crate::meta::{Channels, Colorspace};

/// Metadata the encoder writes into the image header. Neither value changes
/// the encoded pixel data.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EncodeOptions {
  /// Declared channel count, defaults to [Channels::Rgba].
  pub channels: Channels,
  /// Declared colorspace, defaults to [Colorspace::Srgb].
  pub colorspace: Colorspace,
}

/// Restrictions a decoder enforces on the images it accepts.
///
/// Width and height are checked before the output grid is allocated, which
/// keeps a hostile header from requesting gigabytes of memory.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DecodeOptions {
  max_width: u32,
  max_height: u32,
  strict: bool,
}

impl Default for DecodeOptions {
  fn default() -> Self {
    Self {
      max_width: DecodeOptions::DEFAULT_MAX_DIMENSION,
      max_height: DecodeOptions::DEFAULT_MAX_DIMENSION,
      strict: false,
    }
  }
}

impl DecodeOptions {
  /// Default limit for both width and height.
  pub const DEFAULT_MAX_DIMENSION: u32 = 16384;

  /// Maximum accepted image width.
  pub const fn max_width(&self) -> u32 {
    self.max_width
  }

  /// Maximum accepted image height.
  pub const fn max_height(&self) -> u32 {
    self.max_height
  }

  /// Whether the decoder verifies the end marker after the last pixel.
  pub const fn strict(&self) -> bool {
    self.strict
  }

  /// Sets the maximum accepted image width.
  pub fn set_max_width(mut self, width: u32) -> Self {
    self.max_width = width;
    self
  }

  /// Sets the maximum accepted image height.
  pub fn set_max_height(mut self, height: u32) -> Self {
    self.max_height = height;
    self
  }

  /// In strict mode the 8 byte end marker must follow the last op.
  pub fn set_strict(mut self, strict: bool) -> Self {
    self.strict = strict;
    self
  }
}
