pub const QOI_BYTES_END: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];
pub const QOI_BYTES_MAGIC: &[u8; 4] = b"qoif";
pub const QOI_CACHE_LEN: usize = 64;
pub const QOI_HEADER_LEN: usize = 14;
pub const QOI_MAX_RUN: u8 = 62;

/// Metadata stored in the header of a QOI image.
///
/// `channels` and `colorspace` are informative only. They are written by the
/// encoder and read back by the decoder, but never change how pixels are
/// encoded or decoded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ImageMeta {
  /// The number of color channels the encoder declared, usually 3 or 4.
  pub channels: u8,
  /// The raw colorspace byte, see [Colorspace].
  pub colorspace: u8,
  /// The image's height.
  pub height: u32,
  /// The image's width.
  pub width: u32,
}

impl ImageMeta {
  /// Returns the total number of pixels that make up the image, or `None`
  /// when the count does not fit in a `usize`.
  pub fn num_pixels(&self) -> Option<usize> {
    (self.width as usize).checked_mul(self.height as usize)
  }

  // Serializes the 14 byte header.
  pub(crate) fn to_bytes(self) -> [u8; QOI_HEADER_LEN] {
    let mut header = [0; QOI_HEADER_LEN];

    header[..4].copy_from_slice(QOI_BYTES_MAGIC);
    header[4..8].copy_from_slice(&self.width.to_be_bytes());
    header[8..12].copy_from_slice(&self.height.to_be_bytes());
    header[12] = self.channels;
    header[13] = self.colorspace;

    header
  }
}

/// The channel count declared in the header.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Channels {
  Rgb = 3,
  #[default]
  Rgba = 4,
}

/// The colorspace declared in the header.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Colorspace {
  /// sRGB with linear alpha.
  #[default]
  Srgb = 0,
  /// All channels linear.
  Linear = 1,
}

impl Colorspace {
  /// Maps a raw header byte to a known colorspace, `None` for any other
  /// value.
  pub fn from_byte(byte: u8) -> Option<Self> {
    match byte {
      0 => Some(Colorspace::Srgb),
      1 => Some(Colorspace::Linear),
      _ => None,
    }
  }
}
