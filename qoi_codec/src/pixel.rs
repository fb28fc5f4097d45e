use crate::meta::QOI_CACHE_LEN;

/// An RGBA pixel with 8 bits per channel. Color channels are not
/// pre-multiplied with the alpha channel.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Pixel {
  /// Red channel value.
  pub r: u8,
  /// Green channel value.
  pub g: u8,
  /// Blue channel value.
  pub b: u8,
  /// Alpha channel value.
  pub a: u8,
}

// A pixel difference that fits one of the two differential ops. Deltas are
// signed and unbiased, the bias is applied when the op is written.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PixelDiff {
  // `QOI_OP_DIFF` range, each delta within -2..=1.
  Diff(i8, i8, i8),
  // `QOI_OP_LUMA` range, green delta within -32..=31, red-green and
  // blue-green within -8..=7.
  Luma(i8, i8, i8),
}

impl Pixel {
  /// The implicit pixel preceding the first pixel of every image.
  pub const START: Pixel = Pixel { r: 0, g: 0, b: 0, a: 255 };

  /// The value every color cache slot holds before it is first written.
  pub const ZERO: Pixel = Pixel { r: 0, g: 0, b: 0, a: 0 };

  /// Creates a pixel from its four channels.
  pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
    Self { r, g, b, a }
  }

  /// Creates a fully opaque pixel.
  pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b, a: 255 }
  }

  /// The QOI color hash, i.e. the pixel's slot in the color cache.
  ///
  /// Multiplications wrap at 8 bits. Since 256 is a multiple of 64 the result
  /// is the same as the hash computed with wider integers.
  pub fn hash(&self) -> u8 {
    let sum = self
      .r
      .wrapping_mul(3)
      .wrapping_add(self.g.wrapping_mul(5))
      .wrapping_add(self.b.wrapping_mul(7))
      .wrapping_add(self.a.wrapping_mul(11));

    sum % QOI_CACHE_LEN as u8
  }

  // Attempts to express `self` as a difference from `prev`. The `Diff` range
  // is tried first, then `Luma`. Returns `None` when the alpha channel
  // differs or neither range fits.
  pub(crate) fn diff(&self, prev: &Pixel) -> Option<PixelDiff> {
    if self.a != prev.a {
      return None;
    }

    let dr = self.r.wrapping_sub(prev.r) as i8;
    let dg = self.g.wrapping_sub(prev.g) as i8;
    let db = self.b.wrapping_sub(prev.b) as i8;

    let diff_range = -2..=1;

    if diff_range.contains(&dr) && diff_range.contains(&dg) && diff_range.contains(&db) {
      return Some(PixelDiff::Diff(dr, dg, db));
    }

    if !(-32..=31).contains(&dg) {
      return None;
    }

    let dr_dg = dr.wrapping_sub(dg);
    let db_dg = db.wrapping_sub(dg);
    let luma_range = -8..=7;

    if luma_range.contains(&dr_dg) && luma_range.contains(&db_dg) {
      return Some(PixelDiff::Luma(dg, dr_dg, db_dg));
    }

    None
  }

  // Recreates a pixel from a `diff` against `prev`.
  pub(crate) fn from_diff(diff: PixelDiff, prev: &Pixel) -> Self {
    match diff {
      PixelDiff::Diff(dr, dg, db) => Self {
        r: prev.r.wrapping_add(dr as u8),
        g: prev.g.wrapping_add(dg as u8),
        b: prev.b.wrapping_add(db as u8),
        a: prev.a,
      },
      PixelDiff::Luma(dg, dr_dg, db_dg) => {
        let dr = dr_dg.wrapping_add(dg);
        let db = db_dg.wrapping_add(dg);

        Self {
          r: prev.r.wrapping_add(dr as u8),
          g: prev.g.wrapping_add(dg as u8),
          b: prev.b.wrapping_add(db as u8),
          a: prev.a,
        }
      }
    }
  }
}

impl From<[u8; 4]> for Pixel {
  fn from([r, g, b, a]: [u8; 4]) -> Self {
    Self { r, g, b, a }
  }
}

impl From<Pixel> for [u8; 4] {
  fn from(pixel: Pixel) -> Self {
    [pixel.r, pixel.g, pixel.b, pixel.a]
  }
}
