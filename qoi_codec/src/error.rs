use std::error;
use std::fmt;
use std::io;

/// An enumeration of all error values this crate may produce.
pub enum Error {
  /// The stream does not start with the `qoif` magic bytes.
  InvalidHeader,
  /// The image's width times height does not fit in memory on this platform.
  InvalidDimensions,
  /// The trailing end marker is missing or malformed. Only checked by a
  /// decoder in strict mode.
  InvalidTrailer,
  /// The image's dimensions exceed the decoder's configured limits.
  LimitExceeded {
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
  },
  /// The number of pixels handed to an image does not match its dimensions.
  PixelCountMismatch { expected: usize, actual: usize },
  /// Any `std::io::Error` that occurs during decoding or encoding. Typically
  /// these will arise from problems with reading an image source or writing to
  /// an image destination.
  IoError(io::Error),
  /// The stream ended in the middle of the header or an op, before every
  /// pixel was decoded.
  UnexpectedEof,
}

impl From<io::Error> for Error {
  fn from(io_err: io::Error) -> Self {
    match io_err.kind() {
      io::ErrorKind::UnexpectedEof => Error::UnexpectedEof,
      _ => Error::IoError(io_err),
    }
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::InvalidHeader => {
        write!(f, "invalid or malformed QOI image header")
      }
      Error::InvalidDimensions => {
        write!(f, "invalid image width or height")
      }
      Error::InvalidTrailer => {
        write!(f, "missing or malformed QOI end marker")
      }
      Error::LimitExceeded { width, height, max_width, max_height } => {
        write!(
          f,
          "image dimensions {}x{} exceed the configured limit of {}x{}",
          width, height, max_width, max_height
        )
      }
      Error::PixelCountMismatch { expected, actual } => {
        write!(f, "expected {} pixels but received {}", expected, actual)
      }
      Error::IoError(io_err) => {
        write!(f, "{}", io_err)
      }
      Error::UnexpectedEof => {
        write!(f, "unexpectedly reached end of stream before decoding was completed")
      }
    }
  }
}

impl fmt::Debug for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self)
  }
}

impl error::Error for Error {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      Error::IoError(io_err) => Some(io_err),
      _ => None,
    }
  }
}

impl PartialEq for Error {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Error::InvalidHeader, Error::InvalidHeader) => true,
      (Error::InvalidDimensions, Error::InvalidDimensions) => true,
      (Error::InvalidTrailer, Error::InvalidTrailer) => true,
      (
        Error::LimitExceeded { width: w1, height: h1, max_width: mw1, max_height: mh1 },
        Error::LimitExceeded { width: w2, height: h2, max_width: mw2, max_height: mh2 },
      ) => w1 == w2 && h1 == h2 && mw1 == mw2 && mh1 == mh2,
      (
        Error::PixelCountMismatch { expected: e1, actual: a1 },
        Error::PixelCountMismatch { expected: e2, actual: a2 },
      ) => e1 == e2 && a1 == a2,
      (Error::IoError(a), Error::IoError(b)) => a.kind() == b.kind(),
      (Error::UnexpectedEof, Error::UnexpectedEof) => true,
      _ => false,
    }
  }
}
