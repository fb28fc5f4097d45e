//! This crate implements a lossless encoder and decoder for the
//! [QOI image format](https://qoiformat.org).
//!
//! An image is a row-major grid of 8-bit RGBA [Pixel]s. The encoder turns it
//! into a 14 byte header, a sequence of variable length ops and an 8 byte end
//! marker. The decoder reverses the process. Both sides keep the same 64 slot
//! cache of recently seen pixels, so the stream itself is the only contract
//! between them.
//!
//! The in-memory entry points are [encode] and [decode]. The streaming
//! variants [encode_image] and [decode_image] accept any `std::io::Write`
//! destination or `std::io::Read` source and perform frequent small writes
//! and reads, so wrap files in `std::io::BufWriter` / `std::io::BufReader`.
//!
//! To keep this crate simple, it does not read or write other image formats.
//! Converting from and to e.g. PNG is left to the caller.
//!
//! # In-memory example
//!
//! ```rust
//! use qoi_codec::{decode, encode, Image, Pixel};
//!
//! // A 1x2 image made up of two identical opaque pixels.
//! let pixel = Pixel::new(10, 10, 10, 255);
//! let image = Image::new(1, 2, vec![pixel, pixel]).expect("Invalid dimensions");
//!
//! let encoded = encode(&image).expect("Failed to encode image");
//!
//! // Header, `QOI_OP_LUMA`, a run of one pixel and the end marker.
//! assert_eq!(encoded.len(), 14 + 2 + 1 + 8);
//! assert_eq!(decode(&encoded).expect("Failed to decode image"), image);
//! ```
//!
//! # Streaming decode example
//!
//! ```rust,no_run
//! use std::fs::File;
//! use std::io::BufReader;
//! use qoi_codec::{decode_image, DecodeOptions};
//!
//! let reader = BufReader::new(File::open("image.qoi").expect("Failed to open image file"));
//! let options = DecodeOptions::default().set_max_width(4096).set_max_height(4096);
//!
//! match decode_image(reader, &options) {
//!   Ok(image) => {
//!     dbg!(image.width(), image.height());
//!   }
//!   Err(e) => {
//!     // See `error.rs` for all possible errors.
//!     panic!("{}", e);
//!   }
//! }
//! ```

pub use crate::decode::{decode, decode_image};
pub use crate::encode::{encode, encode_image};
pub use crate::error::Error;
pub use crate::image::Image;
pub use crate::meta::{
  Channels, Colorspace, ImageMeta, QOI_BYTES_END, QOI_BYTES_MAGIC, QOI_CACHE_LEN, QOI_HEADER_LEN,
  QOI_MAX_RUN,
};
pub use crate::options::{DecodeOptions, EncodeOptions};
pub use crate::pixel::Pixel;

mod decode;
mod encode;
mod error;
mod image;
mod meta;
mod op;
mod options;
mod pixel;
mod state;
