use qoi_codec::{decode, decode_image, DecodeOptions, Error, Pixel};

fn stream(width: u32, height: u32, ops: &[u8]) -> Vec<u8> {
  let mut bytes = b"qoif".to_vec();
  bytes.extend_from_slice(&width.to_be_bytes());
  bytes.extend_from_slice(&height.to_be_bytes());
  bytes.extend_from_slice(&[4, 0]);
  bytes.extend_from_slice(ops);
  bytes.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 1]);
  bytes
}

#[test]
fn test_decoding_blank_image() {
  let image = decode(&stream(0, 0, &[])).expect("Failed to decode image");

  assert_eq!(image.width(), 0);
  assert_eq!(image.height(), 0);
  assert!(image.pixels().is_empty());
}

#[test]
fn test_decoding_two_identical_pixels() {
  let image = decode(&stream(1, 2, &[0x80 | 42, 0x88, 0xc0])).expect("Failed to decode image");

  assert_eq!(image.pixels(), &[Pixel::new(10, 10, 10, 255); 2]);
}

#[test]
fn test_decoding_every_op() {
  let source = stream(9, 1, &[
    0xfe, 100, 100, 100,      // Rgb
    0x40 | 3 << 4 | 1 << 2 | 2, // Diff(1, -1, 0)
    0x80 | 37, 13 << 4 | 1,   // Luma(5, 5, -7)
    0xc0 | 1,                 // Run(2)
    0xff, 1, 2, 3, 4,         // Rgba
    17,                       // Index of (100, 100, 100, 255)
    0xc0,                     // Run(1)
    0x40 | 2 << 4 | 2 << 2 | 2, // Diff(0, 0, 0)
  ]);

  let image = decode(&source).expect("Failed to decode image");

  assert_eq!(
    image.pixels(),
    &[
      Pixel::new(100, 100, 100, 255),
      Pixel::new(101, 99, 100, 255),
      Pixel::new(111, 104, 98, 255),
      Pixel::new(111, 104, 98, 255),
      Pixel::new(111, 104, 98, 255),
      Pixel::new(1, 2, 3, 4),
      Pixel::new(100, 100, 100, 255),
      Pixel::new(100, 100, 100, 255),
      Pixel::new(100, 100, 100, 255),
    ]
  );
}

#[test]
fn test_decoding_fills_last_pixel_from_run() {
  let image = decode(&stream(63, 1, &[0xc0 | 61, 0xc0])).expect("Failed to decode image");

  assert_eq!(image.pixels().len(), 63);
  assert!(image.pixels().iter().all(|pixel| *pixel == Pixel::new(0, 0, 0, 255)));
}

#[test]
fn test_decoding_wraps_around() {
  // Diff(-2, -2, -2) from the implicit (0, 0, 0, 255).
  let image = decode(&stream(1, 1, &[0x40])).expect("Failed to decode image");

  assert_eq!(image.pixels(), &[Pixel::new(254, 254, 254, 255)]);
}

#[test]
fn test_decoding_incomplete_image() {
  let mut source = stream(2, 1, &[0xfe, 1, 2, 3, 0xfe, 4]);
  source.truncate(14 + 6);

  assert_eq!(decode(&source), Err(Error::UnexpectedEof));
}

#[test]
fn test_decoding_missing_pixels() {
  let mut source = stream(3, 1, &[0xfe, 1, 2, 3]);
  source.truncate(14 + 4);

  assert_eq!(decode(&source), Err(Error::UnexpectedEof));
}

#[test]
fn test_decoding_bad_magic() {
  let mut source = stream(1, 1, &[0xc0]);
  source[0] = b'p';

  assert_eq!(decode(&source), Err(Error::InvalidHeader));
}

#[test]
fn test_decoding_beyond_limits() {
  let source = stream(100, 2, &[]);
  let options = DecodeOptions::default().set_max_width(64);

  assert_eq!(
    decode_image(source.as_slice(), &options),
    Err(Error::LimitExceeded { width: 100, height: 2, max_width: 64, max_height: 16384 })
  );
}

#[test]
fn test_decoding_huge_header_does_not_allocate_upfront() {
  let source = stream(u32::MAX, u32::MAX, &[0xfe, 1, 2, 3]);
  let options = DecodeOptions::default()
    .set_max_width(u32::MAX)
    .set_max_height(u32::MAX);

  assert!(decode_image(source.as_slice(), &options).is_err());
}

#[test]
fn test_strict_decoding_checks_end_marker() {
  let strict = DecodeOptions::default().set_strict(true);
  let source = stream(1, 1, &[0xc0]);

  assert!(decode_image(source.as_slice(), &strict).is_ok());

  let mut corrupt = source.clone();
  let last = corrupt.len() - 1;
  corrupt[last] = 2;

  assert_eq!(decode_image(corrupt.as_slice(), &strict), Err(Error::InvalidTrailer));
  assert!(decode(&corrupt).is_ok());

  let missing = &source[..source.len() - 8];

  assert_eq!(decode_image(missing, &strict), Err(Error::InvalidTrailer));
  assert!(decode(missing).is_ok());
}

#[test]
fn test_decoding_ignores_header_metadata() {
  let mut source = stream(1, 1, &[0xc0]);
  source[12] = 9;
  source[13] = 200;

  assert_eq!(decode(&source).expect("Failed to decode image").pixels(), &[Pixel::new(0, 0, 0, 255)]);
}
