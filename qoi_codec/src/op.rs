use std::io;

use crate::error::Error;

// An enumeration of each possible QOI encoding "chunk", or Op. Deltas are
// stored unbiased, the wire biases are applied in `into_bytes` and removed in
// `try_from_bytes`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Op {
  // `QOI_OP_INDEX`, index into the state's pixel cache.
  //
  // | 7 6   5  4  3  2  1  0 |
  // |------------------------|
  // | 0 0 |      index       |
  //
  Index(u8),

  // `QOI_OP_DIFF`, contains the red, green, and blue difference from the
  // previous pixel, written with a bias of +2.
  //
  // | 7 6   5  4  3  2  1  0 |
  // |------------------------|
  // | 0 1 |  dr |  dg |  db  |
  //
  Diff(i8, i8, i8),

  // `QOI_OP_LUMA`, contains the green difference from the previous pixel
  // (bias +32) and the red-green and blue-green differences (bias +8).
  //
  // | 7 6   5  4  3  2  1  0 | 7  6  5  4   3  2  1  0 |
  // |------------------------|-------------------------|
  // | 1 0 |       dg         |   dr - dg  |   db - dg  |
  //
  Luma(i8, i8, i8),

  // `QOI_OP_RUN`, contains the length of the run, 1..=62, written with a
  // bias of -1.
  //
  // | 7 6   5  4  3  2  1  0 |
  // |------------------------|
  // | 1 1 |      run         |
  Run(u8),

  // `QOI_OP_RGB`, contains the red, green, and blue values of a pixel.
  //
  // | 7  6  5  4  3  2  1  0 | 7..0 | 7..0 | 7..0 |
  // |------------------------|------|------|------|
  // | 1  1  1  1  1  1  1  0 |   r  |   g  |   b  |
  //
  Rgb(u8, u8, u8),

  // `QOI_OP_RGBA`, contains the red, green, blue, and alpha values of a pixel.
  //
  // | 7  6  5  4  3  2  1  0 | 7..0 | 7..0 | 7..0 | 7..0 |
  // |------------------------|------|------|------|------|
  // | 1  1  1  1  1  1  1  1 |   r  |   g  |   b  |   a  |
  //
  Rgba(u8, u8, u8, u8),
}

impl Op {
  const MASK_DIFF: u8 = 0x03;
  const MASK_LUMA_1: u8 = 0x3f;
  const MASK_LUMA_2: u8 = 0x0f;
  const MASK_LOW_6: u8 = 0x3f;
  const MASK_TAG: u8 = 0xc0;

  const TAG_DIFF: u8 = 0x40;
  const TAG_INDEX: u8 = 0x00;
  const TAG_LUMA: u8 = 0x80;
  const TAG_RGB: u8 = 0xfe;
  const TAG_RGBA: u8 = 0xff;
  const TAG_RUN: u8 = 0xc0;

  const BIAS_DIFF: i8 = 2;
  const BIAS_LUMA_G: i8 = 32;
  const BIAS_LUMA_RB: i8 = 8;

  // Encodes the `Op` and writes it as bytes into the given writer.
  pub fn into_bytes<W: io::Write>(self, mut writer: W) -> Result<(), io::Error> {
    match self {
      Op::Index(index) => {
        writer.write_all(&[Op::TAG_INDEX | (index & Op::MASK_LOW_6)])?;
      }
      Op::Diff(dr, dg, db) => {
        let dr = (dr + Op::BIAS_DIFF) as u8;
        let dg = (dg + Op::BIAS_DIFF) as u8;
        let db = (db + Op::BIAS_DIFF) as u8;

        writer.write_all(&[Op::TAG_DIFF | (dr << 4) | (dg << 2) | db])?;
      }
      Op::Luma(dg, dr_dg, db_dg) => {
        let dg = (dg + Op::BIAS_LUMA_G) as u8;
        let dr_dg = (dr_dg + Op::BIAS_LUMA_RB) as u8;
        let db_dg = (db_dg + Op::BIAS_LUMA_RB) as u8;

        writer.write_all(&[Op::TAG_LUMA | dg, (dr_dg << 4) | db_dg])?;
      }
      Op::Run(run_count) => {
        writer.write_all(&[Op::TAG_RUN | (run_count - 1)])?;
      }
      Op::Rgb(r, g, b) => {
        writer.write_all(&[Op::TAG_RGB, r, g, b])?;
      }
      Op::Rgba(r, g, b, a) => {
        writer.write_all(&[Op::TAG_RGBA, r, g, b, a])?;
      }
    }

    Ok(())
  }

  // Attempts to decode an `Op` from the given bytes. The two full byte tags
  // are checked before the 2-bit tags, since they share the `Run` prefix.
  pub fn try_from_bytes<I>(bytes: &mut I) -> Result<Self, Error>
  where
    I: Iterator<Item = Result<u8, io::Error>>,
  {
    let byte = next_byte(bytes)?;

    if byte == Op::TAG_RGB {
      return Ok(Op::Rgb(next_byte(bytes)?, next_byte(bytes)?, next_byte(bytes)?));
    }

    if byte == Op::TAG_RGBA {
      return Ok(Op::Rgba(
        next_byte(bytes)?,
        next_byte(bytes)?,
        next_byte(bytes)?,
        next_byte(bytes)?,
      ));
    }

    let op = match byte & Op::MASK_TAG {
      Op::TAG_INDEX => Op::Index(byte & Op::MASK_LOW_6),
      Op::TAG_DIFF => Op::Diff(
        (byte >> 4 & Op::MASK_DIFF) as i8 - Op::BIAS_DIFF,
        (byte >> 2 & Op::MASK_DIFF) as i8 - Op::BIAS_DIFF,
        (byte & Op::MASK_DIFF) as i8 - Op::BIAS_DIFF,
      ),
      Op::TAG_LUMA => {
        let next = next_byte(bytes)?;

        Op::Luma(
          (byte & Op::MASK_LUMA_1) as i8 - Op::BIAS_LUMA_G,
          (next >> 4 & Op::MASK_LUMA_2) as i8 - Op::BIAS_LUMA_RB,
          (next & Op::MASK_LUMA_2) as i8 - Op::BIAS_LUMA_RB,
        )
      }
      _ => Op::Run((byte & Op::MASK_LOW_6) + 1),
    };

    Ok(op)
  }
}

// Pulls the next byte, treating an exhausted source as a truncated stream.
fn next_byte<I>(bytes: &mut I) -> Result<u8, Error>
where
  I: Iterator<Item = Result<u8, io::Error>>,
{
  Ok(bytes.next().ok_or(Error::UnexpectedEof)??)
}
