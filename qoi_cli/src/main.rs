//! qoi: encode, decode and benchmark QOI images.
//!
//! ```sh
//! qoi encode photo.png          # writes photo.qoi
//! qoi decode photo.qoi          # writes photo_decoded.png
//! qoi benchmark 10 ./images     # compares QOI and PNG for every .png below ./images
//! ```

mod commands;
mod paths;
mod png_io;
mod report;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::{debug, Level};
use qoi_codec::{DecodeOptions, EncodeOptions};

#[derive(Parser, Debug)]
#[command(name = "qoi", version, about = "Encode, decode and benchmark QOI images")]
struct Cli {
  #[command(subcommand)]
  command: Command,

  /// Increase log verbosity (-v info, -vv debug, -vvv trace).
  #[arg(short, long, action = ArgAction::Count, global = true)]
  verbose: u8,

  /// Largest image width accepted by the decoder.
  #[arg(long, global = true, default_value_t = DecodeOptions::DEFAULT_MAX_DIMENSION)]
  max_width: u32,

  /// Largest image height accepted by the decoder.
  #[arg(long, global = true, default_value_t = DecodeOptions::DEFAULT_MAX_DIMENSION)]
  max_height: u32,

  /// Require the 8 byte end marker after the last pixel.
  #[arg(long, global = true)]
  strict: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Encode a PNG image into a .qoi file next to it.
  Encode {
    /// The PNG image to encode.
    image: PathBuf,
  },

  /// Decode a QOI image into a _decoded.png file next to it.
  Decode {
    /// The QOI image to decode.
    image: PathBuf,
  },

  /// Compare QOI against PNG for every .png file below a directory.
  Benchmark {
    /// Number of iterations each timing is averaged over.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    iter: u32,

    /// Directory searched recursively for PNG images.
    dir: PathBuf,
  },
}

impl Cli {
  fn decode_options(&self) -> DecodeOptions {
    DecodeOptions::default()
      .set_max_width(self.max_width)
      .set_max_height(self.max_height)
      .set_strict(self.strict)
  }
}

fn setup_logger(verbose: u8) {
  let level = match verbose {
    0 => Level::Warn,
    1 => Level::Info,
    2 => Level::Debug,
    _ => Level::Trace,
  };

  if let Err(e) = simple_logger::init_with_level(level) {
    eprintln!("Could not initialize logger: {}", e);
  }

  debug!("Log level: {}", level);
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  setup_logger(cli.verbose);

  let options = cli.decode_options();

  match &cli.command {
    Command::Encode { image } => commands::encode_file(image, &EncodeOptions::default()),
    Command::Decode { image } => commands::decode_file(image, &options),
    Command::Benchmark { iter, dir } => commands::benchmark_dir(*iter, dir, &options),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory;

  #[test]
  fn test_cli_is_consistent() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_global_flags() {
    let cli = Cli::parse_from(["qoi", "decode", "a.qoi", "-vv", "--max-width", "32", "--strict"]);
    let options = cli.decode_options();

    assert_eq!(cli.verbose, 2);
    assert_eq!(options.max_width(), 32);
    assert_eq!(options.max_height(), DecodeOptions::DEFAULT_MAX_DIMENSION);
    assert!(options.strict());
    assert!(matches!(cli.command, Command::Decode { ref image } if image == &PathBuf::from("a.qoi")));
  }

  #[test]
  fn test_benchmark_requires_an_iteration() {
    assert!(Cli::try_parse_from(["qoi", "benchmark", "0", "images"]).is_err());

    let cli = Cli::try_parse_from(["qoi", "benchmark", "3", "images"]).expect("Valid arguments");
    assert!(matches!(cli.command, Command::Benchmark { iter: 3, .. }));
  }
}
