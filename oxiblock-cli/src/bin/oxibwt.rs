//! Burrows-Wheeler stage of the OxiBlock pipeline.

use clap::Parser;
use oxiblock_bwt::BwtEncoding;
use oxiblock_cli::{Mode, read_stdin, write_stdout};
use oxiblock_core::Result;

#[derive(Parser)]
#[command(name = "oxibwt")]
#[command(version, about = "Burrows-Wheeler transform between stdin and stdout")]
#[command(long_about = "
Applies the Burrows-Wheeler transform to raw bytes.

  oxibwt - < plain.bin > plain.bwt    forward transform
  oxibwt + < plain.bwt > plain.bin    inverse transform

The encoded stream is a 32-bit big-endian block pointer followed by the
last-column bytes.
")]
struct Cli {
    /// `-` to transform, `+` to invert
    #[arg(value_enum, allow_hyphen_values = true)]
    mode: Mode,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.mode {
        Mode::Forward => forward(),
        Mode::Inverse => inverse(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn forward() -> Result<()> {
    let data = read_stdin()?;
    let mut stream = Vec::new();
    oxiblock_bwt::encode(&data).write_to(&mut stream)?;
    write_stdout(&stream)
}

fn inverse() -> Result<()> {
    let stream = read_stdin()?;
    let mut slice = stream.as_slice();
    let encoding = BwtEncoding::read_from(&mut slice)?;
    write_stdout(&encoding.decode()?)
}
