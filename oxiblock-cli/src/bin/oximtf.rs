//! Move-to-front stage of the OxiBlock pipeline.

use clap::Parser;
use oxiblock_cli::{Mode, read_stdin, write_stdout};
use oxiblock_core::Result;

#[derive(Parser)]
#[command(name = "oximtf")]
#[command(version, about = "Move-to-front transform between stdin and stdout")]
#[command(long_about = "
Applies the move-to-front transform to raw bytes.

  oximtf - < input > input.mtf    encode
  oximtf + < input.mtf > input    decode

The encoded stream is one position code per input byte; length is implicit
from the stream itself.
")]
struct Cli {
    /// `-` to encode, `+` to decode
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
    write_stdout(&oxiblock_mtf::encode(&data))
}

fn inverse() -> Result<()> {
    let codes = read_stdin()?;
    write_stdout(&oxiblock_mtf::decode(&codes))
}
