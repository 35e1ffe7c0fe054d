//! Shared plumbing for the OxiBlock command-line binaries.
//!
//! Each binary covers one pipeline stage and takes a single mode argument:
//! `-` applies the stage's forward transform from stdin to stdout, `+` the
//! inverse. Piping the stages together yields the full compressor:
//!
//! ```text
//! oxibwt - < input | oximtf - > input.obx
//! oximtf + < input.obx | oxibwt + > input
//! ```

use clap::ValueEnum;
use oxiblock_core::Result;
use std::io::{self, Read, Write};

/// Transform direction selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Apply the forward transform (raw stdin -> encoded stdout)
    #[value(name = "-")]
    Forward,
    /// Apply the inverse transform (encoded stdin -> raw stdout)
    #[value(name = "+")]
    Inverse,
}

/// Read all of standard input as raw bytes.
pub fn read_stdin() -> Result<Vec<u8>> {
    let mut data = Vec::new();
    io::stdin().lock().read_to_end(&mut data)?;
    Ok(data)
}

/// Write raw bytes to standard output and flush.
pub fn write_stdout(data: &[u8]) -> Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(data)?;
    out.flush()?;
    Ok(())
}
