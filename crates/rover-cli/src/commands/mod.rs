//! Handlers for the `plan` and `validate` subcommands, plus argument helpers
//! they share.

pub mod plan;
pub mod validate;

use anyhow::{bail, Result};

/// Convert a single-character delimiter argument into the byte the grid reader expects.
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got '{delimiter}'");
    }
    Ok(delimiter as u8)
}
