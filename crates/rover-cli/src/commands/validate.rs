//! Validate command handler: check that a grid file can start a rover.

use std::path::Path;

use anyhow::{Context, Result};

use rover_cli::output::{GridSummary, OutputFormat};
use rover_lib::{read_grid, GridReadOptions};

use super::delimiter_byte;

/// Handle the validate subcommand.
///
/// Prints the grid dimensions and passable cell count when the grid is valid.
pub fn handle_validate_command(path: &Path, delimiter: char, format: OutputFormat) -> Result<()> {
    let options = GridReadOptions {
        delimiter: delimiter_byte(delimiter)?,
        ..GridReadOptions::default()
    };
    let grid =
        read_grid(path, &options).with_context(|| format!("invalid grid {}", path.display()))?;

    println!("{}", GridSummary::from_grid(&grid).render(format)?);
    Ok(())
}
