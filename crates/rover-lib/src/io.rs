//! Reading grids from delimited text and writing report artifacts.
//!
//! Grid files hold one row per line, cells separated by a delimiter
//! (comma by default). Lines starting with `#` are skipped and whitespace
//! around each token is ignored:
//!
//! ```text
//! # 3x3 terrain
//! 1, 2, 3
//! 4, X, 6
//! 7, 8, 9
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::Result;
use crate::grid::Grid;

/// File name the report is written to when no other target is given.
pub const DEFAULT_REPORT_FILE: &str = "path-plan.txt";

/// Options controlling how a grid file is tokenised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridReadOptions {
    pub delimiter: u8,
    pub comment: Option<u8>,
}

impl Default for GridReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            comment: Some(b'#'),
        }
    }
}

/// Load and validate a grid from a file.
pub fn read_grid(path: &Path, options: &GridReadOptions) -> Result<Grid> {
    debug!(path = %path.display(), "reading grid");
    let file = fs::File::open(path)?;
    parse_grid(file, options)
}

/// Parse and validate a grid from any reader.
///
/// Rows are allowed to differ in length while tokenising so that
/// [`Grid::from_tokens`] can report which row broke the rectangle.
pub fn parse_grid<R: Read>(reader: R, options: &GridReadOptions) -> Result<Grid> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(options.delimiter)
        .comment(options.comment)
        .from_reader(reader);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let grid = Grid::from_tokens(&rows)?;
    debug!(
        width = grid.width(),
        height = grid.height(),
        passable = grid.passable_count(),
        "parsed grid"
    );
    Ok(grid)
}

/// Write a report or error message to `path`, replacing any previous artifact.
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}
