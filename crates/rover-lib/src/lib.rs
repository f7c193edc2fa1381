//! Rover path planner library entry points.
//!
//! This crate parses terrain grids, runs the best-first rover search from the
//! top-left cell to the bottom-right cell, and turns the result into a report.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod frontier;
pub mod grid;
pub mod io;
pub mod location;
pub mod report;
pub mod search;

pub use error::{Error, Result};
pub use frontier::PriorityFrontier;
pub use grid::{is_diagonal, manhattan, Grid, IMPASSABLE_MARKER};
pub use io::{parse_grid, read_grid, write_artifact, GridReadOptions, DEFAULT_REPORT_FILE};
pub use location::Location;
pub use report::{plan_route, RouteReport};
pub use search::{DiagonalParity, PathSearch, RelaxationEvent, SearchOutcome};
