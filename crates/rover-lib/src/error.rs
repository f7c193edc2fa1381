use thiserror::Error;

use crate::location::Location;

/// Convenient result alias for the rover library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The top-left cell carries the impassable marker.
    #[error("cannot start movement: first cell is impassable")]
    StartImpassable,

    /// The bottom-right cell carries the impassable marker.
    #[error("cannot start movement: last cell is impassable")]
    GoalImpassable,

    /// A token is neither a non-negative integer nor the impassable marker.
    #[error("cannot start movement: malformed grid, cell {location} holds '{token}'")]
    MalformedCell { location: Location, token: String },

    /// The input table had no rows or no columns.
    #[error("grid is empty")]
    EmptyGrid,

    /// A row does not match the width of the first row.
    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Raised when extracting from a frontier with no entries left.
    #[error("priority frontier is empty")]
    EmptyFrontier,

    /// Raised when the search never relaxed an edge into the goal cell.
    #[error("no path found from {start} to {goal}")]
    GoalUnreachable { start: Location, goal: Location },

    /// Raised when a path contains two locations that are not joined by an edge.
    #[error("{from} -> {to} is not a valid move")]
    InvalidStep { from: Location, to: Location },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for delimited grid parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error prevents the rover from starting at all.
    ///
    /// These are raised while building the grid, before any search runs.
    pub fn is_start_failure(&self) -> bool {
        matches!(
            self,
            Error::StartImpassable | Error::GoalImpassable | Error::MalformedCell { .. }
        )
    }
}
