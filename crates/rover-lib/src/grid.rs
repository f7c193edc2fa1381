use crate::error::{Error, Result};
use crate::location::Location;

/// Token marking a cell the rover cannot enter.
pub const IMPASSABLE_MARKER: &str = "X";

/// Neighbour offsets in enumeration order: right, left, down, up, then the
/// diagonals down-right, down-left, up-right, up-left. The search breaks
/// frontier ties by insertion order, so this order is observable in results.
const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// Rectangular terrain of optional elevations. `None` cells are impassable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<u32>>,
}

impl Grid {
    /// Build a grid from a table of tokens, one inner vector per row.
    ///
    /// The start and goal cells are checked for the impassable marker before
    /// any other token is parsed, so a grid that is both blocked and malformed
    /// reports the blocked endpoint.
    pub fn from_tokens<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(Error::EmptyGrid);
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(Error::RaggedGrid {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }

        if rows[0][0].as_ref() == IMPASSABLE_MARKER {
            return Err(Error::StartImpassable);
        }
        if rows[height - 1][width - 1].as_ref() == IMPASSABLE_MARKER {
            return Err(Error::GoalImpassable);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            for (x, token) in row.iter().enumerate() {
                cells.push(parse_token(token.as_ref(), Location::new(x, y))?);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from already-parsed elevations laid out row by row.
    pub fn from_elevations(width: usize, height: usize, cells: Vec<Option<u32>>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid);
        }
        if cells.len() != width * height {
            return Err(Error::RaggedGrid {
                row: cells.len() / width,
                expected: width,
                found: cells.len() % width,
            });
        }
        if cells[0].is_none() {
            return Err(Error::StartImpassable);
        }
        if cells[width * height - 1].is_none() {
            return Err(Error::GoalImpassable);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The fixed start cell, always the top-left corner.
    pub fn start(&self) -> Location {
        Location::new(0, 0)
    }

    /// The fixed goal cell, always the bottom-right corner.
    pub fn goal(&self) -> Location {
        Location::new(self.width - 1, self.height - 1)
    }

    pub fn contains(&self, location: Location) -> bool {
        location.x < self.width && location.y < self.height
    }

    /// Elevation at `location`, or `None` when out of bounds or impassable.
    pub fn elevation(&self, location: Location) -> Option<u32> {
        if !self.contains(location) {
            return None;
        }
        self.cells[location.y * self.width + location.x]
    }

    pub fn is_passable(&self, location: Location) -> bool {
        self.elevation(location).is_some()
    }

    /// Number of cells the rover may enter.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Return the in-bounds passable cells adjacent to `location` in all eight directions.
    pub fn neighbours(&self, location: Location) -> Vec<Location> {
        DIRECTIONS
            .iter()
            .filter_map(|&(dx, dy)| location.offset(dx, dy))
            .filter(|&next| self.is_passable(next))
            .collect()
    }

    /// Base cost of moving between two passable cells: elevation change plus one.
    ///
    /// Adjacency is not checked here; callers pass neighbours or consecutive path cells.
    pub fn edge_cost(&self, from: Location, to: Location) -> Option<u64> {
        let a = self.elevation(from)?;
        let b = self.elevation(to)?;
        Some(u64::from(a.abs_diff(b)) + 1)
    }
}

fn parse_token(token: &str, location: Location) -> Result<Option<u32>> {
    if token == IMPASSABLE_MARKER {
        return Ok(None);
    }
    token
        .parse::<u32>()
        .map(Some)
        .map_err(|_| Error::MalformedCell {
            location,
            token: token.to_string(),
        })
}

/// True when both coordinates differ by exactly one.
pub fn is_diagonal(a: Location, b: Location) -> bool {
    a.x.abs_diff(b.x) == 1 && a.y.abs_diff(b.y) == 1
}

/// Manhattan distance, used as the search heuristic.
pub fn manhattan(a: Location, b: Location) -> u64 {
    (a.x.abs_diff(b.x) + a.y.abs_diff(b.y)) as u64
}
