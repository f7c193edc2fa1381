use std::fmt;

use serde::Serialize;

/// Cell coordinate within a grid: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Location {
    pub x: usize,
    pub y: usize,
}

impl Location {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Apply a signed offset, returning `None` when either coordinate would go negative.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}]", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_bracketed_coordinates() {
        assert_eq!(Location::new(3, 7).to_string(), "[3][7]");
    }

    #[test]
    fn offset_rejects_negative_coordinates() {
        let origin = Location::new(0, 0);
        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(0, -1), None);
        assert_eq!(origin.offset(1, 1), Some(Location::new(1, 1)));
    }
}
