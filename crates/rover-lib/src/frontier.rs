//! Working set of locations awaiting expansion.
//!
//! The frontier is an unordered list scanned in full on every extraction.
//! Extraction cost is O(n), which is fine for the grid sizes the rover plans
//! over. Ties go to the entry inserted first; the search's relaxation log and
//! therefore its reconstructed path depend on that, so a heap (with its own
//! tie order) is not a drop-in replacement.

use crate::error::{Error, Result};
use crate::location::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    location: Location,
    priority: u64,
}

/// Multiset of `(location, priority)` pairs with linear-scan minimum extraction.
#[derive(Debug, Clone, Default)]
pub struct PriorityFrontier {
    entries: Vec<FrontierEntry>,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. The same location may be present several times.
    pub fn insert(&mut self, location: Location, priority: u64) {
        self.entries.push(FrontierEntry { location, priority });
    }

    /// Remove and return the location with the lowest priority.
    ///
    /// The earliest inserted entry wins among equal priorities.
    pub fn extract_min(&mut self) -> Result<Location> {
        let mut best: Option<(usize, u64)> = None;
        for (index, entry) in self.entries.iter().enumerate() {
            match best {
                Some((_, priority)) if entry.priority >= priority => {}
                _ => best = Some((index, entry.priority)),
            }
        }

        let (index, _) = best.ok_or(Error::EmptyFrontier)?;
        Ok(self.entries.remove(index).location)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
