use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::grid::Grid;
use crate::location::Location;
use crate::search::PathSearch;

/// Planned rover route with its step count and fuel total.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteReport {
    pub path: Vec<Location>,
    pub steps: usize,
    pub fuel: u64,
}

impl RouteReport {
    /// Build a report for an already extracted path.
    pub fn from_path(path: Vec<Location>, fuel: u64) -> Self {
        let steps = path.len().saturating_sub(1);
        Self { path, steps, fuel }
    }

    /// Render the report as three lines: the bracketed path, the step count
    /// and the fuel total. No trailing newline.
    pub fn render_text(&self) -> String {
        let joined = self
            .path
            .iter()
            .map(Location::to_string)
            .collect::<Vec<_>>()
            .join("->");

        let mut buffer = String::new();
        let _ = writeln!(buffer, "{joined}");
        let _ = writeln!(buffer, "steps: {}", self.steps);
        let _ = write!(buffer, "fuel: {}", self.fuel);
        buffer
    }

    /// Render the report as pretty-printed JSON.
    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run the rover search over `grid` and summarise the extracted path.
pub fn plan_route(grid: &Grid) -> Result<RouteReport> {
    let search = PathSearch::run(grid)?;
    let path = search.extract_path()?;
    let fuel = search.extract_cost(&path)?;
    Ok(RouteReport::from_path(path, fuel))
}
