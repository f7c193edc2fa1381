//! Output formatting for rover reports.
//!
//! The planner always leaves an artifact behind: either the rendered route
//! or the text of the error that stopped it.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use rover_lib::{write_artifact, Grid, RouteReport};

/// Output format for reports and grid summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Bracketed path followed by `steps:` and `fuel:` lines.
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
}

/// Dimensions and passable cell count of a validated grid.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct GridSummary {
    pub width: usize,
    pub height: usize,
    pub passable: usize,
}

impl GridSummary {
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            passable: grid.passable_count(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(format!(
                "grid: {}x{}, passable cells: {}",
                self.width, self.height, self.passable
            )),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("failed to serialise grid summary")
            }
        }
    }
}

/// Render a planned route in the requested format.
pub fn render_report(report: &RouteReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json => report
            .render_json()
            .context("failed to serialise route report"),
    }
}

/// Render the artifact written in place of a report when planning fails.
///
/// The whole cause chain is joined on one line, outermost message first,
/// so context added by the CLI does not hide the library's reason.
pub fn render_failure(error: &anyhow::Error) -> String {
    format!("{error:#}")
}

/// Write `contents` to `path` and optionally echo it to stdout.
pub fn emit_artifact(path: &Path, contents: &str, echo: bool) -> Result<()> {
    write_artifact(path, contents)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    if echo {
        println!("{contents}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rover_lib::{Error, Location};

    #[test]
    fn text_report_matches_library_rendering() {
        let report = RouteReport::from_path(vec![Location::new(0, 0), Location::new(1, 0)], 2);
        let rendered = render_report(&report, OutputFormat::Text).unwrap();
        assert_eq!(rendered, "[0][0]->[1][0]\nsteps: 1\nfuel: 2");
    }

    #[test]
    fn json_report_is_parseable() {
        let report = RouteReport::from_path(vec![Location::new(0, 0)], 0);
        let rendered = render_report(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["steps"], 0);
        assert_eq!(value["path"][0]["x"], 0);
    }

    #[test]
    fn failure_artifact_is_the_error_message() {
        let rendered = render_failure(&anyhow::Error::new(Error::StartImpassable));
        assert_eq!(rendered, "cannot start movement: first cell is impassable");
    }

    #[test]
    fn failure_artifact_keeps_the_cause_chain() {
        let error = anyhow::Error::new(Error::GoalImpassable).context("grid rejected");
        assert_eq!(
            render_failure(&error),
            "grid rejected: cannot start movement: last cell is impassable"
        );
    }

    #[test]
    fn grid_summary_renders_both_formats() {
        let grid = Grid::from_elevations(3, 2, vec![Some(0), None, Some(1), Some(2), Some(3), Some(4)])
            .unwrap();
        let summary = GridSummary::from_grid(&grid);
        assert_eq!(
            summary.render(OutputFormat::Text).unwrap(),
            "grid: 3x2, passable cells: 5"
        );
        let value: serde_json::Value =
            serde_json::from_str(&summary.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value["passable"], 5);
    }
}
