//! Plan command handler: load a grid, run the rover search, write the report.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{error, info};

use rover_cli::output::{emit_artifact, render_failure, render_report, OutputFormat};
use rover_lib::{plan_route, read_grid, GridReadOptions, RouteReport};

use super::delimiter_byte;

/// Arguments for the plan command.
#[derive(Debug, Clone)]
pub struct PlanCommandArgs {
    /// Grid file to read.
    pub grid: PathBuf,
    /// Report file to write.
    pub output: PathBuf,
    pub format: OutputFormat,
    /// Cell delimiter used by the grid file.
    pub delimiter: char,
    /// Echo the artifact to stdout as well.
    pub stdout: bool,
}

/// Handle the plan subcommand.
///
/// An artifact is always written: the rendered report on success, otherwise
/// the error message. Failures still return an error so the process exits
/// non-zero.
pub fn handle_plan_command(args: &PlanCommandArgs) -> Result<()> {
    match plan_and_render(args) {
        Ok((report, contents)) => {
            emit_artifact(&args.output, &contents, args.stdout)?;
            info!(
                steps = report.steps,
                fuel = report.fuel,
                output = %args.output.display(),
                "route planned"
            );
            Ok(())
        }
        Err(err) => {
            let contents = render_failure(&err);
            emit_artifact(&args.output, &contents, args.stdout)?;
            error!(error = %contents, output = %args.output.display(), "rover could not plan a route");
            Err(err.context(format!("failed to plan route for {}", args.grid.display())))
        }
    }
}

fn plan_and_render(args: &PlanCommandArgs) -> Result<(RouteReport, String)> {
    let options = GridReadOptions {
        delimiter: delimiter_byte(args.delimiter)?,
        ..GridReadOptions::default()
    };
    let grid = read_grid(&args.grid, &options)?;
    let report = plan_route(&grid)?;
    let contents = render_report(&report, args.format)?;
    Ok((report, contents))
}
