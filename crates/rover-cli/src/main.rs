mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use rover_cli::output::OutputFormat;
use rover_lib::DEFAULT_REPORT_FILE;

use commands::plan::{handle_plan_command, PlanCommandArgs};
use commands::validate::handle_validate_command;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rover terrain path planner")]
struct Cli {
    /// Log filter directive (overrides RUST_LOG), e.g. `debug` or `rover_lib=trace`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a route from the top-left to the bottom-right cell and write the report.
    Plan {
        /// Grid file: one row per line, cells separated by the delimiter, `X` for impassable.
        #[arg(long)]
        grid: PathBuf,
        /// Report file to write (the error message is written here on failure).
        #[arg(long, default_value = DEFAULT_REPORT_FILE)]
        output: PathBuf,
        /// Report format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Cell delimiter used by the grid file.
        #[arg(long, default_value_t = ',')]
        delimiter: char,
        /// Also print the report to stdout.
        #[arg(long)]
        stdout: bool,
    },
    /// Check that a grid file is well-formed and both endpoints are passable.
    Validate {
        /// Grid file to check.
        #[arg(long)]
        grid: PathBuf,
        /// Cell delimiter used by the grid file.
        #[arg(long, default_value_t = ',')]
        delimiter: char,
        /// Summary format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match cli.command {
        Command::Plan {
            grid,
            output,
            format,
            delimiter,
            stdout,
        } => handle_plan_command(&PlanCommandArgs {
            grid,
            output,
            format,
            delimiter,
            stdout,
        }),
        Command::Validate {
            grid,
            delimiter,
            format,
        } => handle_validate_command(&grid, delimiter, format),
    }
}

fn init_tracing(directive: Option<&str>) {
    let env_filter = match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
