//! dive_cli - Command-line front end for the dive build planner
//!
//! Every invocation loads the tables and the saved selections, applies one
//! command, saves, and prints the recalculated build.

mod app;
mod commands;
mod output;

use anyhow::Result;
use app::App;
use clap::Parser;
use commands::Command;
use std::path::PathBuf;

/// Plan a dive build and see its stats and DPS
#[derive(Parser)]
#[command(name = "dive")]
#[command(about = "Build planner for dive loadouts", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the five data tables (defaults to the built-in tables)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// JSON file the selections are saved to
    #[arg(long, global = true, value_name = "FILE", default_value = "dive_state.json")]
    state: PathBuf,

    /// Print the build report as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut app = App::open(cli.data_dir.as_deref(), &cli.state)?;
    cli.command.execute(&mut app)?;
    app.save();

    let report = app.evaluate();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_report(&report);
    }
    Ok(())
}
