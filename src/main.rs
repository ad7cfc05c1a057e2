//! pathladder - shortest paths and word ladders from the command line
//!
//! `pathladder paths <GRAPH>` runs Dijkstra from a source vertex and prints
//! every destination's path and cost. `pathladder ladder [START] [END]` finds a
//! shortest word ladder, prompting for missing words.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use cli::Cli;
use pathladder::logging;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version are informational; every other parse failure is a usage error
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    match commands::run(&cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
