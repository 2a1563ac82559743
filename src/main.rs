// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! reg - persistent integer register
//!
//! Reads and writes a single integer kept in a text file.

use clap::Parser;
use reg::cli::{exit_for_error, exit_for_parse_error, run, Cli};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return exit_for_parse_error(&e),
    };

    // Set up logging
    setup_logging(cli.debug);

    // Run the CLI
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => exit_for_error(&e),
    }
}

/// Set up logging/tracing.
///
/// Logs go to stderr; stdout carries command output only.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("reg=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
