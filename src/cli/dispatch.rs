// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::RegConfig;
use crate::error::{Result, ResultExt, StoreError, UsageError};
use crate::store::{parse_value, Reading, RegisterStore};
use console::style;
use serde::Serialize;
use std::io::Write;

use super::args::{Cli, Commands, OutputFormat, SetArgs};

/// JSON shape printed by `get --format json`.
#[derive(Debug, Serialize)]
struct GetReport {
    value: i64,
    source: &'static str,
}

/// JSON shape printed by `set --format json`.
#[derive(Debug, Serialize)]
struct SetReport {
    value: i64,
    written: bool,
}

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let mut out = std::io::stdout().lock();
    run_with(cli, &mut out)
}

/// Run the CLI, writing command output to `out`.
pub fn run_with(cli: Cli, out: &mut impl Write) -> Result<()> {
    let command = cli.command.clone().ok_or(UsageError::MissingCommand)?;

    match command {
        Commands::Get(_) => run_get(&cli, &load_store(&cli)?, out),
        Commands::Set(args) => run_set(&cli, &load_store(&cli)?, args, out),
        Commands::Version => run_version(out),
    }
}

/// Resolve the register location from config file and overrides.
fn load_store(cli: &Cli) -> Result<RegisterStore> {
    let config = if let Some(config_path) = &cli.config {
        RegConfig::load_from(config_path)?
    } else {
        RegConfig::load()?
    };
    let config = config.with_overrides(cli.file.clone(), cli.default_value);

    tracing::debug!("Using register file {:?}", config.register.path);
    Ok(RegisterStore::from_config(&config.register))
}

/// Run the get command.
fn run_get(cli: &Cli, store: &RegisterStore, out: &mut impl Write) -> Result<()> {
    let reading = store.read();

    if let Reading::Defaulted { cause, .. } = &reading {
        report_store_error(cause);
    }

    match cli.output_format() {
        OutputFormat::Text => writeln!(out, "reg value: {}", reading.value())?,
        OutputFormat::Json => {
            let report = GetReport {
                value: reading.value(),
                source: if reading.is_stored() { "stored" } else { "default" },
            };
            let json = serde_json::to_string(&report).context("json")?;
            writeln!(out, "{}", json)?;
        }
    }

    Ok(())
}

/// Run the set command.
fn run_set(cli: &Cli, store: &RegisterStore, args: SetArgs, out: &mut impl Write) -> Result<()> {
    let raw = args.value.ok_or(UsageError::MissingValue)?;
    let value = parse_value(&raw);

    tracing::debug!("Setting register to {} (argument {:?})", value, raw);

    let written = match store.write(value) {
        Ok(()) => true,
        Err(e) => {
            report_store_error(&e);
            false
        }
    };

    match cli.output_format() {
        OutputFormat::Text => writeln!(out, "set reg value to {}", value)?,
        OutputFormat::Json => {
            let json = serde_json::to_string(&SetReport { value, written }).context("json")?;
            writeln!(out, "{}", json)?;
        }
    }

    Ok(())
}

/// Store failures are recovered from; they only produce a diagnostic.
fn report_store_error(err: &StoreError) {
    tracing::debug!("Register file {:?} unavailable: {}", err.path(), err);
    eprintln!("{}", style(err).red());
}

/// Run the version command.
fn run_version(out: &mut impl Write) -> Result<()> {
    writeln!(out, "reg {}", crate::version::version_string())?;

    if let Some(sha) = crate::version::GIT_SHA {
        writeln!(out, "git commit: {}", sha)?;
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        writeln!(out, "commit date: {}", date)?;
    }
    if let Some(branch) = crate::version::GIT_BRANCH {
        writeln!(out, "branch: {}", branch)?;
    }

    Ok(())
}
