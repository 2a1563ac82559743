// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// reg - persistent integer register
///
/// Stores a single integer in a text file and reads it back.
///
/// Options are only recognised before the command; everything after `get`
/// or `set <value>` is ignored.
#[derive(Parser, Debug)]
#[command(name = "reg")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Persistent single-integer register", long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Register file path
    #[arg(short, long, env = "REG_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Value reported when the register file cannot be opened
    #[arg(
        long = "default",
        env = "REG_DEFAULT",
        value_name = "INT",
        allow_negative_numbers = true
    )]
    pub default_value: Option<i64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, env = "REG_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the register value
    #[command(disable_help_flag = true)]
    Get(GetArgs),

    /// Overwrite the register value
    #[command(disable_help_flag = true)]
    Set(SetArgs),

    /// Print version information
    Version,
}

/// Arguments for the get command.
#[derive(Parser, Debug, Default, Clone)]
pub struct GetArgs {
    /// Ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// Arguments for the set command.
#[derive(Parser, Debug, Default, Clone)]
pub struct SetArgs {
    /// New register value; anything that is not an integer is stored as 0
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: Option<String>,

    /// Ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// Get the effective output format, defaulting to text.
    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}
