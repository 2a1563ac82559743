// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for reg.
//!
//! This module handles command-line argument parsing and command dispatch.

pub mod args;
mod dispatch;
mod usage;

pub use args::{Cli, Commands, OutputFormat};
pub use dispatch::{run, run_with};
pub use usage::{exit_for_error, exit_for_parse_error};
