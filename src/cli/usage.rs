// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Mapping of failures to user-facing output and exit status.
//!
//! Every misuse of the command line exits with status 1. Help and version
//! requests exit with status 0.

use crate::error::{RegError, UsageError};
use clap::error::ErrorKind;
use std::process::ExitCode;

/// Classify a clap parse failure as one of the usage messages, if it is one.
fn usage_for_parse_error(err: &clap::Error) -> Option<UsageError> {
    match err.kind() {
        ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument => {
            Some(UsageError::InvalidCommand)
        }
        ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            Some(UsageError::MissingCommand)
        }
        _ => None,
    }
}

/// Print a clap parse failure and pick the exit status.
pub fn exit_for_parse_error(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            match usage_for_parse_error(err) {
                Some(usage) => println!("{}", usage),
                None => {
                    let _ = err.print();
                }
            }
            ExitCode::FAILURE
        }
    }
}

/// Print a failure returned by the dispatcher and pick the exit status.
pub fn exit_for_error(err: &RegError) -> ExitCode {
    match err {
        RegError::Usage(usage) => println!("{}", usage),
        other => eprintln!("Error: {}", other),
    }
    ExitCode::FAILURE
}
