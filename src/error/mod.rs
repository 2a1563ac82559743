// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the reg application.
//!
//! Store errors are recoverable and handled by the dispatcher. Usage errors
//! are shown to the user with a non-zero exit status. Configuration errors
//! are fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Name used in usage messages.
pub const BIN_NAME: &str = "reg";

/// The main error type for reg operations.
#[derive(Error, Debug)]
pub enum RegError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Register file errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    // Command line misuse
    #[error("{0}")]
    Usage(#[from] UsageError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Register file errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Error opening the file: {}", system_reason(.source))]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading the file: {}", system_reason(.source))]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing the file: {}", system_reason(.source))]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The OS description of an I/O error, without the `(os error N)` suffix.
pub fn system_reason(err: &std::io::Error) -> String {
    let text = err.to_string();
    match err.raw_os_error() {
        Some(code) => text
            .strip_suffix(&format!(" (os error {})", code))
            .map(str::to_string)
            .unwrap_or(text),
        None => text,
    }
}

impl StoreError {
    /// Path of the register file involved.
    pub fn path(&self) -> &PathBuf {
        match self {
            StoreError::OpenFailed { path, .. }
            | StoreError::ReadFailed { path, .. }
            | StoreError::WriteFailed { path, .. } => path,
        }
    }
}

/// Command line misuse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("Usage: {} [get | set <value>]", BIN_NAME)]
    MissingCommand,

    #[error("Usage: {} set <value>", BIN_NAME)]
    MissingValue,

    #[error("Invalid command. Usage: {} [get | set <value>]", BIN_NAME)]
    InvalidCommand,
}

/// Result type alias for reg operations.
pub type Result<T> = std::result::Result<T, RegError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| RegError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config"),
        };
        assert!(err.to_string().contains("/path/to/config"));
    }

    #[test]
    fn test_open_failed_display() {
        let err = StoreError::OpenFailed {
            path: PathBuf::from("/nope/reg.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            err.to_string(),
            "Error opening the file: No such file or directory"
        );
        assert_eq!(err.path(), &PathBuf::from("/nope/reg.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_os_error_has_no_code_suffix() {
        let err = StoreError::OpenFailed {
            path: PathBuf::from("reg.txt"),
            source: io::Error::from_raw_os_error(2),
        };
        let text = err.to_string();
        assert!(text.starts_with("Error opening the file: "));
        assert!(!text.contains("os error"));
        assert_eq!(system_reason(&io::Error::new(io::ErrorKind::Other, "custom")), "custom");
    }

    #[test]
    fn test_usage_messages() {
        assert_eq!(
            UsageError::MissingCommand.to_string(),
            "Usage: reg [get | set <value>]"
        );
        assert_eq!(UsageError::MissingValue.to_string(), "Usage: reg set <value>");
        assert_eq!(
            UsageError::InvalidCommand.to_string(),
            "Invalid command. Usage: reg [get | set <value>]"
        );
    }

    #[test]
    fn test_usage_error_passes_through() {
        let err: RegError = UsageError::MissingValue.into();
        assert_eq!(err.to_string(), "Usage: reg set <value>");
    }

    #[test]
    fn test_context() {
        let res: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::Other, "boom"));
        let err = res.context("init").unwrap_err();
        assert_eq!(err.to_string(), "init: boom");
    }
}
