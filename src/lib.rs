// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! reg - persistent integer register
//!
//! A small CLI tool that keeps one integer in a text file.
//!
//! # Features
//!
//! - **Register store**: read and overwrite a single integer on disk
//! - **Typed reads**: distinguish a stored value from the configured default
//! - **Configuration**: register path and default from `reg.toml`, env or flags
//!
//! # Example
//!
//! ```no_run
//! use reg::config::RegConfig;
//! use reg::store::RegisterStore;
//!
//! let config = RegConfig::load().unwrap();
//! let store = RegisterStore::from_config(&config.register);
//!
//! store.write(42).unwrap();
//! assert_eq!(store.read().value(), 42);
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod store;

// Re-exports for convenience
pub use config::RegConfig;
pub use error::{RegError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of reg.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// The git branch at compile time (if available).
    pub const GIT_BRANCH: Option<&str> = option_env!("VERGEN_GIT_BRANCH");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

}
