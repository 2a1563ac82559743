// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the configuration structures that can be loaded from reg.toml.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Register file used when nothing else is configured.
pub const DEFAULT_REGISTER_FILE: &str = "reg.txt";

/// Value returned by a read when the register file cannot be opened.
pub const DEFAULT_REGISTER_VALUE: i64 = 666;

/// The main configuration structure for reg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RegConfig {
    /// Register configuration.
    pub register: RegisterConfig,
}

impl RegConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Apply command line / environment overrides on top of the loaded file.
    pub fn with_overrides(mut self, path: Option<PathBuf>, default_value: Option<i64>) -> Self {
        if let Some(path) = path {
            self.register.path = path;
        }
        if let Some(value) = default_value {
            self.register.default_value = value;
        }
        self
    }
}

/// Where the register lives and what a missing register reads as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterConfig {
    /// Path of the register file.
    pub path: PathBuf,

    /// Fallback value for reads of a missing register.
    pub default_value: i64,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_REGISTER_FILE),
            default_value: DEFAULT_REGISTER_VALUE,
        }
    }
}
