// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for reg.
//!
//! This module handles locating and parsing the configuration file and
//! layering command line overrides on top of it.

mod loader;
mod schema;

pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
