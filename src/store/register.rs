// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! File-backed register store.

use crate::config::RegisterConfig;
use crate::error::StoreError;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

/// Only the first line of the register file is considered, up to this many bytes.
pub const MAX_LINE_BYTES: u64 = 1024;

/// Outcome of reading the register.
#[derive(Debug)]
pub enum Reading {
    /// The register file was opened and its first line parsed.
    Stored(i64),
    /// The register file could not be used; the configured default applies.
    Defaulted { value: i64, cause: StoreError },
}

impl Reading {
    /// The value to report, whether stored or defaulted.
    pub fn value(&self) -> i64 {
        match self {
            Reading::Stored(value) => *value,
            Reading::Defaulted { value, .. } => *value,
        }
    }

    /// Whether the value came from the register file.
    pub fn is_stored(&self) -> bool {
        matches!(self, Reading::Stored(_))
    }
}

/// Parse register text, treating anything that is not a single integer as 0.
pub fn parse_value(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}

/// Reads and writes the register file.
#[derive(Debug, Clone)]
pub struct RegisterStore {
    path: PathBuf,
    default_value: i64,
}

impl RegisterStore {
    /// Create a store for the given file and fallback value.
    pub fn new(path: impl Into<PathBuf>, default_value: i64) -> Self {
        Self {
            path: path.into(),
            default_value,
        }
    }

    /// Create a store from the register section of the configuration.
    pub fn from_config(config: &RegisterConfig) -> Self {
        Self::new(config.path.clone(), config.default_value)
    }

    /// Path of the register file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the register.
    ///
    /// Never fails: an unopenable or unreadable file yields
    /// [`Reading::Defaulted`], and a malformed first line reads as 0.
    pub fn read(&self) -> Reading {
        match self.read_line() {
            Ok(line) => {
                let value = parse_value(&line);
                tracing::debug!("Read register value {} from {:?}", value, self.path);
                Reading::Stored(value)
            }
            Err(cause) => {
                tracing::debug!(
                    "Falling back to default register value {}",
                    self.default_value
                );
                Reading::Defaulted {
                    value: self.default_value,
                    cause,
                }
            }
        }
    }

    fn read_line(&self) -> Result<String, StoreError> {
        let file = File::open(&self.path).map_err(|source| StoreError::OpenFailed {
            path: self.path.clone(),
            source,
        })?;

        let mut line = Vec::new();
        BufReader::new(file)
            .take(MAX_LINE_BYTES)
            .read_until(b'\n', &mut line)
            .map_err(|source| StoreError::ReadFailed {
                path: self.path.clone(),
                source,
            })?;

        Ok(String::from_utf8(line).unwrap_or_default())
    }

    /// Overwrite the register with `value`, truncating previous contents.
    pub fn write(&self, value: i64) -> Result<(), StoreError> {
        let mut file = File::create(&self.path).map_err(|source| StoreError::OpenFailed {
            path: self.path.clone(),
            source,
        })?;

        write!(file, "{}", value).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!("Wrote register value {} to {:?}", value, self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> RegisterStore {
        RegisterStore::new(dir.path().join("reg.txt"), 666)
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("42"), 42);
        assert_eq!(parse_value("-17\n"), -17);
        assert_eq!(parse_value("  8 "), 8);
        assert_eq!(parse_value(""), 0);
        assert_eq!(parse_value("abc"), 0);
        assert_eq!(parse_value("12abc"), 0);
        assert_eq!(parse_value("99999999999999999999999"), 0);
    }

    #[test]
    fn test_missing_file_defaults() {
        let dir = TempDir::new().unwrap();
        let reading = store_in(&dir).read();

        assert_eq!(reading.value(), 666);
        assert!(!reading.is_stored());
        assert!(matches!(
            reading,
            Reading::Defaulted {
                cause: StoreError::OpenFailed { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_custom_default() {
        let dir = TempDir::new().unwrap();
        let store = RegisterStore::new(dir.path().join("absent"), -1);
        assert_eq!(store.read().value(), -1);
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        for value in [0, 1, -1, 42, i64::MAX, i64::MIN] {
            store.write(value).unwrap();
            let reading = store.read();
            assert!(reading.is_stored());
            assert_eq!(reading.value(), value);
        }
    }

    #[test]
    fn test_write_truncates() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.write(12345).unwrap();
        store.write(7).unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), "7");
        assert_eq!(store.read().value(), 7);
    }

    #[test]
    fn test_write_has_no_newline() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.write(-250).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "-250");
    }

    #[test]
    fn test_malformed_contents_read_as_zero() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        fs::write(store.path(), "not a number").unwrap();
        let reading = store.read();
        assert!(reading.is_stored());
        assert_eq!(reading.value(), 0);

        fs::write(store.path(), "").unwrap();
        assert_eq!(store.read().value(), 0);

        fs::write(store.path(), [0xff, 0xfe, b'1']).unwrap();
        assert_eq!(store.read().value(), 0);
    }

    #[test]
    fn test_only_first_line_is_read() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        fs::write(store.path(), "31\n99\n").unwrap();
        assert_eq!(store.read().value(), 31);
    }

    #[test]
    fn test_overlong_line_is_cut() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let long = "1".repeat(MAX_LINE_BYTES as usize + 10);
        fs::write(store.path(), long).unwrap();
        assert_eq!(store.read().value(), 0);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = RegisterStore::new(dir.path().join("missing").join("reg.txt"), 666);

        let err = store.write(5).unwrap_err();
        assert!(matches!(err, StoreError::OpenFailed { .. }));
        assert!(err.to_string().starts_with("Error opening the file: "));
    }

    #[test]
    fn test_from_config() {
        let config = RegisterConfig {
            path: PathBuf::from("/nonexistent/reg/somewhere"),
            default_value: 9,
        };
        let store = RegisterStore::from_config(&config);
        assert_eq!(store.path(), Path::new("/nonexistent/reg/somewhere"));
        assert_eq!(store.read().value(), 9);
    }
}
