//! Typed error types for urxvt-launch-config.
//!
//! Structured errors so callers at the crate boundary can match on specific
//! failure categories instead of relying on opaque strings.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read from disk.
    #[error("config file read failed for '{path}': {source}")]
    Read {
        /// Path to the config file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be written.
    #[error("config file write failed for '{path}': {source}")]
    Write {
        /// Path to the config file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for the expected schema.
    #[error("config parse error in '{path}': {source}")]
    Parse {
        /// Path to the offending config file.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// A font size was zero. Sizes are pixel counts and must be positive.
    #[error("font size must be a positive number of pixels (got {size} for '{field}')")]
    InvalidSize {
        /// Name of the offending config field.
        field: &'static str,
        /// The rejected value.
        size: u32,
    },
}
