//! Typed error types for urxvt-launch-fonts.
//!
//! A failed catalog build is the only hard failure in this crate; individual
//! unresolved fonts are soft conditions reported through `log` and surfaced
//! as absent values instead.

use thiserror::Error;

/// Top-level error type for font catalog resolution.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font listing command could not be spawned or its output captured.
    #[error("font catalog unavailable: '{command}' could not be run: {source}")]
    CatalogUnavailable {
        /// The font listing command that failed.
        command: &'static str,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The font listing command ran but exited with a failure status.
    #[error("font catalog unavailable: '{command}' exited with {status}")]
    CatalogFailed {
        /// The font listing command that failed.
        command: &'static str,
        /// The reported exit status.
        status: std::process::ExitStatus,
    },
}
