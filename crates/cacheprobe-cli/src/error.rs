//! CLI error types.
//!
//! The binary validates every knob through `cacheprobe-core` constructors
//! before any measurement starts; this module wraps those failures with
//! actionable messages for the terminal.

use std::fmt;

/// CLI error type.
#[derive(Debug)]
pub enum CliError {
    /// An experiment parameter failed validation.
    Config {
        /// The underlying cacheprobe error.
        source: cacheprobe_core::Error,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config { source } => {
                write!(f, "invalid configuration: {source}. ")?;
                write!(
                    f,
                    "Sizes must be powers of two; see --help for the supported ranges."
                )
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config { source } => Some(source),
        }
    }
}

impl From<cacheprobe_core::Error> for CliError {
    fn from(err: cacheprobe_core::Error) -> Self {
        CliError::Config { source: err }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
