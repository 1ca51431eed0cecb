//! Errors reported while generating or writing paths.

use std::io;
use thiserror::Error;

/// Errors that can occur when generating or writing paths.
#[derive(Error, Debug)]
pub enum Error {
    /// A parameter is outside the domain of the computation.
    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A command line value could not be parsed.
    #[error("{reason} in {name}: {value}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },

    /// Invalid command line usage (this also covers `--help` and `--version`).
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// Failed to write the output.
    #[error("{source} writing output: {path}")]
    Output {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Result of operations that may fail with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
