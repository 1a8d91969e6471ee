//! # Error Handling
//!
//! This module defines the centralized error type for the `ci-plugin-env`
//! library. It uses the `thiserror` library to create an `Error` enum that
//! covers every failure the library can report back to a CI plugin.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors. Each
//!   variant carries enough context (variable name, path, key) for the
//!   plugin to print a useful message before the step fails.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Failures fall into a few groups:
//!
//! - Configuration errors: a designated environment variable is unset.
//! - I/O errors while creating, reading or rewriting an output file.
//! - Parse errors for output files that cannot be decoded.
//! - Validation errors for values a file format cannot represent.
//! - Semver and serialization errors from the context and artifact helpers.
//!
//! Nothing in the library retries. CI steps are expected to fail fast and
//! leave retry policy to the orchestrator.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for ci-plugin-env operations
#[derive(Error, Debug)]
pub enum Error {
    /// A designated environment variable is unset or empty.
    #[error("environment variable {var} is not set")]
    Config { var: String },

    /// An I/O error tied to a specific file.
    #[error("failed to {operation} {}: {source}", path.display())]
    IoPath {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be decoded.
    #[error("failed to parse {} at line {line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// A value cannot be stored in the target file format.
    #[error("{message}")]
    Validation { key: String, message: String },

    /// A semantic version parsing error, wrapped from `semver::Error`.
    #[error("Semver parsing error: {0}")]
    SemVer(#[from] semver::Error),

    /// An error occurred during serialization.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    pub(crate) fn io_path(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Error::IoPath {
            operation,
            path: path.into(),
            source,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
