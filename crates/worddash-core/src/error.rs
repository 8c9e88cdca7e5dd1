//! Error types for worddash-core.
//!
//! The analyzer itself is total and never fails. Errors only arise at the
//! edges: loading configuration and writing exported text.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while exporting raw text to a file.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The target file already exists and overwriting was not requested.
    #[error("{path} already exists (pass --force to overwrite)")]
    AlreadyExists {
        /// The file that would have been overwritten.
        path: Utf8PathBuf,
    },

    /// Writing the file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The file being written.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`ExportError`].
pub type ExportResult<T> = Result<T, ExportError>;
