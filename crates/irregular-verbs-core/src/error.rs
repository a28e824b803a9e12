//! Error types for irregular-verbs-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while rendering a verb table to a document.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The destination could not be created or opened for writing.
    #[error("cannot open {path} for writing")]
    Create {
        /// The destination path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document could not be written into the destination.
    #[error("failed to write document to {path}: {message}")]
    Write {
        /// The destination path (or `<writer>` for in-memory sinks).
        path: Utf8PathBuf,
        /// Description of the container-level failure.
        message: String,
    },
}

/// Result type alias using [`RenderError`].
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while reading back a generated document.
#[derive(Error, Debug)]
pub enum InspectError {
    /// The file could not be read.
    #[error("failed to read {path}")]
    Read {
        /// The document path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a readable document.
    #[error("{path} is not a valid document: {message}")]
    Parse {
        /// The document path.
        path: Utf8PathBuf,
        /// Parser error description.
        message: String,
    },

    /// The document contains no table.
    #[error("{path} contains no table")]
    MissingTable {
        /// The document path.
        path: Utf8PathBuf,
    },

    /// A table row does not have exactly three cells.
    #[error("row {row} of {path} has {cells} cells, expected 3")]
    BadRow {
        /// The document path.
        path: Utf8PathBuf,
        /// Zero-based row index, header included.
        row: usize,
        /// Number of cells found.
        cells: usize,
    },
}

/// Result type alias using [`InspectError`].
pub type InspectResult<T> = Result<T, InspectError>;
