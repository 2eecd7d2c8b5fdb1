//! Error types for import operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while importing a dataset.
///
/// Every failure is fatal to the whole import: no partial result is returned
/// and the file handle is released before the error propagates. The caller
/// decides whether to abort, retry or report.
#[derive(Error, Debug)]
pub enum ImportError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Source file cannot be opened for reading
    #[error("unable to open file {path:?}: {source}")]
    FileOpen {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Target object does not satisfy the capability a loader requires
    #[error("loader '{loader}' requires a {expected} target")]
    TypeMismatch {
        /// The loader that rejected the target
        loader: &'static str,
        /// Description of the required capability
        expected: &'static str,
    },

    /// Fewer voxel elements were available than a scanline required
    #[error("end of volume file reached before read completed at row {row}")]
    ShortRead {
        /// Index of the scanline at which the data ran out
        row: usize,
    },

    /// No registered loader matches the source path's extension
    #[error("no loader registered for {path:?}")]
    UnknownFormat {
        /// The path whose extension failed to resolve
        path: PathBuf,
    },

    /// An extension token was registered twice
    #[error("format extension '{extension}' is already registered")]
    DuplicateFormat {
        /// The extension token (case-normalized)
        extension: String,
    },

    /// Invalid format structure or content
    #[error("invalid format: {message}")]
    InvalidFormat {
        /// Description of the format error
        message: String,
    },

    /// A parameter value is unusable for the import
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Description of the problem
        message: String,
    },

    /// Source data shape does not match the target volume's dimensions
    #[error("source shape {found:?} does not match target dimensions {expected:?}")]
    ShapeMismatch {
        /// Expected source shape, slowest-varying dimension first
        expected: [usize; 3],
        /// Shape found in the source data
        found: Vec<usize>,
    },
}

impl ImportError {
    /// Create an invalid format error with a message.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}
