//! Error types for h5browse.
//!
//! Library operations return [`BrowseError`]; bad user input at a prompt is a
//! [`ValidationError`] and never leaves the prompt that produced it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for h5browse operations.
pub type Result<T> = std::result::Result<T, BrowseError>;

/// Errors that can occur while opening or navigating a data file.
#[derive(Debug, Error)]
pub enum BrowseError {
    /// Failed to open a file.
    #[error("Failed to open file {}: {}", .path.display(), .reason)]
    FileOpen {
        /// File that could not be opened.
        path: PathBuf,
        /// Underlying cause.
        reason: String,
    },

    /// A path does not resolve to any node in the open file.
    #[error("Path '{path}' not found in file")]
    NotFound {
        /// The path that failed to resolve.
        path: String,
    },

    /// A group operation was requested on a dataset.
    #[error("'{path}' is not a group")]
    NotAGroup {
        /// Offending path.
        path: String,
    },

    /// A dataset operation was requested on a group.
    #[error("'{path}' is not a dataset")]
    NotADataset {
        /// Offending path.
        path: String,
    },

    /// Reading dataset rows failed.
    #[error("Failed to read '{path}': {reason}")]
    Read {
        /// Dataset path.
        path: String,
        /// Underlying cause, as reported by the storage library.
        reason: String,
    },

    /// The element type has no row representation.
    #[error("Unsupported element type '{dtype}' in '{path}'")]
    Unsupported {
        /// Dataset path.
        path: String,
        /// Type descriptor as displayed.
        dtype: String,
    },

    /// Failed to read NetCDF/HDF5 file.
    #[error("NetCDF error: {0}")]
    NetCDF(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BrowseError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, reason: impl ToString) -> Self {
        Self::FileOpen {
            path,
            reason: reason.to_string(),
        }
    }

    /// Create a NotFound error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a Read error.
    pub fn read(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::Read {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error means the current path vanished.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<netcdf::Error> for BrowseError {
    fn from(err: netcdf::Error) -> Self {
        Self::NetCDF(err.to_string())
    }
}

/// Rejected user input. Reported and re-prompted, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A numeric choice outside `1..=count`.
    #[error("Invalid number {choice}: choose between 1 and {count}.")]
    OutOfRange {
        /// What the user typed, parsed.
        choice: i64,
        /// Number of available entries.
        count: usize,
    },

    /// A choice was requested but there is nothing to choose from.
    #[error("There is nothing to choose here.")]
    NothingToChoose,

    /// `n` followed by something other than a positive integer.
    #[error("Invalid format: use 'n <count>' with a positive count (e.g. 'n 20').")]
    InvalidStep(String),

    /// Anything else.
    #[error("Invalid input '{0}'. {1}")]
    Unrecognized(String, &'static str),
}
