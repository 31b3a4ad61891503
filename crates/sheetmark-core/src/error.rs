//! Error types for sheetmark-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetmark-core
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Invalid A1-style cell reference
    #[error("Invalid cell reference: {0}")]
    InvalidCoordinate(String),

    /// Invalid A1:B2-style range reference
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Lookup past the end of an indexed table
    #[error("Index {index} out of range (len: {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
