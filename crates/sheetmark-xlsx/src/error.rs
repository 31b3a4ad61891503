//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while reading an XLSX package
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Invalid file format
    #[error("Invalid XLSX format: {0}")]
    InvalidFormat(String),

    /// Missing required part
    #[error("Missing required part: {0}")]
    MissingPart(String),

    /// A part exists but could not be parsed
    #[error("Invalid part {part}: {source}")]
    InvalidPart {
        part: String,
        #[source]
        source: Box<XlsxError>,
    },

    /// Requested sheet does not exist in the workbook
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

impl XlsxError {
    /// Attach the name of the part that failed to parse
    pub fn in_part<S: Into<String>>(self, part: S) -> Self {
        XlsxError::InvalidPart {
            part: part.into(),
            source: Box::new(self),
        }
    }
}
