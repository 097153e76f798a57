//! Error types for leadsheet-store

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for leadsheet-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur reading or rewriting the store file
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The existing file could not be parsed as a workbook
    #[error("failed to read workbook: {0}")]
    Read(#[from] calamine::XlsxError),

    /// The workbook could not be encoded
    #[error("failed to encode workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    /// File system failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The workbook exists but has no contact sheet
    #[error("sheet '{sheet}' not found in {}", path.display())]
    MissingSheet {
        /// Expected sheet name
        sheet: String,
        /// Store file
        path: PathBuf,
    },

    /// A cell lies beyond the addressable column range
    #[error("cell column {0} is out of range")]
    ColumnOutOfRange(u32),

    /// The in-process write lock was poisoned by a panicking writer
    #[error("store lock poisoned")]
    LockPoisoned,
}

impl From<Error> for leadsheet_core::Error {
    fn from(err: Error) -> Self {
        let message = err.to_string();
        leadsheet_core::Error::storage_with_source(message, err)
    }
}
