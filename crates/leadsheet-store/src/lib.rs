//! # leadsheet-store
//!
//! Spreadsheet-backed storage for contact submissions.
//!
//! - [`SheetStore`]: one XLSX file, one sheet of rows, rewritten on every append
//! - [`SerializedStore`]: wrapper that serializes appends within the process
//! - [`Workbook`]: value-level snapshot of an XLSX file used for the rewrite
//!
//! Use [`open_store`] to build the store a [`StoreConfig`] describes.

#![warn(clippy::all)]

pub mod error;
pub mod serialized;
pub mod sheet;
pub mod workbook;

use std::sync::Arc;

use leadsheet_core::config::StoreConfig;
use leadsheet_core::{SubmissionStore, WriteMode};

pub use error::{Error, Result};
pub use serialized::SerializedStore;
pub use sheet::SheetStore;
pub use workbook::{Cell, Sheet, Workbook};

/// Builds the store described by `config`.
pub fn open_store(config: &StoreConfig) -> Arc<dyn SubmissionStore> {
    let store = SheetStore::new(&config.path, &config.sheet_name);
    match config.write_mode {
        WriteMode::Direct => Arc::new(store),
        WriteMode::Serialized => Arc::new(SerializedStore::new(store)),
    }
}
