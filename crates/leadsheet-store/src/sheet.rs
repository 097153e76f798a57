//! The XLSX-backed submission store.

use std::path::{Path, PathBuf};

use leadsheet_core::{Submission, SubmissionStore};
use tracing::{debug, info};

use crate::workbook::{Sheet, Workbook};
use crate::{Error, Result};

/// Submissions kept as rows of one sheet in an XLSX file.
///
/// Every append reads the whole file, adds one row, and rewrites the whole
/// file. Nothing coordinates concurrent appends: two overlapping calls can
/// each read the same rows, and whichever rename lands last wins. Wrap in
/// [`SerializedStore`](crate::SerializedStore) to rule that out within one
/// process.
#[derive(Clone, Debug)]
pub struct SheetStore {
    path: PathBuf,
    sheet_name: String,
}

impl SheetStore {
    /// A store at `path` keeping rows in the sheet `sheet_name`.
    pub fn new(path: impl Into<PathBuf>, sheet_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sheet_name: sheet_name.into(),
        }
    }

    /// The store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The sheet holding contact rows.
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// Opens the existing workbook, or starts a new one with just a header row.
    fn load_or_create(&self) -> Result<Workbook> {
        if !self.path.exists() {
            info!(path = %self.path.display(), sheet = %self.sheet_name, "Creating new store");
            let mut workbook = Workbook::new();
            workbook.set_sheet(Sheet::new(&self.sheet_name));
            return Ok(workbook);
        }

        let workbook = Workbook::open(&self.path)?;
        if workbook.sheet(&self.sheet_name).is_none() {
            return Err(self.missing_sheet());
        }
        Ok(workbook)
    }

    fn missing_sheet(&self) -> Error {
        Error::MissingSheet {
            sheet: self.sheet_name.clone(),
            path: self.path.clone(),
        }
    }

    /// Appends one record and rewrites the file. Returns the new row count.
    ///
    /// Rows and columns already in the sheet are written back unchanged.
    pub fn append_record(&self, submission: &Submission) -> Result<usize> {
        let mut workbook = self.load_or_create()?;
        let sheet = workbook
            .sheet_mut(&self.sheet_name)
            .ok_or_else(|| self.missing_sheet())?;
        sheet.append_record(submission);
        let rows = sheet.records().len();
        workbook.save_atomic(&self.path)?;
        debug!(path = %self.path.display(), rows, "Appended submission");
        Ok(rows)
    }

    /// Reads all records. A missing file has none and is not created.
    pub fn read_records(&self) -> Result<Vec<Submission>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let workbook = self.load_or_create()?;
        workbook
            .sheet(&self.sheet_name)
            .map(Sheet::records)
            .ok_or_else(|| self.missing_sheet())
    }
}

impl SubmissionStore for SheetStore {
    fn append(&self, submission: &Submission) -> leadsheet_core::Result<usize> {
        Ok(self.append_record(submission)?)
    }

    fn records(&self) -> leadsheet_core::Result<Vec<Submission>> {
        Ok(self.read_records()?)
    }
}
