//! In-memory snapshot of an XLSX workbook.
//!
//! Only cell values survive a read/write cycle. Styles, formulas, and
//! column widths are not carried over.

use std::io::Write;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use leadsheet_core::{Submission, HEADERS};

use crate::{Error, Result};

/// A single cell value.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// No value
    Empty,
    /// Text
    Text(String),
    /// Any numeric value, including dates stored as serial numbers
    Number(f64),
    /// Boolean
    Bool(bool),
}

impl Cell {
    /// The value as it would be shown in a text field.
    pub fn text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => Cell::Number(dt.as_f64()),
            Data::Error(e) => Cell::Text(e.to_string()),
        }
    }
}

/// One named sheet: a block of rows anchored at `origin`.
#[derive(Clone, Debug, PartialEq)]
pub struct Sheet {
    /// Sheet name
    pub name: String,
    /// Zero-based (row, column) of the first cell
    pub origin: (u32, u32),
    /// Row-major cell values
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// A sheet holding only the header row.
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_records(name, &[])
    }

    /// A header row followed by one row per submission.
    pub fn from_records(name: impl Into<String>, records: &[Submission]) -> Self {
        let mut sheet = Self {
            name: name.into(),
            origin: (0, 0),
            rows: Vec::new(),
        };
        for record in records {
            sheet.append_record(record);
        }
        if sheet.rows.is_empty() {
            sheet.rows.push(header_row());
        }
        sheet
    }

    /// Adds one submission below the existing rows.
    ///
    /// Existing rows and columns are left exactly as they are. Each field
    /// goes to the column whose header matches it, ignoring case and
    /// surrounding whitespace; a field with no such column gets a new
    /// header past the widest row.
    pub fn append_record(&mut self, submission: &Submission) {
        if self.rows.is_empty() {
            self.rows.push(header_row());
        }
        let width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut columns = [0usize; HEADERS.len()];
        for (slot, name) in columns.iter_mut().zip(HEADERS) {
            *slot = match column_index(&self.rows[0], name) {
                Some(idx) => idx,
                None => {
                    let header = &mut self.rows[0];
                    let idx = header.len().max(width);
                    header.resize(idx, Cell::Empty);
                    header.push(Cell::Text(name.to_string()));
                    idx
                }
            };
        }

        let row_len = columns.iter().max().map_or(0, |m| m + 1);
        let mut row = vec![Cell::Empty; row_len];
        for (idx, value) in columns.into_iter().zip(submission.cells()) {
            row[idx] = Cell::Text(value.to_string());
        }
        self.rows.push(row);
    }

    /// Reads data rows, matching cells to fields by header text.
    ///
    /// Headers match ignoring case and surrounding whitespace. Blank rows
    /// are skipped; fields without a column read as empty strings.
    pub fn records(&self) -> Vec<Submission> {
        let Some((header, body)) = self.rows.split_first() else {
            return Vec::new();
        };

        body.iter()
            .filter(|row| row.iter().any(|c| !c.is_empty()))
            .map(|row| {
                Submission::from_columns(|name| {
                    column_index(header, name)
                        .and_then(|idx| row.get(idx))
                        .map(Cell::text)
                        .unwrap_or_default()
                })
            })
            .collect()
    }
}

fn header_row() -> Vec<Cell> {
    HEADERS.iter().map(|h| Cell::Text(h.to_string())).collect()
}

fn column_index(header: &[Cell], name: &str) -> Option<usize> {
    header
        .iter()
        .position(|c| c.text().trim().eq_ignore_ascii_case(name))
}

/// All sheets of a workbook, in tab order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// An empty workbook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every sheet of an existing XLSX file.
    pub fn open(path: &Path) -> Result<Self> {
        let mut reader: Xlsx<_> = open_workbook(path)?;
        let mut sheets = Vec::new();
        for name in reader.sheet_names() {
            let range = reader.worksheet_range(&name)?;
            let origin = range.start().unwrap_or((0, 0));
            let rows = range
                .rows()
                .map(|row| row.iter().map(Cell::from).collect())
                .collect();
            sheets.push(Sheet { name, origin, rows });
        }
        Ok(Self { sheets })
    }

    /// Looks up a sheet by name.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Looks up a sheet by name for editing.
    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|s| s.name == name)
    }

    /// Sheet names in tab order.
    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|s| s.name.as_str())
    }

    /// Replaces the sheet with the same name in place, or appends it.
    pub fn set_sheet(&mut self, sheet: Sheet) {
        match self.sheets.iter_mut().find(|s| s.name == sheet.name) {
            Some(slot) => *slot = sheet,
            None => self.sheets.push(sheet),
        }
    }

    /// Encodes the workbook as XLSX bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        for sheet in &self.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(sheet.name.as_str())?;
            let (row0, col0) = sheet.origin;
            for (r, row) in sheet.rows.iter().enumerate() {
                let row_num = row0 + r as u32;
                for (c, cell) in row.iter().enumerate() {
                    let col = col0 + c as u32;
                    let col_num = u16::try_from(col).map_err(|_| Error::ColumnOutOfRange(col))?;
                    match cell {
                        Cell::Empty => {}
                        Cell::Text(s) => {
                            worksheet.write_string(row_num, col_num, s.as_str())?;
                        }
                        Cell::Number(n) => {
                            worksheet.write_number(row_num, col_num, *n)?;
                        }
                        Cell::Bool(b) => {
                            worksheet.write_boolean(row_num, col_num, *b)?;
                        }
                    }
                }
            }
        }
        Ok(workbook.save_to_buffer()?)
    }

    /// Writes the workbook to `path` by replacing the file in one rename.
    ///
    /// Readers observe either the previous contents or the new ones, never
    /// a partial file.
    pub fn save_atomic(&self, path: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        // The temp file starts out owner-only; keep the existing file's mode.
        if let Ok(meta) = std::fs::metadata(path) {
            tmp.as_file().set_permissions(meta.permissions())?;
        }
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn submission(name: &str) -> Submission {
        Submission {
            name: name.to_string(),
            email: format!("{name}@example.com"),
            company: String::new(),
            message: "hello".to_string(),
            submitted_at: "2026-01-02T03:04:05.000Z".to_string(),
        }
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(Cell::Empty.text(), "");
        assert_eq!(Cell::Text("x".into()).text(), "x");
        assert_eq!(Cell::Number(42.0).text(), "42");
        assert_eq!(Cell::Number(1.5).text(), "1.5");
        assert_eq!(Cell::Bool(true).text(), "true");
    }

    #[test]
    fn test_from_records_writes_header_first() {
        let sheet = Sheet::from_records("Contact Form Data", &[submission("ada")]);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0][0], Cell::Text("Name".into()));
        assert_eq!(sheet.rows[0][4], Cell::Text("Date".into()));
        assert_eq!(sheet.records(), vec![submission("ada")]);
    }

    #[test]
    fn test_records_map_by_header_and_skip_blank_rows() {
        let sheet = Sheet {
            name: "s".into(),
            origin: (0, 0),
            rows: vec![
                vec![
                    Cell::Text("Email".into()),
                    Cell::Text("Name".into()),
                    Cell::Text("Message".into()),
                ],
                vec![Cell::Empty, Cell::Empty, Cell::Empty],
                vec![
                    Cell::Text("b@x.com".into()),
                    Cell::Text("Bob".into()),
                    Cell::Number(7.0),
                ],
            ],
        };
        let records = sheet.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Bob");
        assert_eq!(records[0].email, "b@x.com");
        assert_eq!(records[0].message, "7");
        assert_eq!(records[0].company, "");
        assert_eq!(records[0].submitted_at, "");
    }

    #[test]
    fn test_records_of_empty_sheet() {
        let sheet = Sheet {
            name: "s".into(),
            origin: (0, 0),
            rows: vec![],
        };
        assert!(sheet.records().is_empty());
    }

    #[test]
    fn test_set_sheet_replaces_in_place() {
        let mut wb = Workbook::new();
        wb.set_sheet(Sheet::from_records("A", &[]));
        wb.set_sheet(Sheet::from_records("B", &[]));
        wb.set_sheet(Sheet::from_records("A", &[submission("x")]));
        assert_eq!(wb.sheet_names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(wb.sheet("A").unwrap().records().len(), 1);
    }

    #[test]
    fn test_save_and_reopen_keeps_values() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("book.xlsx");

        let mut wb = Workbook::new();
        wb.set_sheet(Sheet::from_records("Contact Form Data", &[submission("ada")]));
        wb.set_sheet(Sheet {
            name: "Notes".into(),
            origin: (2, 1),
            rows: vec![vec![Cell::Text("total".into()), Cell::Number(3.0), Cell::Bool(false)]],
        });
        wb.save_atomic(&path).unwrap();

        let reopened = Workbook::open(&path).unwrap();
        assert_eq!(
            reopened.sheet("Contact Form Data").unwrap().records(),
            vec![submission("ada")]
        );
        let notes = reopened.sheet("Notes").unwrap();
        assert_eq!(notes.origin, (2, 1));
        assert_eq!(notes.rows[0][1], Cell::Number(3.0));
        assert_eq!(notes.rows[0][2], Cell::Bool(false));
    }

    #[test]
    fn test_open_rejects_non_workbook() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"not a zip archive").unwrap();
        assert!(Workbook::open(&path).is_err());
    }
}
