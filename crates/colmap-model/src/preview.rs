//! Tabular preview types.
//!
//! A [`Preview`] is the raw sample produced by an external reader. Columns are
//! derived from it once and stay immutable for the rest of the session.

use serde::{Deserialize, Serialize};

/// Maximum number of sample rows kept per column (header row not included).
pub const PREVIEW_ROW_COUNT: usize = 5;

/// Raw sample of the first rows of a file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preview {
    /// Name of the file the sample was read from.
    pub file_name: String,
    /// Whether the first row holds column headers.
    pub has_headers: bool,
    /// Sample rows, header row first when `has_headers` is set.
    pub rows: Vec<Vec<String>>,
}

impl Preview {
    pub fn new(file_name: impl Into<String>, has_headers: bool, rows: Vec<Vec<String>>) -> Self {
        Self {
            file_name: file_name.into(),
            has_headers,
            rows,
        }
    }

    /// Number of columns, taken from the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// One vertical slice of the preview.
///
/// Identity is the `index`; two columns with identical cells are still
/// different columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Stable zero-based position in the source file.
    pub index: usize,
    /// Spreadsheet-style positional label ("A", "B", ..., "AA").
    pub code: String,
    /// Header cell, when the preview has a header row.
    pub header: Option<String>,
    /// Sample cells, top to bottom.
    pub values: Vec<String>,
}

impl Column {
    /// Header if present, otherwise the positional code.
    pub fn display_name(&self) -> &str {
        match self.header.as_deref() {
            Some(header) if !header.trim().is_empty() => header,
            _ => &self.code,
        }
    }
}

/// Pointer position in presentation coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
