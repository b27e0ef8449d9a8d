//! Reading a bounded preview from a CSV file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use colmap_model::{PREVIEW_ROW_COUNT, Preview};

use crate::error::{IngestError, Result};

/// Number of rows after the first inspected when guessing at a header row.
const HEADER_PROBE_ROWS: usize = 4;

/// How the first row of the file is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// Decide from the cell contents.
    #[default]
    Auto,
    /// The first row always holds headers.
    Present,
    /// Every row is data.
    Absent,
}

/// Options for [`read_preview`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    pub header: HeaderMode,
    /// Data rows kept, not counting the header row.
    pub max_rows: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            header: HeaderMode::Auto,
            max_rows: PREVIEW_ROW_COUNT,
        }
    }
}

impl PreviewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_header(mut self, header: HeaderMode) -> Self {
        self.header = header;
        self
    }

    #[must_use]
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }
}

/// Read the first rows of a CSV file.
///
/// Only `max_rows` data rows (plus a header row, if any) are read; the rest
/// of the file is never touched. Blank rows are skipped and cells are trimmed.
pub fn read_preview(path: &Path, options: &PreviewOptions) -> Result<Preview> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    read_preview_from_reader(path, file_name, file, options)
}

/// Like [`read_preview`] for an already open source. `path` is only used in
/// error messages.
pub fn read_preview_from_reader<R: Read>(
    path: &Path,
    file_name: impl Into<String>,
    source: R,
    options: &PreviewOptions,
) -> Result<Preview> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    // One extra row so a header row doesn't eat into the sample.
    let limit = options.max_rows + 1;
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(limit);
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        rows.push(row);
        if rows.len() == limit {
            break;
        }
    }

    let has_headers = match options.header {
        HeaderMode::Present => !rows.is_empty(),
        HeaderMode::Absent => false,
        HeaderMode::Auto => detect_header_row(&rows),
    };
    if has_headers {
        if let Some(first) = rows.first_mut() {
            *first = first.iter().map(|cell| normalize_header(cell)).collect();
        }
    } else {
        rows.truncate(options.max_rows);
    }

    debug!(
        path = %path.display(),
        rows = rows.len(),
        has_headers,
        "read preview"
    );
    Ok(Preview::new(file_name, has_headers, rows))
}

fn normalize_header(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

#[derive(Debug, Default, Clone, Copy)]
struct RowStats {
    total: usize,
    non_empty: usize,
    numeric: usize,
    alpha: usize,
    identifier: usize,
}

impl RowStats {
    fn ratio(self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64
        }
    }

    fn empty_ratio(self) -> f64 {
        1.0 - self.ratio(self.non_empty)
    }
}

fn row_stats(row: &[String]) -> RowStats {
    let mut stats = RowStats {
        total: row.len(),
        ..RowStats::default()
    };
    for cell in row {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            continue;
        }
        stats.non_empty += 1;
        if trimmed.parse::<f64>().is_ok() {
            stats.numeric += 1;
        }
        if trimmed.chars().any(|ch| ch.is_alphabetic()) {
            stats.alpha += 1;
        }
        if is_identifier_like(trimmed) {
            stats.identifier += 1;
        }
    }
    stats
}

fn is_identifier_like(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

fn is_data_like(stats: RowStats) -> bool {
    stats.ratio(stats.numeric) >= 0.2 || stats.empty_ratio() >= 0.2
}

fn is_identifier_row(stats: RowStats) -> bool {
    stats.ratio(stats.identifier) >= 0.6 && stats.ratio(stats.numeric) <= 0.1
}

fn is_header_like(stats: RowStats) -> bool {
    stats.ratio(stats.non_empty) >= 0.8
        && stats.ratio(stats.alpha) >= 0.5
        && stats.ratio(stats.numeric) <= 0.1
}

/// Guess whether the first row holds column headers.
///
/// The first row must be mostly non-empty text. It is then taken as a header
/// when a following row looks like data (numbers or gaps) or not like a
/// header at all. When every row is text, identifier-style names
/// (`first_name`, `Email`) in the first row only decide it if later rows
/// don't look the same. A lone row is a header only if it is identifier-style.
pub fn detect_header_row(rows: &[Vec<String>]) -> bool {
    let Some((first, rest)) = rows.split_first() else {
        return false;
    };
    let head = row_stats(first);
    if !is_header_like(head) {
        return false;
    }
    let probe: Vec<RowStats> = rest
        .iter()
        .take(HEADER_PROBE_ROWS)
        .map(|row| row_stats(row))
        .collect();
    if probe.is_empty() {
        return is_identifier_row(head);
    }
    if probe
        .iter()
        .any(|stats| is_data_like(*stats) || !is_header_like(*stats))
    {
        return true;
    }
    is_identifier_row(head) && probe.iter().all(|stats| !is_identifier_row(*stats))
}
