//! Column derivation from a raw preview.

use colmap_model::{Column, Preview};

use crate::addressing::column_code;

/// Slice a preview into columns.
///
/// The column count is the width of the widest row; short rows are padded
/// with empty cells. With `has_headers` the first row becomes the column
/// headers. At most `max_rows` data cells are kept per column.
pub fn derive_columns(preview: &Preview, max_rows: usize) -> Vec<Column> {
    let width = preview.column_count();
    let (header_row, data_rows) = match preview.rows.split_first() {
        Some((first, rest)) if preview.has_headers => (Some(first), rest),
        _ => (None, preview.rows.as_slice()),
    };

    (0..width)
        .map(|index| Column {
            index,
            code: column_code(index),
            header: header_row.map(|row| cell(row, index)),
            values: data_rows
                .iter()
                .take(max_rows)
                .map(|row| cell(row, index))
                .collect(),
        })
        .collect()
}

fn cell(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}
