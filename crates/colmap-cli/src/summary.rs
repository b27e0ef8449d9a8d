//! Terminal tables for previews, field status and schemas.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use colmap_map::{FieldStatus, MappingSession, MappingSummary, SourceSlot, slot_code};
use colmap_model::{Column, Field};

pub const STATUS_ASSIGNED: &str = "assigned";
pub const STATUS_MISSING: &str = "missing";
pub const STATUS_UNASSIGNED: &str = "-";

/// Rows of the current source page: code, header, sample values, assigned field.
/// Placeholder slots give a row with an empty code and no content.
pub fn page_rows(session: &MappingSession) -> Vec<[String; 4]> {
    session
        .page()
        .into_iter()
        .map(|slot| match slot {
            SourceSlot::Column {
                column,
                assigned_to,
                ..
            } => [
                slot_code(Some(column.index)),
                column.header.clone().unwrap_or_default(),
                column.values.join("\n"),
                assigned_to.map(ToString::to_string).unwrap_or_default(),
            ],
            SourceSlot::Placeholder => [
                slot_code(None),
                String::new(),
                String::new(),
                String::new(),
            ],
        })
        .collect()
}

/// Rows of the field list: name, label, requirement, column, status.
pub fn field_rows(session: &MappingSession) -> Vec<[String; 5]> {
    session
        .field_statuses()
        .into_iter()
        .map(|status| {
            let FieldStatus {
                field, assigned, ..
            } = status;
            [
                field.name.to_string(),
                field.display_label().to_string(),
                requirement(field).to_string(),
                assigned.map(column_label).unwrap_or_default(),
                field_state(&status).to_string(),
            ]
        })
        .collect()
}

/// Rows of a schema listing: name, label, requirement.
pub fn definition_rows(fields: &[Field]) -> Vec<[String; 3]> {
    fields
        .iter()
        .map(|field| {
            [
                field.name.to_string(),
                field.display_label().to_string(),
                requirement(field).to_string(),
            ]
        })
        .collect()
}

pub fn print_preview(session: &MappingSession) {
    println!(
        "File: {} (page {} of {}, {} columns)",
        session.file_name(),
        session.current_page() + 1,
        session.page_count(),
        session.columns().len()
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Header"),
        header_cell("Values"),
        header_cell("Field"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for [code, header, values, field] in page_rows(session) {
        if code.is_empty() {
            // placeholder
            table.add_row(vec![dim_cell("-"), dim_cell(""), dim_cell(""), dim_cell("")]);
            continue;
        }
        table.add_row(vec![
            Cell::new(code).fg(Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new(header),
            Cell::new(values),
            if field.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(field).fg(Color::Green)
            },
        ]);
    }
    println!("{table}");
}

pub fn print_fields(session: &MappingSession) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Required"),
        header_cell("Column"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Center);
    for [name, label, required, column, state] in field_rows(session) {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(label),
            Cell::new(required),
            if column.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(column)
            },
            state_cell(&state),
        ]);
    }
    println!("{table}");
    print_counts(&session.summary());
}

pub fn print_definitions(fields: &[Field]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Required"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for [name, label, required] in definition_rows(fields) {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(label),
            Cell::new(required),
        ]);
    }
    println!("{table}");
}

fn print_counts(summary: &MappingSummary) {
    println!(
        "Assigned {} of {} fields ({} of {} required)",
        summary.assigned, summary.total_fields, summary.required_assigned, summary.required_total
    );
}

fn requirement(field: &Field) -> &'static str {
    if field.is_optional { "no" } else { "yes" }
}

fn column_label(column: &Column) -> String {
    match column.header.as_deref() {
        Some(header) if !header.is_empty() => format!("{} ({header})", column.code),
        _ => column.code.clone(),
    }
}

fn field_state(status: &FieldStatus<'_>) -> &'static str {
    if status.has_error {
        STATUS_MISSING
    } else if status.assigned.is_some() {
        STATUS_ASSIGNED
    } else {
        STATUS_UNASSIGNED
    }
}

fn state_cell(state: &str) -> Cell {
    match state {
        STATUS_MISSING => Cell::new(state).fg(Color::Red).add_attribute(Attribute::Bold),
        STATUS_ASSIGNED => Cell::new(state).fg(Color::Green),
        _ => dim_cell(state),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
