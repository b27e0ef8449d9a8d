use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace};

use colmap_cli::logging::redact_value;
use colmap_cli::summary::print_definitions;
use colmap_ingest::{HeaderMode, PreviewOptions, load_field_schema, read_preview};
use colmap_map::{Callbacks, GestureEvent, MappingSession, ValidationError};
use colmap_model::{FieldAssignments, MappingOptions, Preview};

use crate::cli::{FieldsArgs, HeaderArgs, MapArgs, PreviewArgs};

/// Result of `colmap map`.
pub struct MapResult {
    pub session: MappingSession,
    pub outcome: Result<FieldAssignments, ValidationError>,
    /// Where the mapping was written; `None` means stdout.
    pub output: Option<PathBuf>,
}

pub fn run_preview(args: &PreviewArgs) -> Result<MappingSession> {
    let mut options = MappingOptions::default();
    if let Some(size) = args.page_size {
        options = options.with_page_size(size);
    }
    let preview = load_preview(&args.csv, args.header, options.preview_rows)?;
    let mut session = MappingSession::new(&preview, Vec::new(), options)
        .context("create preview session")?;
    for _ in 1..args.page {
        if !session.next_page() {
            break;
        }
    }
    Ok(session)
}

pub fn run_map(args: &MapArgs) -> Result<MapResult> {
    let span = info_span!("map", csv = %args.csv.display());
    let _guard = span.enter();

    let schema = load_field_schema(&args.fields)
        .with_context(|| format!("load fields: {}", args.fields.display()))?;
    let mut options = schema.options_or_default();
    if let Some(size) = args.page_size {
        options = options.with_page_size(size);
    }
    if args.no_auto_match {
        options = options.with_auto_match_headers(false);
    }

    let preview = load_preview(&args.csv, args.header, options.preview_rows)?;
    let mut session =
        MappingSession::new(&preview, schema.fields, options).context("create mapping session")?;
    debug!(seeded = session.assignments().len(), "session ready");

    for spec in &args.assign {
        session
            .drag_onto(spec.column, Some(spec.field.as_str()))
            .with_context(|| format!("assign {spec}"))?;
    }

    if let Some(path) = &args.events {
        let events = load_events(path)?;
        let applied = session
            .replay(&events)
            .with_context(|| format!("replay events: {}", path.display()))?;
        info!(applied, "replayed gesture events");
    }

    let mut accepted = None;
    let outcome = {
        let mut handler = Callbacks::new(|assignments| accepted = Some(assignments), || {});
        session.submit(&mut handler)
    };
    if let (Some(assignments), Some(path)) = (&accepted, &args.output) {
        write_mapping(assignments, path)?;
    }

    Ok(MapResult {
        session,
        outcome,
        output: args.output.clone(),
    })
}

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let schema = load_field_schema(&args.fields)
        .with_context(|| format!("load fields: {}", args.fields.display()))?;
    print_definitions(&schema.fields);
    Ok(())
}

fn load_preview(path: &Path, header: HeaderArgs, max_rows: usize) -> Result<Preview> {
    let options = PreviewOptions::new()
        .with_header(header_mode(header))
        .with_max_rows(max_rows);
    let preview =
        read_preview(path, &options).with_context(|| format!("read csv: {}", path.display()))?;
    if let Some(first) = preview.rows.first() {
        for (index, cell) in first.iter().enumerate() {
            trace!(column = index, value = redact_value(cell), "first row cell");
        }
    }
    Ok(preview)
}

fn header_mode(args: HeaderArgs) -> HeaderMode {
    match (args.header, args.no_header) {
        (true, _) => HeaderMode::Present,
        (_, true) => HeaderMode::Absent,
        _ => HeaderMode::Auto,
    }
}

fn load_events(path: &Path) -> Result<Vec<GestureEvent>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read events: {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parse events: {}", path.display()))
}

fn write_mapping(assignments: &FieldAssignments, path: &Path) -> Result<()> {
    let json = mapping_json(assignments)?;
    fs::write(path, format!("{json}\n"))
        .with_context(|| format!("write mapping: {}", path.display()))?;
    info!(path = %path.display(), "wrote mapping");
    Ok(())
}

pub fn mapping_json(assignments: &FieldAssignments) -> Result<String> {
    serde_json::to_string_pretty(assignments).context("serialize mapping")
}
