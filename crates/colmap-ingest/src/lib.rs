//! Input side of the mapper: bounded CSV previews and TOML field schemas.

pub mod error;
pub mod preview;
pub mod schema;

pub use error::{IngestError, Result};
pub use preview::{
    HeaderMode, PreviewOptions, detect_header_row, read_preview, read_preview_from_reader,
};
pub use schema::{FieldSchema, load_field_schema, parse_field_schema};
