//! Field schema files.
//!
//! A schema lists the target fields in display order and may carry session
//! options:
//!
//! ```toml
//! [options]
//! page_size = 5
//!
//! [[fields]]
//! name = "email"
//! label = "Email address"
//!
//! [[fields]]
//! name = "phone"
//! optional = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use colmap_model::{Field, MappingOptions, ensure_unique_names};

use crate::error::{IngestError, Result};

/// Target fields plus optional session settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldSchema {
    #[serde(default)]
    pub options: Option<MappingOptions>,
    pub fields: Vec<Field>,
}

impl FieldSchema {
    /// Options from the file, or defaults.
    pub fn options_or_default(&self) -> MappingOptions {
        self.options.clone().unwrap_or_default()
    }
}

/// Load and validate a schema file.
pub fn load_field_schema(path: &Path) -> Result<FieldSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    parse_field_schema(path, &content)
}

/// Parse schema text. `path` is only used in error messages.
pub fn parse_field_schema(path: &Path, content: &str) -> Result<FieldSchema> {
    let schema: FieldSchema = toml::from_str(content).map_err(|source| IngestError::SchemaParse {
        path: path.to_path_buf(),
        source,
    })?;
    if schema.fields.is_empty() {
        return Err(IngestError::NoFields {
            path: path.to_path_buf(),
        });
    }
    ensure_unique_names(&schema.fields).map_err(|source| IngestError::InvalidSchema {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        fields = schema.fields.len(),
        required = schema.fields.iter().filter(|f| !f.is_optional).count(),
        "loaded field schema"
    );
    Ok(schema)
}
