//! Target field definitions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{FieldName, ModelError};

/// A named target slot that a column can be mapped onto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Unique identifier, used as the key of the assignment map.
    pub name: FieldName,
    /// Display label. Empty labels fall back to the name.
    #[serde(default)]
    pub label: String,
    /// Optional fields may stay unassigned at submit time.
    #[serde(default, rename = "optional")]
    pub is_optional: bool,
}

impl Field {
    /// A field that must be assigned before the mapping can be accepted.
    pub fn required(name: FieldName, label: impl Into<String>) -> Self {
        Self {
            name,
            label: label.into(),
            is_optional: false,
        }
    }

    /// A field that may remain unassigned.
    pub fn optional(name: FieldName, label: impl Into<String>) -> Self {
        Self {
            name,
            label: label.into(),
            is_optional: true,
        }
    }

    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            self.name.as_str()
        } else {
            &self.label
        }
    }
}

/// Check that every field name appears once.
pub fn ensure_unique_names(fields: &[Field]) -> Result<(), ModelError> {
    let mut seen = BTreeSet::new();
    for field in fields {
        if !seen.insert(field.name.as_str()) {
            return Err(ModelError::DuplicateFieldName(field.name.to_string()));
        }
    }
    Ok(())
}
