//! Error types for mapping operations.

use thiserror::Error;

use colmap_model::ModelError;

/// Errors from driving a mapping session with input it cannot accept.
///
/// None of these change session state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MappingError {
    /// Column index outside the preview.
    #[error("Column not found: {0}")]
    ColumnNotFound(usize),

    /// Field name not in the current field list.
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    /// A drag gesture is already active.
    #[error("Column {column} is already being dragged")]
    DragInProgress {
        /// The column of the active gesture.
        column: usize,
    },

    /// A re-drag started from a field that does not hold the column.
    #[error("Column {column} is not assigned to '{field}'")]
    NotAssigned {
        /// The column the gesture started on.
        column: usize,
        /// The field the gesture claimed to start from.
        field: String,
    },

    /// A source-list drag started on a column that a field already holds.
    #[error("Column {column} is already assigned to '{field}'")]
    AlreadyAssigned {
        /// The column the gesture started on.
        column: usize,
        /// The field holding the column.
        field: String,
    },

    /// Invalid model input (field names, field lists).
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl MappingError {
    /// Get the field name associated with this error, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::FieldNotFound(field)
            | Self::NotAssigned { field, .. }
            | Self::AlreadyAssigned { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get the column index associated with this error, if any.
    pub fn column(&self) -> Option<usize> {
        match self {
            Self::ColumnNotFound(column)
            | Self::DragInProgress { column }
            | Self::NotAssigned { column, .. }
            | Self::AlreadyAssigned { column, .. } => Some(*column),
            _ => None,
        }
    }
}
