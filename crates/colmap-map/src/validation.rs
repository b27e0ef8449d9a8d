//! Required-field validation and touched tracking.
//!
//! A field is invalid when it is required and unassigned. Errors are only
//! surfaced for fields the user has touched, so nothing is flagged before the
//! first interaction. A submit attempt touches every field.

use std::collections::BTreeSet;

use thiserror::Error;

use colmap_model::{Field, FieldName};

use crate::store::AssignmentStore;

/// Message shown when a submit is rejected.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please assign all required fields";

/// Submit rejected because required fields are unassigned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// User-facing message.
    pub message: &'static str,
    /// Required fields that are still unassigned, in declaration order.
    pub missing: Vec<FieldName>,
}

/// Fields that received a drop or went through a submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedSet {
    fields: BTreeSet<FieldName>,
}

impl TouchedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch(&mut self, field: FieldName) -> bool {
        self.fields.insert(field)
    }

    pub fn touch_all<'a>(&mut self, fields: impl IntoIterator<Item = &'a Field>) -> bool {
        let mut changed = false;
        for field in fields {
            changed |= self.fields.insert(field.name.clone());
        }
        changed
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    pub fn prune_removed_fields<'a, I>(&mut self, current: I) -> usize
    where
        I: IntoIterator<Item = &'a FieldName>,
    {
        let keep: BTreeSet<&str> = current.into_iter().map(FieldName::as_str).collect();
        let before = self.fields.len();
        self.fields.retain(|field| keep.contains(field.as_str()));
        before - self.fields.len()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Stateless validation over fields, assignments and the touched set.
pub struct ValidationEngine;

impl ValidationEngine {
    /// Required and unassigned.
    pub fn is_invalid(field: &Field, assignments: &AssignmentStore) -> bool {
        !field.is_optional && assignments.assignment_for(field.name.as_str()).is_none()
    }

    /// Invalid fields in declaration order.
    pub fn missing_fields(fields: &[Field], assignments: &AssignmentStore) -> Vec<FieldName> {
        fields
            .iter()
            .filter(|field| Self::is_invalid(field, assignments))
            .map(|field| field.name.clone())
            .collect()
    }

    /// Whether the per-field error should be displayed.
    pub fn field_has_error(
        field: &Field,
        assignments: &AssignmentStore,
        touched: &TouchedSet,
    ) -> bool {
        touched.is_touched(field.name.as_str()) && Self::is_invalid(field, assignments)
    }

    /// The validation message if any touched field is invalid.
    pub fn compute_error(
        fields: &[Field],
        assignments: &AssignmentStore,
        touched: &TouchedSet,
    ) -> Option<&'static str> {
        fields
            .iter()
            .any(|field| Self::field_has_error(field, assignments, touched))
            .then_some(REQUIRED_FIELDS_MESSAGE)
    }

    /// Touch every field, then accept or reject the current assignments.
    pub fn submit(
        fields: &[Field],
        assignments: &AssignmentStore,
        touched: &mut TouchedSet,
    ) -> Result<(), ValidationError> {
        touched.touch_all(fields);
        match Self::compute_error(fields, assignments, touched) {
            None => Ok(()),
            Some(message) => Err(ValidationError {
                message,
                missing: Self::missing_fields(fields, assignments),
            }),
        }
    }
}
