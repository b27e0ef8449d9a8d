//! Committed mapping snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::FieldName;

/// Immutable copy of the field-to-column assignments handed to the caller
/// once the mapping is accepted.
///
/// Serializes as a plain `{ "field": column_index }` object.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldAssignments(BTreeMap<FieldName, usize>);

impl FieldAssignments {
    pub fn new(entries: BTreeMap<FieldName, usize>) -> Self {
        Self(entries)
    }

    pub fn get(&self, field: &str) -> Option<usize> {
        self.0.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, usize)> {
        self.0.iter().map(|(name, index)| (name, *index))
    }

    pub fn as_map(&self) -> &BTreeMap<FieldName, usize> {
        &self.0
    }
}

impl From<FieldAssignments> for BTreeMap<FieldName, usize> {
    fn from(value: FieldAssignments) -> Self {
        value.0
    }
}
