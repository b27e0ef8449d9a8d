//! Field-to-column assignment store.
//!
//! The store keeps the mapping injective: no column is ever held by two
//! fields. Every mutation builds the complete next map from the current one
//! and swaps it in, so a reader never observes a half-applied update.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use colmap_model::{FieldAssignments, FieldName};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentStore {
    entries: BTreeMap<FieldName, usize>,
}

impl AssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `field` to `column`, displacing whichever field held `column`.
    ///
    /// A column previously held by `field` itself becomes unassigned.
    /// Returns true if the mapping changed.
    pub fn assign(&mut self, field: FieldName, column: usize) -> bool {
        self.transact(|next| {
            next.retain(|_, held| *held != column);
            next.insert(field, column);
        })
    }

    /// Clear whichever field holds `column`. No-op when it is unassigned.
    pub fn unassign(&mut self, column: usize) -> bool {
        self.transact(|next| next.retain(|_, held| *held != column))
    }

    /// Settle a finished drag in one step: release `column` from its current
    /// field, then hand it to `target` if there is one.
    pub fn settle_drop(&mut self, column: usize, target: Option<FieldName>) -> bool {
        self.transact(|next| {
            next.retain(|_, held| *held != column);
            if let Some(field) = target {
                next.insert(field, column);
            }
        })
    }

    /// Drop entries for fields that are no longer defined. Returns the number
    /// of entries removed.
    pub fn prune_removed_fields<'a, I>(&mut self, current: I) -> usize
    where
        I: IntoIterator<Item = &'a FieldName>,
    {
        let keep: BTreeSet<&str> = current.into_iter().map(FieldName::as_str).collect();
        let before = self.entries.len();
        self.transact(|next| next.retain(|field, _| keep.contains(field.as_str())));
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!(removed, "pruned assignments of removed fields");
        }
        removed
    }

    pub fn is_assigned(&self, column: usize) -> bool {
        self.entries.values().any(|held| *held == column)
    }

    pub fn assignment_for(&self, field: &str) -> Option<usize> {
        self.entries.get(field).copied()
    }

    /// The field currently holding `column`.
    pub fn field_for(&self, column: usize) -> Option<&FieldName> {
        self.entries
            .iter()
            .find_map(|(field, held)| (*held == column).then_some(field))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, usize)> {
        self.entries.iter().map(|(field, column)| (field, *column))
    }

    /// Immutable copy of the current mapping.
    pub fn snapshot(&self) -> FieldAssignments {
        FieldAssignments::new(self.entries.clone())
    }

    fn transact(&mut self, update: impl FnOnce(&mut BTreeMap<FieldName, usize>)) -> bool {
        let mut next = self.entries.clone();
        update(&mut next);
        debug_assert!(is_injective(&next), "assignment map lost injectivity");
        if next == self.entries {
            return false;
        }
        self.entries = next;
        true
    }
}

fn is_injective(entries: &BTreeMap<FieldName, usize>) -> bool {
    let mut seen = BTreeSet::new();
    entries.values().all(|column| seen.insert(*column))
}
