//! Interactive mapping session.
//!
//! [`MappingSession`] ties the pieces together for one preview: it owns the
//! derived columns, the field list, the assignment store, the touched set, the
//! drag controller and the page cursor. Every input event is one synchronous
//! `&mut self` call, so a drop's unassign/assign pair is never observable half
//! way through.

use tracing::{debug, info, warn};

use colmap_model::{
    Column, Field, FieldAssignments, FieldName, MappingOptions, Point, Preview,
    ensure_unique_names,
};

use crate::columns::derive_columns;
use crate::drag::{DragController, DragState, DropIntent};
use crate::error::MappingError;
use crate::matching::HeaderMatcher;
use crate::paginator::{PageSlot, Paginator};
use crate::store::AssignmentStore;
use crate::validation::{TouchedSet, ValidationEngine, ValidationError};

/// Receives the outcome of the mapping step.
pub trait CompletionHandler {
    /// Called with an immutable copy of the assignments once validation passes.
    fn on_accept(&mut self, assignments: FieldAssignments);

    /// Called when the user abandons the mapping step.
    fn on_cancel(&mut self);
}

/// [`CompletionHandler`] built from two closures.
pub struct Callbacks<A, C> {
    accept: A,
    cancel: C,
}

impl<A, C> Callbacks<A, C>
where
    A: FnMut(FieldAssignments),
    C: FnMut(),
{
    pub fn new(accept: A, cancel: C) -> Self {
        Self { accept, cancel }
    }
}

impl<A, C> CompletionHandler for Callbacks<A, C>
where
    A: FnMut(FieldAssignments),
    C: FnMut(),
{
    fn on_accept(&mut self, assignments: FieldAssignments) {
        (self.accept)(assignments);
    }

    fn on_cancel(&mut self) {
        (self.cancel)();
    }
}

/// One slot of the visible source list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceSlot<'a> {
    Column {
        column: &'a Column,
        /// Field currently holding the column.
        assigned_to: Option<&'a FieldName>,
        /// The column is the one being dragged.
        is_dragged: bool,
    },
    /// Padding on the last page; not draggable.
    Placeholder,
}

/// Presentation state of one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStatus<'a> {
    pub field: &'a Field,
    /// Column assigned to the field.
    pub assigned: Option<&'a Column>,
    pub touched: bool,
    /// Required, unassigned and touched.
    pub has_error: bool,
    /// The active drag would drop onto this field.
    pub is_drop_target: bool,
}

/// Summary of mapping counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingSummary {
    /// Total number of fields.
    pub total_fields: usize,
    /// Number of assigned fields.
    pub assigned: usize,
    /// Total required fields.
    pub required_total: usize,
    /// Required fields that are assigned.
    pub required_assigned: usize,
}

impl MappingSummary {
    pub fn is_complete(&self) -> bool {
        self.required_assigned == self.required_total
    }
}

#[derive(Debug, Clone)]
pub struct MappingSession {
    file_name: String,
    columns: Vec<Column>,
    fields: Vec<Field>,
    options: MappingOptions,
    store: AssignmentStore,
    touched: TouchedSet,
    drag: DragController,
    pager: Paginator,
    revision: u64,
}

impl MappingSession {
    /// Create a session for a preview.
    ///
    /// With headers present and `auto_match_headers` set, assignments are
    /// seeded from header matches; seeded fields are not marked touched.
    pub fn new(
        preview: &Preview,
        fields: Vec<Field>,
        options: MappingOptions,
    ) -> Result<Self, MappingError> {
        ensure_unique_names(&fields)?;
        let columns = derive_columns(preview, options.preview_rows);
        let pager = Paginator::new(columns.len(), options.page_size);

        let mut store = AssignmentStore::new();
        if preview.has_headers && options.auto_match_headers {
            let matcher = HeaderMatcher::new(options.header_match_threshold);
            for found in matcher.suggest_all(&columns, &fields) {
                debug!(
                    field = %found.field,
                    column = found.column,
                    score = found.score,
                    "seeded assignment from header"
                );
                store.assign(found.field, found.column);
            }
        }

        debug!(
            file = %preview.file_name,
            columns = columns.len(),
            fields = fields.len(),
            seeded = store.len(),
            "mapping session created"
        );

        Ok(Self {
            file_name: preview.file_name.clone(),
            columns,
            fields,
            options,
            store,
            touched: TouchedSet::new(),
            drag: DragController::new(),
            pager,
            revision: 0,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a field. Surrounding whitespace is ignored, as it is when a
    /// [`FieldName`] is built.
    pub fn field(&self, name: &str) -> Option<&Field> {
        let name = name.trim();
        self.fields.iter().find(|field| field.name.as_str() == name)
    }

    pub fn options(&self) -> &MappingOptions {
        &self.options
    }

    pub fn assignments(&self) -> &AssignmentStore {
        &self.store
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    /// Counter bumped on every logical change. Pointer samples do not count.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Visual state of the active gesture.
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.state()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Immutable copy of the current assignments.
    pub fn snapshot(&self) -> FieldAssignments {
        self.store.snapshot()
    }

    // =========================================================================
    // Fields
    // =========================================================================

    /// Replace the field list, pruning assignments, touched marks and the
    /// drop target of fields that no longer exist.
    pub fn set_fields(&mut self, fields: Vec<Field>) -> Result<(), MappingError> {
        ensure_unique_names(&fields)?;
        self.fields = fields;
        let names: Vec<&FieldName> = self.fields.iter().map(|field| &field.name).collect();
        let pruned = self.store.prune_removed_fields(names.iter().copied());
        self.touched.prune_removed_fields(names.iter().copied());
        self.drag
            .retain_drop_target(|target| names.iter().any(|name| *name == target));
        debug!(fields = self.fields.len(), pruned, "field list replaced");
        self.bump();
        Ok(())
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count()
    }

    /// Slots of the current page, padded with placeholders.
    pub fn page(&self) -> Vec<SourceSlot<'_>> {
        let dragged = self.drag.state().map(|state| state.column.index);
        self.pager
            .page_of(&self.columns)
            .into_iter()
            .map(|slot| match slot {
                PageSlot::Item(column) => SourceSlot::Column {
                    column,
                    assigned_to: self.store.field_for(column.index),
                    is_dragged: dragged == Some(column.index),
                },
                PageSlot::Placeholder => SourceSlot::Placeholder,
            })
            .collect()
    }

    pub fn next_page(&mut self) -> bool {
        let moved = self.pager.next();
        if moved {
            self.bump();
        }
        moved
    }

    pub fn previous_page(&mut self) -> bool {
        let moved = self.pager.previous();
        if moved {
            self.bump();
        }
        moved
    }

    // =========================================================================
    // Drag and drop
    // =========================================================================

    /// Start dragging a column, from the source list (`from_field = None`) or
    /// from the field currently holding it. An assigned column can only be
    /// picked up from its field.
    pub fn start_drag(
        &mut self,
        column: usize,
        from_field: Option<&str>,
        pointer: Point,
        initial_width: f64,
    ) -> Result<(), MappingError> {
        let dragged = self
            .columns
            .get(column)
            .cloned()
            .ok_or(MappingError::ColumnNotFound(column))?;
        let start_field = match from_field {
            None => {
                if let Some(holder) = self.store.field_for(column) {
                    return Err(MappingError::AlreadyAssigned {
                        column,
                        field: holder.to_string(),
                    });
                }
                None
            }
            Some(name) => {
                let field = self
                    .field(name)
                    .ok_or_else(|| MappingError::FieldNotFound(name.to_string()))?;
                if self.store.assignment_for(field.name.as_str()) != Some(column) {
                    return Err(MappingError::NotAssigned {
                        column,
                        field: field.name.to_string(),
                    });
                }
                Some(field.name.clone())
            }
        };
        self.drag
            .start(dragged, start_field, pointer, initial_width)?;
        self.bump();
        Ok(())
    }

    /// Forward a pointer sample to the drag visual. Not a logical change.
    pub fn move_pointer(&mut self, pointer: Point) -> bool {
        self.drag.move_pointer(pointer)
    }

    /// Hover enter/leave over a field during a drag. Returns true if the drop
    /// target changed. Ignored while idle.
    pub fn set_hover(&mut self, field: &str, is_entering: bool) -> Result<bool, MappingError> {
        if !self.drag.is_dragging() {
            return Ok(false);
        }
        let name = self
            .field(field)
            .map(|field| field.name.clone())
            .ok_or_else(|| MappingError::FieldNotFound(field.to_string()))?;
        let changed = self.drag.set_hover(name, is_entering);
        if changed {
            self.bump();
        }
        Ok(changed)
    }

    /// Release the pointer and settle the drop.
    pub fn release(&mut self) -> Option<DropIntent> {
        let intent = self.drag.release()?;
        self.settle(&intent);
        Some(intent)
    }

    /// Abort the gesture. Equivalent to releasing over no field.
    pub fn cancel_drag(&mut self) -> Option<DropIntent> {
        let intent = self.drag.cancel()?;
        self.settle(&intent);
        Some(intent)
    }

    /// Run a whole gesture: pick up `column` from the source list, hover
    /// `field` and release.
    pub fn drag_onto(&mut self, column: usize, field: Option<&str>) -> Result<(), MappingError> {
        if let Some(name) = field
            && self.field(name).is_none()
        {
            return Err(MappingError::FieldNotFound(name.to_string()));
        }
        let from_field = self.store.field_for(column).map(|name| name.to_string());
        self.start_drag(column, from_field.as_deref(), Point::default(), 0.0)?;
        if let Some(previous) = from_field.as_deref() {
            self.set_hover(previous, false)?;
        }
        if let Some(name) = field {
            self.set_hover(name, true)?;
        }
        self.release();
        Ok(())
    }

    fn settle(&mut self, intent: &DropIntent) {
        let target = intent
            .target
            .as_ref()
            .filter(|target| self.field(target.as_str()).is_some())
            .cloned();
        if let Some(field) = &target {
            self.touched.touch(field.clone());
        }
        self.store.settle_drop(intent.column, target);
        self.bump();
    }

    // =========================================================================
    // Validation
    // =========================================================================

    pub fn field_status(&self, name: &str) -> Option<FieldStatus<'_>> {
        self.field(name).map(|field| self.status_of(field))
    }

    /// Status of every field in declaration order.
    pub fn field_statuses(&self) -> Vec<FieldStatus<'_>> {
        self.fields.iter().map(|field| self.status_of(field)).collect()
    }

    fn status_of<'a>(&'a self, field: &'a Field) -> FieldStatus<'a> {
        let name = field.name.as_str();
        FieldStatus {
            field,
            assigned: self
                .store
                .assignment_for(name)
                .and_then(|index| self.columns.get(index)),
            touched: self.touched.is_touched(name),
            has_error: ValidationEngine::field_has_error(field, &self.store, &self.touched),
            is_drop_target: self.drag.drop_target().map(FieldName::as_str) == Some(name),
        }
    }

    /// Validation message for the touched fields, if any is invalid.
    pub fn error(&self) -> Option<&'static str> {
        ValidationEngine::compute_error(&self.fields, &self.store, &self.touched)
    }

    pub fn summary(&self) -> MappingSummary {
        let required: Vec<&Field> = self
            .fields
            .iter()
            .filter(|field| !field.is_optional)
            .collect();
        MappingSummary {
            total_fields: self.fields.len(),
            assigned: self.store.len(),
            required_total: required.len(),
            required_assigned: required
                .iter()
                .filter(|field| self.store.assignment_for(field.name.as_str()).is_some())
                .count(),
        }
    }

    /// Touch every field and validate. On success the handler receives the
    /// snapshot, which is also returned. Assignments are kept either way.
    pub fn submit<H: CompletionHandler + ?Sized>(
        &mut self,
        handler: &mut H,
    ) -> Result<FieldAssignments, ValidationError> {
        let result = ValidationEngine::submit(&self.fields, &self.store, &mut self.touched);
        self.bump();
        match result {
            Ok(()) => {
                let snapshot = self.store.snapshot();
                info!(
                    file = %self.file_name,
                    assigned = snapshot.len(),
                    "mapping accepted"
                );
                handler.on_accept(snapshot.clone());
                Ok(snapshot)
            }
            Err(error) => {
                warn!(missing = error.missing.len(), "mapping rejected: {error}");
                Err(error)
            }
        }
    }

    /// Abandon the mapping step. An active gesture is cancelled first.
    pub fn cancel<H: CompletionHandler + ?Sized>(&mut self, handler: &mut H) {
        self.cancel_drag();
        info!(file = %self.file_name, "mapping cancelled");
        handler.on_cancel();
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
