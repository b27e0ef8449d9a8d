//! Drag gesture state machine.
//!
//! A gesture goes `Idle -> Dragging -> Idle`. While dragging, pointer samples
//! only move the visual position; the drop target changes solely through
//! hover signals. Releasing or cancelling yields a [`DropIntent`] that the
//! caller settles against the assignment store in a single update.

use std::mem;

use tracing::{debug, trace, warn};

use colmap_model::{Column, FieldName, Point};

use crate::error::MappingError;
use crate::hover::HoverSignal;

/// Payload of an active gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    /// Pointer position when the gesture started.
    pub initial_pointer: Point,
    /// Latest pointer position.
    pub pointer: Point,
    /// Measured width of the dragged representation at gesture start.
    pub initial_width: f64,
    /// Snapshot of the dragged column.
    pub column: Column,
    /// Field the gesture started from, for a re-drag of an assigned column.
    pub source_field: Option<FieldName>,
    /// Current drop target; `None` returns the column to the source list.
    pub drop_field: Option<FieldName>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(DragState),
}

/// Outcome of a finished gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropIntent {
    /// Index of the dragged column.
    pub column: usize,
    /// Field to receive the column; `None` unassigns it.
    pub target: Option<FieldName>,
    /// True when the gesture was aborted rather than released.
    pub cancelled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    phase: DragPhase,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn state(&self) -> Option<&DragState> {
        match &self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging(state) => Some(state),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    pub fn drop_target(&self) -> Option<&FieldName> {
        self.state().and_then(|state| state.drop_field.as_ref())
    }

    /// Start a gesture. `start_field` marks a re-drag from an assigned field
    /// and becomes the initial drop target.
    pub fn start(
        &mut self,
        column: Column,
        start_field: Option<FieldName>,
        pointer: Point,
        initial_width: f64,
    ) -> Result<(), MappingError> {
        if let DragPhase::Dragging(active) = &self.phase {
            warn!(
                column = column.index,
                active = active.column.index,
                "drag start ignored: gesture already active"
            );
            return Err(MappingError::DragInProgress {
                column: active.column.index,
            });
        }
        debug!(
            column = column.index,
            from_field = start_field.as_ref().map(FieldName::as_str),
            "drag started"
        );
        self.phase = DragPhase::Dragging(DragState {
            initial_pointer: pointer,
            pointer,
            initial_width,
            column,
            drop_field: start_field.clone(),
            source_field: start_field,
        });
        Ok(())
    }

    /// Record a pointer sample. Returns false when no gesture is active.
    pub fn move_pointer(&mut self, pointer: Point) -> bool {
        let DragPhase::Dragging(state) = &mut self.phase else {
            return false;
        };
        trace!(x = pointer.x, y = pointer.y, "drag pointer moved");
        state.pointer = pointer;
        true
    }

    /// Apply a hover enter/leave signal. Returns true if the drop target
    /// changed; always false when idle.
    pub fn set_hover(&mut self, field: FieldName, is_entering: bool) -> bool {
        let DragPhase::Dragging(state) = &mut self.phase else {
            return false;
        };
        let changed = HoverSignal::new(field, is_entering).apply(&mut state.drop_field);
        if changed {
            debug!(
                column = state.column.index,
                drop_field = state.drop_field.as_ref().map(FieldName::as_str),
                "drop target changed"
            );
        }
        changed
    }

    /// Clear the drop target if `keep` rejects it. Used when the field list
    /// changes mid-gesture.
    pub fn retain_drop_target(&mut self, keep: impl Fn(&FieldName) -> bool) -> bool {
        let DragPhase::Dragging(state) = &mut self.phase else {
            return false;
        };
        match &state.drop_field {
            Some(field) if !keep(field) => {
                state.drop_field = None;
                true
            }
            _ => false,
        }
    }

    /// End the gesture by releasing the pointer.
    pub fn release(&mut self) -> Option<DropIntent> {
        let DragPhase::Dragging(state) = mem::take(&mut self.phase) else {
            return None;
        };
        debug!(
            column = state.column.index,
            drop_field = state.drop_field.as_ref().map(FieldName::as_str),
            "drag released"
        );
        Some(DropIntent {
            column: state.column.index,
            target: state.drop_field,
            cancelled: false,
        })
    }

    /// Abort the gesture. Settles exactly like a release over no field.
    pub fn cancel(&mut self) -> Option<DropIntent> {
        let DragPhase::Dragging(state) = mem::take(&mut self.phase) else {
            return None;
        };
        debug!(column = state.column.index, "drag cancelled");
        Some(DropIntent {
            column: state.column.index,
            target: None,
            cancelled: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(index: usize) -> Column {
        Column {
            index,
            code: crate::addressing::column_code(index),
            header: None,
            values: vec!["v".to_string()],
        }
    }

    fn name(value: &str) -> FieldName {
        FieldName::new(value).unwrap()
    }

    #[test]
    fn start_from_source_has_no_target() {
        let mut drag = DragController::new();
        drag.start(column(2), None, Point::new(10.0, 20.0), 120.0)
            .unwrap();

        let state = drag.state().unwrap();
        assert_eq!(state.column.index, 2);
        assert_eq!(state.drop_field, None);
        assert!((state.initial_width - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn re_drag_targets_start_field() {
        let mut drag = DragController::new();
        drag.start(column(0), Some(name("a")), Point::default(), 80.0)
            .unwrap();

        assert_eq!(drag.drop_target(), Some(&name("a")));
        let intent = drag.release().unwrap();
        assert_eq!(intent.target, Some(name("a")));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn second_start_is_rejected() {
        let mut drag = DragController::new();
        drag.start(column(0), None, Point::default(), 80.0).unwrap();

        let err = drag
            .start(column(1), None, Point::default(), 80.0)
            .unwrap_err();
        assert_eq!(err, MappingError::DragInProgress { column: 0 });
        assert_eq!(drag.state().unwrap().column.index, 0);
    }

    #[test]
    fn pointer_moves_do_not_touch_target() {
        let mut drag = DragController::new();
        drag.start(column(0), None, Point::new(1.0, 1.0), 80.0)
            .unwrap();
        drag.set_hover(name("a"), true);

        assert!(drag.move_pointer(Point::new(6.0, -3.0)));
        let state = drag.state().unwrap();
        assert_eq!(state.pointer, Point::new(6.0, -3.0));
        assert_eq!(state.initial_pointer, Point::new(1.0, 1.0));
        assert_eq!(state.drop_field, Some(name("a")));
    }

    #[test]
    fn cancel_discards_target() {
        let mut drag = DragController::new();
        drag.start(column(3), Some(name("a")), Point::default(), 80.0)
            .unwrap();
        drag.set_hover(name("b"), true);

        let intent = drag.cancel().unwrap();
        assert_eq!(
            intent,
            DropIntent {
                column: 3,
                target: None,
                cancelled: true
            }
        );
        assert_eq!(drag.phase(), &DragPhase::Idle);
    }

    #[test]
    fn idle_controller_ignores_input() {
        let mut drag = DragController::new();
        assert!(!drag.move_pointer(Point::default()));
        assert!(!drag.set_hover(name("a"), true));
        assert!(drag.release().is_none());
        assert!(drag.cancel().is_none());
    }
}
