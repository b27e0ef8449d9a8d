//! Integration tests for drag-and-drop mapping sessions.

use colmap_map::{
    Callbacks, CompletionHandler, FieldStatus, MappingError, MappingSession,
    REQUIRED_FIELDS_MESSAGE, SourceSlot,
};
use colmap_model::{Field, FieldAssignments, FieldName, MappingOptions, Point, Preview};

fn name(value: &str) -> FieldName {
    FieldName::new(value).unwrap()
}

fn sample_preview(width: usize) -> Preview {
    let rows = (0..3)
        .map(|row| (0..width).map(|col| format!("r{row}c{col}")).collect())
        .collect();
    Preview::new("sample.csv", false, rows)
}

fn sample_fields() -> Vec<Field> {
    vec![
        Field::required(name("a"), "Field A"),
        Field::optional(name("b"), "Field B"),
    ]
}

fn sample_session(width: usize) -> MappingSession {
    MappingSession::new(&sample_preview(width), sample_fields(), MappingOptions::default())
        .unwrap()
}

fn drop_on(session: &mut MappingSession, column: usize, field: &str) {
    session
        .start_drag(column, None, Point::new(0.0, 0.0), 100.0)
        .unwrap();
    session.move_pointer(Point::new(30.0, 40.0));
    session.set_hover(field, true).unwrap();
    session.release().unwrap();
}

#[derive(Default)]
struct Recorder {
    accepted: Vec<FieldAssignments>,
    cancelled: usize,
}

impl CompletionHandler for Recorder {
    fn on_accept(&mut self, assignments: FieldAssignments) {
        self.accepted.push(assignments);
    }

    fn on_cancel(&mut self) {
        self.cancelled += 1;
    }
}

#[test]
fn drop_assigns_and_touches_field() {
    let mut session = sample_session(3);
    drop_on(&mut session, 1, "a");

    assert_eq!(session.assignments().assignment_for("a"), Some(1));
    assert!(session.touched().is_touched("a"));
    assert!(!session.touched().is_touched("b"));
    assert!(!session.is_dragging());
}

#[test]
fn dropping_on_occupied_field_displaces_occupant() {
    let mut session = sample_session(3);
    drop_on(&mut session, 0, "a");
    drop_on(&mut session, 2, "a");

    assert_eq!(session.assignments().assignment_for("a"), Some(2));
    assert!(!session.assignments().is_assigned(0));
}

#[test]
fn dragging_assigned_column_to_other_field_moves_it() {
    let mut session = sample_session(3);
    drop_on(&mut session, 0, "a");

    session
        .start_drag(0, Some("a"), Point::default(), 100.0)
        .unwrap();
    session.set_hover("b", true).unwrap();
    session.set_hover("a", false).unwrap();
    session.release();

    assert_eq!(session.assignments().assignment_for("a"), None);
    assert_eq!(session.assignments().assignment_for("b"), Some(0));
    assert_eq!(session.assignments().len(), 1);
}

#[test]
fn re_drag_released_in_place_keeps_assignment() {
    let mut session = sample_session(3);
    drop_on(&mut session, 1, "a");
    let before = session.snapshot();

    session
        .start_drag(1, Some("a"), Point::default(), 100.0)
        .unwrap();
    session.release();

    assert_eq!(session.snapshot(), before);
}

#[test]
fn re_drag_out_to_nowhere_unassigns() {
    let mut session = sample_session(3);
    drop_on(&mut session, 1, "a");

    session
        .start_drag(1, Some("a"), Point::default(), 100.0)
        .unwrap();
    session.set_hover("a", false).unwrap();
    let intent = session.release().unwrap();

    assert_eq!(intent.target, None);
    assert!(session.assignments().is_empty());
}

#[test]
fn cancelled_drag_from_source_leaves_map_unchanged() {
    let mut session = sample_session(4);
    drop_on(&mut session, 3, "b");
    let before = session.snapshot();

    session
        .start_drag(0, None, Point::default(), 100.0)
        .unwrap();
    session.set_hover("a", true).unwrap();
    let intent = session.cancel_drag().unwrap();

    assert!(intent.cancelled);
    assert_eq!(session.snapshot(), before);
    assert!(session.drag_state().is_none());
    assert!(!session.touched().is_touched("a"));
}

#[test]
fn assigned_column_cannot_be_picked_up_from_source_list() {
    let mut session = sample_session(3);
    session.drag_onto(0, Some("a")).unwrap();
    let before = session.snapshot();
    let revision = session.revision();

    let err = session
        .start_drag(0, None, Point::default(), 100.0)
        .unwrap_err();
    assert_eq!(
        err,
        MappingError::AlreadyAssigned {
            column: 0,
            field: "a".to_string()
        }
    );
    assert_eq!(err.field(), Some("a"));
    assert!(!session.is_dragging());
    assert!(session.cancel_drag().is_none());
    assert_eq!(session.snapshot(), before);
    assert_eq!(session.revision(), revision);
}

#[test]
fn field_lookups_ignore_surrounding_whitespace() {
    let mut session = sample_session(3);
    session
        .start_drag(1, None, Point::default(), 100.0)
        .unwrap();
    assert!(session.set_hover(" a ", true).unwrap());
    session.release();
    assert_eq!(session.assignments().assignment_for("a"), Some(1));

    session
        .start_drag(1, Some("a "), Point::default(), 100.0)
        .unwrap();
    assert_eq!(
        session.drag_state().unwrap().source_field,
        Some(name("a"))
    );
    session.release();
    assert_eq!(session.assignments().assignment_for("a"), Some(1));
    assert!(session.field_status("  b").is_some());
}

#[test]
fn hover_race_keeps_latest_target() {
    let mut session = sample_session(2);
    session
        .start_drag(0, None, Point::default(), 100.0)
        .unwrap();

    session.set_hover("a", true).unwrap();
    session.set_hover("b", true).unwrap();
    assert_eq!(session.drag_state().unwrap().drop_field, Some(name("b")));

    let changed = session.set_hover("a", false).unwrap();
    assert!(!changed);
    assert_eq!(session.drag_state().unwrap().drop_field, Some(name("b")));

    session.release();
    assert_eq!(session.assignments().assignment_for("b"), Some(0));
}

#[test]
fn submit_rejects_until_required_fields_are_assigned() {
    let mut session = sample_session(3);
    let mut recorder = Recorder::default();

    let err = session.submit(&mut recorder).unwrap_err();
    assert_eq!(err.message, REQUIRED_FIELDS_MESSAGE);
    assert!(recorder.accepted.is_empty());
    assert!(session.touched().is_touched("a"));
    assert!(session.touched().is_touched("b"));
    assert_eq!(session.error(), Some(REQUIRED_FIELDS_MESSAGE));

    drop_on(&mut session, 0, "a");
    let snapshot = session.submit(&mut recorder).unwrap();

    assert_eq!(recorder.accepted.len(), 1);
    assert_eq!(recorder.accepted[0], snapshot);
    assert_eq!(serde_json::to_string(&snapshot).unwrap(), r#"{"a":0}"#);
}

#[test]
fn accepted_snapshot_is_detached_from_session() {
    let mut session = sample_session(3);
    drop_on(&mut session, 0, "a");

    let mut accepted = Vec::new();
    {
        let mut handler = Callbacks::new(|assignments| accepted.push(assignments), || {});
        session.submit(&mut handler).unwrap();
    }
    drop_on(&mut session, 2, "a");

    assert_eq!(accepted[0].get("a"), Some(0));
    assert_eq!(session.assignments().assignment_for("a"), Some(2));
}

#[test]
fn cancel_invokes_handler_and_aborts_drag() {
    let mut session = sample_session(3);
    let mut recorder = Recorder::default();
    session
        .start_drag(2, None, Point::default(), 100.0)
        .unwrap();
    session.set_hover("a", true).unwrap();

    session.cancel(&mut recorder);

    assert_eq!(recorder.cancelled, 1);
    assert!(recorder.accepted.is_empty());
    assert!(!session.is_dragging());
    assert!(session.assignments().is_empty());
}

#[test]
fn errors_only_show_for_touched_fields() {
    let mut session = sample_session(3);
    let statuses: Vec<FieldStatus<'_>> = session.field_statuses();
    assert!(statuses.iter().all(|status| !status.has_error));
    assert_eq!(session.error(), None);

    drop_on(&mut session, 0, "a");
    session
        .start_drag(0, Some("a"), Point::default(), 100.0)
        .unwrap();
    session.set_hover("a", false).unwrap();
    session.release();

    let status = session.field_status("a").unwrap();
    assert!(status.touched);
    assert!(status.has_error);
    assert!(!session.field_status("b").unwrap().has_error);
}

#[test]
fn removing_fields_prunes_assignments_and_touched() {
    let mut session = sample_session(3);
    drop_on(&mut session, 0, "a");
    drop_on(&mut session, 1, "b");

    session
        .set_fields(vec![Field::optional(name("b"), "Field B")])
        .unwrap();
    assert_eq!(session.assignments().assignment_for("a"), None);
    assert!(!session.touched().is_touched("a"));
    assert_eq!(session.assignments().assignment_for("b"), Some(1));

    let again = session.snapshot();
    session
        .set_fields(vec![Field::optional(name("b"), "Field B")])
        .unwrap();
    assert_eq!(session.snapshot(), again);
}

#[test]
fn removing_hovered_field_clears_drop_target() {
    let mut session = sample_session(3);
    session
        .start_drag(0, None, Point::default(), 100.0)
        .unwrap();
    session.set_hover("a", true).unwrap();

    session
        .set_fields(vec![Field::optional(name("b"), "Field B")])
        .unwrap();
    assert_eq!(session.drag_state().unwrap().drop_field, None);

    session.release();
    assert!(session.assignments().is_empty());
}

#[test]
fn field_status_reports_drop_target_and_column() {
    let mut session = sample_session(3);
    drop_on(&mut session, 2, "b");
    session
        .start_drag(0, None, Point::default(), 100.0)
        .unwrap();
    session.set_hover("a", true).unwrap();

    let a = session.field_status("a").unwrap();
    assert!(a.is_drop_target);
    assert!(a.assigned.is_none());

    let b = session.field_status("b").unwrap();
    assert!(!b.is_drop_target);
    assert_eq!(b.assigned.map(|column| column.code.as_str()), Some("C"));
}

#[test]
fn twelve_columns_page_through_source_list() {
    let mut session = sample_session(12);
    assert_eq!(session.page_count(), 3);
    assert!(!session.previous_page());

    session.next_page();
    session.next_page();
    assert!(!session.next_page());

    let page = session.page();
    let indices: Vec<Option<usize>> = page
        .iter()
        .map(|slot| match slot {
            SourceSlot::Column { column, .. } => Some(column.index),
            SourceSlot::Placeholder => None,
        })
        .collect();
    assert_eq!(indices, vec![Some(10), Some(11), None, None, None]);
}

#[test]
fn gesture_script_replays_against_session() {
    let mut session = sample_session(3);
    let events = serde_json::from_str::<Vec<colmap_map::GestureEvent>>(
        r#"[
            {"type": "start", "column": 1, "x": 5.0, "y": 5.0, "width": 80.0},
            {"type": "move", "x": 50.0, "y": 60.0},
            {"type": "enter", "field": "a"},
            {"type": "enter", "field": "b"},
            {"type": "leave", "field": "a"},
            {"type": "drop"}
        ]"#,
    )
    .unwrap();

    assert_eq!(session.replay(&events).unwrap(), 6);
    assert_eq!(session.assignments().assignment_for("b"), Some(1));
}
