//! Recorded input events.
//!
//! A presentation layer (or a test script) can describe an interaction as a
//! list of [`GestureEvent`]s and replay it against a session.

use serde::{Deserialize, Serialize};

use colmap_model::{FieldName, Point};

use crate::error::MappingError;
use crate::session::MappingSession;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureEvent {
    /// Pointer-down on a column, in the source list or on an assigned field.
    Start {
        column: usize,
        #[serde(default)]
        from_field: Option<FieldName>,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        width: f64,
    },
    /// Pointer sample during a drag.
    Move { x: f64, y: f64 },
    /// Pointer entered a field's drop region.
    Enter { field: FieldName },
    /// Pointer left a field's drop region.
    Leave { field: FieldName },
    /// Pointer released.
    Drop,
    /// Gesture aborted.
    Cancel,
    NextPage,
    PreviousPage,
}

impl MappingSession {
    /// Apply one recorded event. Returns whether the session changed
    /// logically (pointer samples never do).
    pub fn apply(&mut self, event: &GestureEvent) -> Result<bool, MappingError> {
        match event {
            GestureEvent::Start {
                column,
                from_field,
                x,
                y,
                width,
            } => {
                self.start_drag(
                    *column,
                    from_field.as_ref().map(FieldName::as_str),
                    Point::new(*x, *y),
                    *width,
                )?;
                Ok(true)
            }
            GestureEvent::Move { x, y } => {
                self.move_pointer(Point::new(*x, *y));
                Ok(false)
            }
            GestureEvent::Enter { field } => self.set_hover(field.as_str(), true),
            GestureEvent::Leave { field } => self.set_hover(field.as_str(), false),
            GestureEvent::Drop => Ok(self.release().is_some()),
            GestureEvent::Cancel => Ok(self.cancel_drag().is_some()),
            GestureEvent::NextPage => Ok(self.next_page()),
            GestureEvent::PreviousPage => Ok(self.previous_page()),
        }
    }

    /// Apply events in order, stopping at the first rejected one.
    pub fn replay<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a GestureEvent>,
    ) -> Result<usize, MappingError> {
        let mut applied = 0;
        for event in events {
            self.apply(event)?;
            applied += 1;
        }
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_parse_from_json() {
        let events: Vec<GestureEvent> = serde_json::from_str(
            r#"[
                {"type": "start", "column": 2, "x": 10.0, "y": 4.5, "width": 90.0},
                {"type": "move", "x": 40.0, "y": 8.0},
                {"type": "enter", "field": "email"},
                {"type": "leave", "field": "email"},
                {"type": "drop"},
                {"type": "next_page"}
            ]"#,
        )
        .expect("parse events");

        assert_eq!(events.len(), 6);
        assert_eq!(
            events[0],
            GestureEvent::Start {
                column: 2,
                from_field: None,
                x: 10.0,
                y: 4.5,
                width: 90.0
            }
        );
        assert_eq!(events[4], GestureEvent::Drop);
    }

    #[test]
    fn blank_field_name_is_rejected() {
        let result = serde_json::from_str::<GestureEvent>(r#"{"type": "enter", "field": ""}"#);
        assert!(result.is_err());
    }
}
