//! Column-to-field assignment engine.
//!
//! Maps the columns of a tabular preview onto named target fields through
//! drag-and-drop gestures, keeping the mapping one-to-one and validating that
//! every required field is assigned before the result is handed over.
//!
//! # Example
//!
//! ```ignore
//! use colmap_map::{Callbacks, MappingSession};
//!
//! let mut session = MappingSession::new(&preview, fields, MappingOptions::default())?;
//!
//! // Pick up column B from the source list and drop it on "email"
//! session.start_drag(1, None, pointer, width)?;
//! session.set_hover("email", true)?;
//! session.release();
//!
//! let mut handler = Callbacks::new(|assignments| save(assignments), || {});
//! session.submit(&mut handler)?;
//! ```

#![deny(unsafe_code)]

pub mod addressing;
pub mod columns;
pub mod drag;
mod error;
pub mod gesture;
pub mod hover;
pub mod matching;
pub mod paginator;
pub mod session;
pub mod store;
pub mod utils;
pub mod validation;

pub use addressing::{column_code, parse_column_code, slot_code};
pub use columns::derive_columns;
pub use drag::{DragController, DragPhase, DragState, DropIntent};
pub use error::MappingError;
pub use gesture::GestureEvent;
pub use hover::HoverSignal;
pub use matching::{HeaderMatch, HeaderMatcher};
pub use paginator::{PageSlot, Paginator};
pub use session::{
    Callbacks, CompletionHandler, FieldStatus, MappingSession, MappingSummary, SourceSlot,
};
pub use store::AssignmentStore;
pub use validation::{REQUIRED_FIELDS_MESSAGE, TouchedSet, ValidationEngine, ValidationError};
