pub mod error;
pub mod field;
pub mod ids;
pub mod mapping;
pub mod options;
pub mod preview;

pub use error::{ModelError, Result};
pub use field::{Field, ensure_unique_names};
pub use ids::FieldName;
pub use mapping::FieldAssignments;
pub use options::{DEFAULT_HEADER_MATCH_THRESHOLD, MappingOptions, PAGE_SIZE};
pub use preview::{Column, PREVIEW_ROW_COUNT, Point, Preview};
