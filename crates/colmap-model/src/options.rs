//! Configuration options for a mapping session.

use serde::{Deserialize, Serialize};

use crate::PREVIEW_ROW_COUNT;

/// Number of source columns shown per page.
pub const PAGE_SIZE: usize = 5;

/// Default Jaro-Winkler similarity a header needs to be matched to a field.
pub const DEFAULT_HEADER_MATCH_THRESHOLD: f32 = 0.95;

/// Options controlling a mapping session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingOptions {
    /// Columns per page in the source list.
    pub page_size: usize,

    /// Sample rows kept per column.
    pub preview_rows: usize,

    /// Seed assignments by matching header cells against field names and labels.
    pub auto_match_headers: bool,

    /// Minimum similarity (0.0 to 1.0) for a header to be matched to a field.
    pub header_match_threshold: f32,
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            preview_rows: PREVIEW_ROW_COUNT,
            auto_match_headers: true,
            header_match_threshold: DEFAULT_HEADER_MATCH_THRESHOLD,
        }
    }
}

impl MappingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size. Zero is bumped to one.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    #[must_use]
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    #[must_use]
    pub fn with_auto_match_headers(mut self, enable: bool) -> Self {
        self.auto_match_headers = enable;
        self
    }

    #[must_use]
    pub fn with_header_match_threshold(mut self, threshold: f32) -> Self {
        self.header_match_threshold = threshold.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let options: MappingOptions = serde_json::from_str(r#"{"page_size": 8}"#).unwrap();
        assert_eq!(options.page_size, 8);
        assert_eq!(options.preview_rows, PREVIEW_ROW_COUNT);
        assert!(options.auto_match_headers);
    }

    #[test]
    fn builder_clamps_values() {
        let options = MappingOptions::new()
            .with_page_size(0)
            .with_header_match_threshold(3.0);
        assert_eq!(options.page_size, 1);
        assert!((options.header_match_threshold - 1.0).abs() < f32::EPSILON);
    }
}
