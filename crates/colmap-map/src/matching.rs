//! Header-to-field matching used to seed initial assignments.
//!
//! Uses Jaro-Winkler similarity on normalized text, comparing each header
//! against both the field name and its label and keeping the better score.

use std::collections::BTreeSet;

use rapidfuzz::distance::jaro_winkler;

use colmap_model::{Column, Field, FieldName};

use crate::utils::normalize_text;

/// A proposed field-to-column assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderMatch {
    /// Target field.
    pub field: FieldName,
    /// Column whose header matched.
    pub column: usize,
    /// Similarity score (0.0 to 1.0).
    pub score: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct HeaderMatcher {
    min_score: f32,
}

impl HeaderMatcher {
    pub fn new(min_score: f32) -> Self {
        Self { min_score }
    }

    /// Similarity of a header to a field. Blank headers score zero.
    pub fn score(header: &str, field: &Field) -> f32 {
        let header = normalize_text(header);
        if header.is_empty() {
            return 0.0;
        }
        let by_name = similarity(&header, &normalize_text(field.name.as_str()));
        let by_label = similarity(&header, &normalize_text(&field.label));
        by_name.max(by_label)
    }

    /// One-to-one matches above the threshold.
    ///
    /// Greedy by descending score; ties go to the earlier field, then the
    /// earlier column. Columns without a header never match.
    pub fn suggest_all(&self, columns: &[Column], fields: &[Field]) -> Vec<HeaderMatch> {
        let mut candidates: Vec<HeaderMatch> = Vec::new();
        for field in fields {
            for column in columns {
                let Some(header) = column.header.as_deref() else {
                    continue;
                };
                let score = Self::score(header, field);
                if score >= self.min_score {
                    candidates.push(HeaderMatch {
                        field: field.name.clone(),
                        column: column.index,
                        score,
                    });
                }
            }
        }

        // Stable sort keeps declaration order among equal scores.
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

        let mut taken_fields = BTreeSet::new();
        let mut taken_columns = BTreeSet::new();
        candidates
            .into_iter()
            .filter(|candidate| {
                if taken_fields.contains(&candidate.field) || taken_columns.contains(&candidate.column)
                {
                    return false;
                }
                taken_fields.insert(candidate.field.clone());
                taken_columns.insert(candidate.column);
                true
            })
            .collect()
    }
}

fn similarity(left: &str, right: &str) -> f32 {
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }
    jaro_winkler::similarity(left.chars(), right.chars()) as f32
}
