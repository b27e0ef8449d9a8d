//! Drop-target tracking from hover enter/leave signals.
//!
//! Hit regions of neighbouring fields overlap while the pointer moves fast,
//! so "enter" for the next field can arrive before "leave" for the previous
//! one. The last entered field wins, and a leave only clears the target if it
//! names the field that is currently the target.

use colmap_model::FieldName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverSignal {
    Enter(FieldName),
    Leave(FieldName),
}

impl HoverSignal {
    pub fn new(field: FieldName, is_entering: bool) -> Self {
        if is_entering {
            Self::Enter(field)
        } else {
            Self::Leave(field)
        }
    }

    /// Apply the signal to the current drop target. Returns true if the
    /// target changed.
    pub fn apply(self, target: &mut Option<FieldName>) -> bool {
        match self {
            Self::Enter(field) => {
                if target.as_ref() == Some(&field) {
                    return false;
                }
                *target = Some(field);
                true
            }
            Self::Leave(field) => {
                if target.as_ref() != Some(&field) {
                    return false;
                }
                *target = None;
                true
            }
        }
    }
}
