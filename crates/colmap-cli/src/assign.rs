//! `FIELD=CODE` assignment arguments.

use std::fmt;
use std::str::FromStr;

use colmap_map::{column_code, parse_column_code};
use colmap_model::FieldName;

/// One `--assign` argument: drop the column at `code` onto `field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignSpec {
    pub field: FieldName,
    pub column: usize,
}

impl FromStr for AssignSpec {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (field, code) = value
            .split_once('=')
            .ok_or_else(|| format!("expected FIELD=CODE, got {value:?}"))?;
        let field = FieldName::new(field).map_err(|error| error.to_string())?;
        let column = parse_column_code(code)
            .ok_or_else(|| format!("invalid column code {:?}", code.trim()))?;
        Ok(Self { field, column })
    }
}

impl fmt::Display for AssignSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.field, column_code(self.column))
    }
}
