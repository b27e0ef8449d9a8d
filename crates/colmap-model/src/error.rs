use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ModelError {
    #[error("invalid field name: {0:?}")]
    InvalidFieldName(String),
    #[error("duplicate field name: {0}")]
    DuplicateFieldName(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
