use thiserror::Error;

pub type SelectionResult<T> = Result<T, SelectionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no car with id '{id}' in the pool")]
    NotFound { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color '{value}'")]
    InvalidHex { value: String },

    #[error("color palette is empty")]
    EmptyPalette,
}
