use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AffineError {
    #[error("Invalid dimension: expected {expected} values, got {got}")]
    InvalidDimension { expected: usize, got: usize },

    #[error("Singular matrix, determinant:{determinant}")]
    SingularMatrix { determinant: f32 },

    #[error("Parse error:'{0}'")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, AffineError>;
