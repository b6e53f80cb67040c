use thiserror::Error;

pub type AllocResult<T> = Result<T, AllocError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocError {
    #[error("Expected a {expected} dimensional vector, got {found} components")]
    InvalidDimension { expected: usize, found: usize },
    #[error("Configuration has no propellers")]
    EmptyConfiguration,
    #[error("Numerical Error: {0}")]
    Numerical(String),
}
