use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum HyperError {
    #[error("Index Out of Range: {0}")]
    IndexOutOfRange(String),
    #[error("Invalid Shape: {0}")]
    InvalidShape(String),
}
