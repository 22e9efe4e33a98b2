use std::io;
use thiserror::Error;

/// Error type for invalid trajectory data, insufficient samples and unit problems.
#[derive(Error, Debug)]
pub enum CpError {
    #[error("Invalid input data: {0}")]
    InputData(String),
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("Insufficient sample: {0}")]
    InsufficientSample(String),
    #[error("Wrong input units. Expected {expected}, got {found}")]
    UnitMismatch { expected: String, found: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type for `Result<T, CpError>`.
pub type CpResult<T> = Result<T, CpError>;
