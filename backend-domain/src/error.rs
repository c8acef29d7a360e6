use thiserror::Error;

/// Reasons a submitted receipt body is rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("malformed receipt body: {0}")]
    Malformed(String),
    #[error("missing required field '{0}'")]
    MissingField(String),
    #[error("field '{field}' must be {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },
    #[error("field '{field}' is not a valid date: '{value}'")]
    InvalidDate { field: String, value: String },
    #[error("field '{field}' is not a valid time of day: '{value}'")]
    InvalidTime { field: String, value: String },
    #[error("field '{field}' is not a valid decimal amount: '{value}'")]
    InvalidAmount { field: String, value: String },
    #[error("field '{field}' must not be negative: '{value}'")]
    NegativeAmount { field: String, value: String },
    #[error("field '{0}' is assigned by the server and must not be supplied")]
    ClientSuppliedId(String),
}
