use backend_domain::{ReceiptId, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid receipt: {0}")]
    Validation(#[from] ValidationError),
    #[error("Receipt with id {0} does not exist.")]
    NotFound(ReceiptId),
}
