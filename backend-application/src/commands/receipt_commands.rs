use tracing::{info, warn};

use backend_domain::{parse_receipt_payload, validate_receipt, ReceiptPayload, ValidationError};

use crate::dtos::ProcessReceiptResponse;
use crate::{AppError, AppState};

/// Decode a JSON body and process it as a receipt submission.
pub async fn process_receipt_json(
    state: &AppState,
    content: &str,
) -> Result<ProcessReceiptResponse, AppError> {
    let payload = parse_receipt_payload(content).map_err(|err| reject(state, err))?;
    process_receipt(state, payload).await
}

pub async fn process_receipt(
    state: &AppState,
    payload: ReceiptPayload,
) -> Result<ProcessReceiptResponse, AppError> {
    let receipt = validate_receipt(payload).map_err(|err| reject(state, err))?;
    let stored = state.receipt_repo.add(receipt).await;
    state.metrics.record_processed();
    info!(
        "processed receipt {} from '{}' ({} items)",
        stored.id,
        stored.receipt.retailer,
        stored.receipt.items.len()
    );
    Ok(ProcessReceiptResponse { id: stored.id })
}

fn reject(state: &AppState, err: ValidationError) -> AppError {
    state.metrics.record_validation_error();
    warn!("rejected receipt: {}", err);
    AppError::Validation(err)
}
