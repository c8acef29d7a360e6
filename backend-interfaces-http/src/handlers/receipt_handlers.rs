use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use tracing::warn;

use backend_application::commands::receipt_commands;
use backend_application::dtos::{PointsResponse, ProcessReceiptResponse};
use backend_application::queries::{points_queries, receipt_queries};
use backend_application::AppState;
use backend_domain::ProcessedReceipt;

use crate::error::HttpError;
use crate::middleware::decode_receipt_body;

pub async fn process_receipt(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Result<Json<ProcessReceiptResponse>, HttpError> {
    let limit = usize::try_from(state.config.max_body_bytes).unwrap_or(usize::MAX);
    let content = decode_receipt_body(&headers, &body, limit).map_err(|err| {
        state.metrics.record_validation_error();
        warn!("failed to decode receipt body: {}", err);
        HttpError::from(err)
    })?;
    let response = receipt_commands::process_receipt_json(&state, &content).await?;
    Ok(Json(response))
}

pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, HttpError> {
    let response = points_queries::get_points(&state, &id).await?;
    Ok(Json(response))
}

pub async fn list_receipts(State(state): State<AppState>) -> Json<Vec<ProcessedReceipt>> {
    Json(receipt_queries::list_receipts(&state).await)
}
