use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::middleware::ReceiptBodyError;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    PayloadTooLarge(String),
}

impl From<ReceiptBodyError> for HttpError {
    fn from(value: ReceiptBodyError) -> Self {
        match value {
            err @ ReceiptBodyError::TooLarge { .. } => HttpError::PayloadTooLarge(err.to_string()),
            err => HttpError::BadRequest(err.to_string()),
        }
    }
}

impl From<backend_application::AppError> for HttpError {
    fn from(value: backend_application::AppError) -> Self {
        match value {
            backend_application::AppError::Validation(err) => HttpError::BadRequest(err.to_string()),
            err @ backend_application::AppError::NotFound(_) => HttpError::NotFound(err.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, format!("bad request: {}", msg)),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
