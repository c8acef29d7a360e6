use axum::extract::State;
use axum::http::{header, HeaderValue};
use axum::response::IntoResponse;
use axum::Json;

use backend_application::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to Receipt Processor";

#[derive(serde::Serialize)]
struct HealthStatus {
    status: &'static str,
}

pub async fn root() -> Json<&'static str> {
    Json(WELCOME_MESSAGE)
}

pub async fn health_live() -> impl IntoResponse {
    Json(HealthStatus { status: "ok" })
}

pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let stored = state.receipt_repo.count().await;
    let body = state.metrics.render_prometheus(stored);
    (
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; version=0.0.4"),
        )],
        body,
    )
}
