use axum::routing::{get, post};
use axum::Router;

use backend_application::AppState;

use crate::handlers::{ops_handlers, receipt_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops_handlers::root))
        .route("/receipts", get(receipt_handlers::list_receipts))
        .route("/receipts/process", post(receipt_handlers::process_receipt))
        .route("/receipts/:id/points", get(receipt_handlers::get_points))
        .route("/ops/health/live", get(ops_handlers::health_live))
        .route(
            "/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use backend_domain::RuntimeConfig;
    use backend_infrastructure::InMemoryReceiptRepository;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_router() -> Router {
        router_with_body_limit(1024 * 1024)
    }

    fn router_with_body_limit(max_body_bytes: u64) -> Router {
        let config = RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            max_body_bytes,
            request_timeout_seconds: 15,
        };
        build_router(AppState::new(
            config,
            Arc::new(InMemoryReceiptRepository::new()),
        ))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn post_receipt(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).expect("request")
    }

    fn two_item_target() -> Value {
        json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
                {"shortDescription": "Dasani", "price": "1.40"}
            ],
            "total": "35.35"
        })
    }

    #[tokio::test]
    async fn root_returns_welcome_message() {
        let app = test_router();
        let (status, body) = send(&app, get_request("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("Welcome to Receipt Processor"));
    }

    #[tokio::test]
    async fn submit_then_lookup_points() {
        let app = test_router();
        let (status, created) = send(&app, post_receipt(&two_item_target())).await;
        assert_eq!(status, StatusCode::OK);
        let id = created["id"].as_str().expect("id").to_string();
        assert!(!id.is_empty());

        let (status, points) = send(&app, get_request(&format!("/receipts/{}/points", id))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(points, json!({"points": 18}));
    }

    #[tokio::test]
    async fn corner_market_receipt_scores_109() {
        let app = test_router();
        let gatorade = json!({"shortDescription": "Gatorade", "price": "2.25"});
        let body = json!({
            "retailer": "M&M Corner Market",
            "purchaseDate": "2022-03-20",
            "purchaseTime": "14:33",
            "items": [gatorade, gatorade, gatorade, gatorade],
            "total": "9.00"
        });
        let (_, created) = send(&app, post_receipt(&body)).await;
        let id = created["id"].as_str().expect("id").to_string();

        let (_, points) = send(&app, get_request(&format!("/receipts/{}/points", id))).await;
        assert_eq!(points, json!({"points": 109}));
    }

    #[tokio::test]
    async fn unknown_receipt_is_404() {
        let app = test_router();
        let (status, body) = send(&app, get_request("/receipts/nope/points")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Receipt with id nope does not exist."}));
    }

    #[tokio::test]
    async fn invalid_receipts_are_400() {
        let app = test_router();
        let mut body = two_item_target();
        body["purchaseTime"] = json!("quarter past two");
        let (status, error) = send(&app, post_receipt(&body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error["error"]
            .as_str()
            .expect("message")
            .contains("purchaseTime"));

        let request = Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .body(Body::from("{not json"))
            .expect("request");
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, listed) = send(&app, get_request("/receipts")).await;
        assert_eq!(listed, json!([]));
    }

    fn gzip_post(json: &[u8]) -> Request<Body> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(json).expect("write");
        Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .header("Content-Type", "application/json")
            .header("Content-Encoding", "gzip")
            .body(Body::from(encoder.finish().expect("finish")))
            .expect("request")
    }

    #[tokio::test]
    async fn gzip_receipts_are_accepted_within_the_limit() {
        let app = test_router();
        let json = two_item_target().to_string();
        let (status, created) = send(&app, gzip_post(json.as_bytes())).await;
        assert_eq!(status, StatusCode::OK);
        assert!(created["id"].is_string());
    }

    #[tokio::test]
    async fn gzip_receipts_inflating_past_the_limit_are_413() {
        let app = router_with_body_limit(4096);
        let mut padded = two_item_target().to_string().into_bytes();
        padded.resize(padded.len() + 1024 * 1024, b' ');
        let (status, body) = send(&app, gzip_post(&padded)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body, json!({"error": "receipt body exceeds 4096 bytes"}));

        let (_, listed) = send(&app, get_request("/receipts")).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn caller_supplied_id_is_rejected() {
        let app = test_router();
        let mut body = two_item_target();
        body["receipt_id"] = json!("chosen-by-client");
        let (status, _) = send(&app, post_receipt(&body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, get_request("/receipts/chosen-by-client/points")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_returns_receipts_in_insertion_order() {
        let app = test_router();
        let mut second = two_item_target();
        second["retailer"] = json!("Walgreens");
        let (_, first_id) = send(&app, post_receipt(&two_item_target())).await;
        let (_, second_id) = send(&app, post_receipt(&second)).await;

        let (status, listed) = send(&app, get_request("/receipts")).await;
        assert_eq!(status, StatusCode::OK);
        let listed = listed.as_array().expect("array");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0]["id"], first_id["id"]);
        assert_eq!(listed[0]["retailer"], json!("Target"));
        assert_eq!(listed[0]["purchaseDate"], json!("2022-01-01"));
        assert_eq!(listed[0]["purchaseTime"], json!("13:01:00"));
        assert_eq!(listed[0]["total"], json!("35.35"));
        assert_eq!(listed[1]["id"], second_id["id"]);
        assert_eq!(listed[1]["retailer"], json!("Walgreens"));
    }

    #[tokio::test]
    async fn ops_endpoints_report_liveness_and_counters() {
        let app = test_router();
        send(&app, post_receipt(&two_item_target())).await;

        let (status, body) = send(&app, get_request("/ops/health/live")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));

        let response = app
            .clone()
            .oneshot(get_request("/ops/metrics/prometheus"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let text = String::from_utf8(bytes.to_vec()).expect("utf8");
        assert!(text.contains("receipts_processed_total 1\n"));
        assert!(text.contains("receipts_stored 1\n"));
    }
}
