use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use backend_application::AppState;
use backend_domain::RuntimeConfig;
use backend_interfaces_http::build_router;

use crate::context::AppContext;

/// The receipt router wrapped in the server's transport limits. The body
/// limit here caps raw bytes; the receipt handler caps decoded bytes.
pub fn receipt_service(state: AppState) -> Router {
    let config: &RuntimeConfig = &state.config;
    let body_limit = usize::try_from(config.max_body_bytes).unwrap_or(usize::MAX);
    let request_timeout = Duration::from_secs(config.request_timeout_seconds);

    build_router(state.clone())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}

pub async fn run_standalone() -> Result<()> {
    let AppContext { state } = AppContext::new().await?;

    let addr: SocketAddr = state.config.bind_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(
        "receipt processor listening on {} (body limit {} bytes, timeout {}s)",
        addr, state.config.max_body_bytes, state.config.request_timeout_seconds
    );

    axum::serve(listener, receipt_service(state.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!(
        "receipt processor stopped, discarding {} stored receipts",
        state.receipt_repo.count().await
    );
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("SIGTERM handler unavailable: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(err) = result {
                warn!("ctrl-c handler failed: {}", err);
            }
            info!("ctrl-c received, shutting down");
        }
        _ = terminate => info!("SIGTERM received, shutting down"),
    }
}
