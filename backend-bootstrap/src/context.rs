use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use backend_application::AppState;
use backend_infrastructure::{AppConfig, InMemoryReceiptRepository};

/// Process-wide state, built once at startup and dropped on shutdown.
pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        Ok(Self::from_config(&config))
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let runtime_config = config.to_runtime_config();
        info!(
            "receipt store initialized (in-memory, max body {} bytes)",
            runtime_config.max_body_bytes
        );
        let state = AppState::new(runtime_config, Arc::new(InMemoryReceiptRepository::new()));
        Self { state }
    }
}
