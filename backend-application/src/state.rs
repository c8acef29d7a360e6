use std::sync::Arc;

use backend_domain::ports::ReceiptRepository;
use backend_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub receipt_repo: Arc<dyn ReceiptRepository>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: RuntimeConfig, receipt_repo: Arc<dyn ReceiptRepository>) -> Self {
        Self {
            config,
            receipt_repo,
            metrics: Arc::new(Metrics::default()),
        }
    }
}
