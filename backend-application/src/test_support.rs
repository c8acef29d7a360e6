use std::sync::Arc;

use async_trait::async_trait;
use backend_domain::{ProcessedReceipt, Receipt, ReceiptId, ReceiptRepository, RuntimeConfig};
use tokio::sync::RwLock;

use crate::AppState;

#[derive(Default)]
pub struct VecRepository {
    receipts: RwLock<Vec<ProcessedReceipt>>,
}

#[async_trait]
impl ReceiptRepository for VecRepository {
    async fn add(&self, receipt: Receipt) -> ProcessedReceipt {
        let processed = ProcessedReceipt::new(ReceiptId::generate(), receipt);
        self.receipts.write().await.push(processed.clone());
        processed
    }

    async fn find_by_id(&self, id: &str) -> Option<ProcessedReceipt> {
        self.receipts
            .read()
            .await
            .iter()
            .find(|r| r.id.as_str() == id)
            .cloned()
    }

    async fn list(&self) -> Vec<ProcessedReceipt> {
        self.receipts.read().await.clone()
    }

    async fn count(&self) -> usize {
        self.receipts.read().await.len()
    }
}

pub fn test_state() -> AppState {
    let config = RuntimeConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        max_body_bytes: 1024 * 1024,
        request_timeout_seconds: 15,
    };
    AppState::new(config, Arc::new(VecRepository::default()))
}
