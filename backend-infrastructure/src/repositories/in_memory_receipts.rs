use async_trait::async_trait;
use tokio::sync::RwLock;

use backend_domain::{ProcessedReceipt, Receipt, ReceiptId, ReceiptRepository};

/// Process-lifetime receipt store. Appends take the write lock; reads clone
/// out of the read lock.
#[derive(Debug, Default)]
pub struct InMemoryReceiptRepository {
    receipts: RwLock<Vec<ProcessedReceipt>>,
}

impl InMemoryReceiptRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReceiptRepository for InMemoryReceiptRepository {
    async fn add(&self, receipt: Receipt) -> ProcessedReceipt {
        let processed = ProcessedReceipt::new(ReceiptId::generate(), receipt);
        self.receipts.write().await.push(processed.clone());
        processed
    }

    async fn find_by_id(&self, id: &str) -> Option<ProcessedReceipt> {
        let receipts = self.receipts.read().await;
        receipts
            .iter()
            .find(|receipt| receipt.id.as_str() == id)
            .cloned()
    }

    async fn list(&self) -> Vec<ProcessedReceipt> {
        self.receipts.read().await.clone()
    }

    async fn count(&self) -> usize {
        self.receipts.read().await.len()
    }
}
