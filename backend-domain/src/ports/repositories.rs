use async_trait::async_trait;

use crate::entities::{ProcessedReceipt, Receipt};

/// Append-only store of processed receipts, kept in insertion order.
#[async_trait]
pub trait ReceiptRepository: Send + Sync {
    /// Assigns a fresh identifier, appends the record and returns it.
    ///
    /// Identifiers are random UUID v4 values from `ReceiptId::generate`;
    /// no collision check is made against stored records.
    async fn add(&self, receipt: Receipt) -> ProcessedReceipt;
    async fn find_by_id(&self, id: &str) -> Option<ProcessedReceipt>;
    async fn list(&self) -> Vec<ProcessedReceipt>;
    async fn count(&self) -> usize;
}
