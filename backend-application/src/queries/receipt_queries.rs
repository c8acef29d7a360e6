use crate::AppState;
use backend_domain::ProcessedReceipt;

pub async fn list_receipts(state: &AppState) -> Vec<ProcessedReceipt> {
    state.receipt_repo.list().await
}
