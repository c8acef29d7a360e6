use serde::Serialize;

use backend_domain::ReceiptId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessReceiptResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}
