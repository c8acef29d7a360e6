// Receipt entities
// A validated purchase record and its stored, identified form

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::value_objects::ReceiptId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    pub short_description: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<ReceiptItem>,
    pub total: Decimal,
}

/// A receipt as held by the store. Never mutated after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedReceipt {
    pub id: ReceiptId,
    #[serde(flatten)]
    pub receipt: Receipt,
}

impl ProcessedReceipt {
    pub fn new(id: ReceiptId, receipt: Receipt) -> Self {
        Self { id, receipt }
    }
}
