// Raw receipt submission
// Every field stays loosely typed so validation can name exactly what is wrong

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPayload {
    pub retailer: Option<Value>,
    pub purchase_date: Option<Value>,
    pub purchase_time: Option<Value>,
    pub items: Option<Value>,
    pub total: Option<Value>,
    pub id: Option<Value>,
    #[serde(rename = "receipt_id")]
    pub receipt_id: Option<Value>,
}
