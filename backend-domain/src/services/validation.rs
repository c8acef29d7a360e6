//! Explicit validation of submitted receipts.
//!
//! | field                       | accepted                                          |
//! |-----------------------------|---------------------------------------------------|
//! | `retailer`                  | string, may be empty                              |
//! | `purchaseDate`              | `YYYY-MM-DD`, or an ISO-8601 date-time            |
//! | `purchaseTime`              | `HH:MM`, `HH:MM:SS`, `HH:MM:SS.fff`               |
//! | `items`                     | array of objects, may be empty                    |
//! | `items[i].shortDescription` | string, may be empty                              |
//! | `items[i].price`            | decimal string or JSON number, `>= 0`             |
//! | `total`                     | decimal string or JSON number, `>= 0`             |
//! | `id`, `receipt_id`          | must be absent                                    |
//!
//! The body itself must be a JSON object. Amounts may only contain digits,
//! one decimal point, a sign and an exponent (`1_000` is rejected).
//! `null` counts as missing. Unknown fields are ignored.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::entities::{Receipt, ReceiptItem, ReceiptPayload};
use crate::error::ValidationError;

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

/// Decode a JSON body into a payload. Shape errors become `Malformed`.
pub fn parse_receipt_payload(content: &str) -> Result<ReceiptPayload, ValidationError> {
    let value: Value =
        serde_json::from_str(content).map_err(|err| ValidationError::Malformed(err.to_string()))?;
    if !value.is_object() {
        return Err(ValidationError::Malformed(
            "expected a JSON object".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|err| ValidationError::Malformed(err.to_string()))
}

pub fn validate_receipt(payload: ReceiptPayload) -> Result<Receipt, ValidationError> {
    if present(payload.id).is_some() {
        return Err(ValidationError::ClientSuppliedId("id".to_string()));
    }
    if present(payload.receipt_id).is_some() {
        return Err(ValidationError::ClientSuppliedId("receipt_id".to_string()));
    }

    let retailer = require_string("retailer", payload.retailer)?;
    let purchase_date = parse_date("purchaseDate", payload.purchase_date)?;
    let purchase_time = parse_time("purchaseTime", payload.purchase_time)?;
    let items = parse_items(payload.items)?;
    let total = parse_amount("total", payload.total)?;

    Ok(Receipt {
        retailer,
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

fn present(value: Option<Value>) -> Option<Value> {
    value.filter(|v| !v.is_null())
}

fn require(field: &str, value: Option<Value>) -> Result<Value, ValidationError> {
    present(value).ok_or_else(|| ValidationError::MissingField(field.to_string()))
}

fn require_string(field: &str, value: Option<Value>) -> Result<String, ValidationError> {
    match require(field, value)? {
        Value::String(text) => Ok(text),
        _ => Err(ValidationError::InvalidType {
            field: field.to_string(),
            expected: "a string",
        }),
    }
}

fn parse_date(field: &str, value: Option<Value>) -> Result<NaiveDate, ValidationError> {
    let raw = require_string(field, value)?;
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .map_err(|_| ValidationError::InvalidDate {
            field: field.to_string(),
            value: raw.clone(),
        })
}

fn parse_time(field: &str, value: Option<Value>) -> Result<NaiveTime, ValidationError> {
    let raw = require_string(field, value)?;
    let trimmed = raw.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| ValidationError::InvalidTime {
            field: field.to_string(),
            value: raw.clone(),
        })
}

fn parse_amount(field: &str, value: Option<Value>) -> Result<Decimal, ValidationError> {
    let raw = match require(field, value)? {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        _ => {
            return Err(ValidationError::InvalidType {
                field: field.to_string(),
                expected: "a decimal string or number",
            })
        }
    };
    let invalid = || ValidationError::InvalidAmount {
        field: field.to_string(),
        value: raw.clone(),
    };
    if !is_decimal_literal(&raw) {
        return Err(invalid());
    }
    let amount = Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|_| invalid())?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::NegativeAmount {
            field: field.to_string(),
            value: raw,
        });
    }
    Ok(amount)
}

fn is_decimal_literal(raw: &str) -> bool {
    !raw.is_empty()
        && raw
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
}

fn parse_items(value: Option<Value>) -> Result<Vec<ReceiptItem>, ValidationError> {
    let Value::Array(entries) = require("items", value)? else {
        return Err(ValidationError::InvalidType {
            field: "items".to_string(),
            expected: "an array",
        });
    };
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| parse_item(index, entry))
        .collect()
}

fn parse_item(index: usize, entry: Value) -> Result<ReceiptItem, ValidationError> {
    let Value::Object(mut fields) = entry else {
        return Err(ValidationError::InvalidType {
            field: format!("items[{}]", index),
            expected: "an object",
        });
    };
    let short_description = require_string(
        &format!("items[{}].shortDescription", index),
        take(&mut fields, "shortDescription"),
    )?;
    let price = parse_amount(&format!("items[{}].price", index), take(&mut fields, "price"))?;
    Ok(ReceiptItem {
        short_description,
        price,
    })
}

fn take(fields: &mut Map<String, Value>, key: &str) -> Option<Value> {
    fields.remove(key)
}
