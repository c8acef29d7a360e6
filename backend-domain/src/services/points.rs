//! Points scoring for receipts.
//!
//! Each rule contributes independently; the score is their sum.

use chrono::{Datelike, NaiveTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::entities::{Receipt, ReceiptItem};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Per-rule contributions for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    pub fn for_receipt(receipt: &Receipt) -> Self {
        Self {
            retailer: retailer_points(&receipt.retailer),
            round_dollar: round_dollar_points(receipt.total),
            quarter_multiple: quarter_multiple_points(receipt.total),
            item_pairs: item_pair_points(receipt.items.len()),
            item_descriptions: receipt
                .items
                .iter()
                .map(description_points)
                .fold(0, u64::saturating_add),
            odd_day: odd_day_points(receipt.purchase_date.day()),
            afternoon: afternoon_points(receipt.purchase_time),
        }
    }

    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

pub fn calculate_points(receipt: &Receipt) -> u64 {
    PointsBreakdown::for_receipt(receipt).total()
}

fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

fn round_dollar_points(total: Decimal) -> u64 {
    if total.fract().is_zero() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

fn quarter_multiple_points(total: Decimal) -> u64 {
    let quarter = Decimal::new(25, 2);
    match total.checked_rem(quarter) {
        Some(rem) if rem.is_zero() => QUARTER_MULTIPLE_POINTS,
        _ => 0,
    }
}

fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

// Only U+0020 is trimmed. An empty trimmed description earns nothing.
fn description_points(item: &ReceiptItem) -> u64 {
    let trimmed_len = item.short_description.trim_matches(' ').chars().count();
    if trimmed_len == 0 || trimmed_len % 3 != 0 {
        return 0;
    }
    // Prices are validated non-negative, so any conversion failure is an
    // overflow and saturates.
    let factor = Decimal::new(2, 1);
    item.price
        .checked_mul(factor)
        .map(|scaled| scaled.ceil())
        .and_then(|points| points.to_u64())
        .unwrap_or(u64::MAX)
}

fn odd_day_points(day: u32) -> u64 {
    if day % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

fn afternoon_points(time: NaiveTime) -> u64 {
    let (Some(start), Some(end)) = (
        NaiveTime::from_hms_opt(14, 0, 0),
        NaiveTime::from_hms_opt(16, 0, 0),
    ) else {
        return 0;
    };
    if time > start && time < end {
        AFTERNOON_POINTS
    } else {
        0
    }
}
