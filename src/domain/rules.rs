//! The points rule engine.
//!
//! Scoring is a pure function of the receipt: every field is parsed up
//! front, then each rule contributes independently to the total.

use super::receipt::{Amount, Item, Receipt};
use crate::error::{ReceiptError, Result};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub type Points = u64;

const ROUND_TOTAL_POINTS: Points = 50;
const QUARTER_TOTAL_POINTS: Points = 25;
const ITEM_PAIR_POINTS: Points = 5;
const ODD_DAY_POINTS: Points = 6;
const AFTERNOON_POINTS: Points = 10;

const QUARTER: Decimal = dec!(0.25);
const DESCRIPTION_PRICE_FACTOR: Decimal = dec!(0.2);

/// Afternoon window bounds in minutes after midnight, both exclusive.
const AFTERNOON_START: u32 = 14 * 60;
const AFTERNOON_END: u32 = 16 * 60;

/// Per-rule contributions to a receipt's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer: Points,
    pub round_total: Points,
    pub quarter_total: Points,
    pub item_pairs: Points,
    pub descriptions: Points,
    pub odd_day: Points,
    pub afternoon: Points,
}

impl PointsBreakdown {
    /// Sum of all contributions, or `PointsOverflow` if it does not fit in `Points`.
    pub fn total(&self) -> Result<Points> {
        [
            self.retailer,
            self.round_total,
            self.quarter_total,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .try_fold(0, Points::checked_add)
        .ok_or(ReceiptError::PointsOverflow)
    }
}

/// Computes the points awarded to `receipt`.
pub fn score(receipt: &Receipt) -> Result<Points> {
    breakdown(receipt)?.total()
}

/// Computes the contribution of every rule for `receipt`.
///
/// Fails on the first malformed field, checked in the order total, item
/// prices, purchase date, purchase time. No partial result is returned.
pub fn breakdown(receipt: &Receipt) -> Result<PointsBreakdown> {
    let total = Amount::parse(&receipt.total).ok_or(ReceiptError::InvalidTotal)?;
    let prices = receipt
        .items
        .iter()
        .map(|item| Amount::parse(&item.price).ok_or(ReceiptError::InvalidItemPrice))
        .collect::<Result<Vec<_>>>()?;
    let date = parse_date(&receipt.purchase_date)?;
    let time = parse_time(&receipt.purchase_time)?;

    let descriptions = receipt
        .items
        .iter()
        .zip(prices)
        .map(|(item, price)| description_points(item, price))
        .try_fold(0, Points::checked_add)
        .ok_or(ReceiptError::PointsOverflow)?;

    let breakdown = PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_total: round_total_points(total),
        quarter_total: quarter_total_points(total),
        item_pairs: item_pair_points(receipt.items.len()),
        descriptions,
        odd_day: odd_day_points(date),
        afternoon: afternoon_points(time),
    };

    tracing::debug!(?breakdown, "scored receipt");
    Ok(breakdown)
}

/// True when `raw` is exactly `shape`, with `9` standing for any ASCII digit.
fn has_shape(raw: &str, shape: &str) -> bool {
    raw.len() == shape.len()
        && raw.bytes().zip(shape.bytes()).all(|(b, s)| match s {
            b'9' => b.is_ascii_digit(),
            _ => b == s,
        })
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    if !has_shape(raw, "9999-99-99") {
        return Err(ReceiptError::InvalidDate);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ReceiptError::InvalidDate)
}

fn parse_time(raw: &str) -> Result<NaiveTime> {
    if !has_shape(raw, "99:99") {
        return Err(ReceiptError::InvalidTime);
    }
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| ReceiptError::InvalidTime)
}

/// One point per ASCII letter or digit in the retailer name.
fn retailer_points(retailer: &str) -> Points {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as Points
}

fn round_total_points(total: Amount) -> Points {
    if total.is_round_dollar() {
        ROUND_TOTAL_POINTS
    } else {
        0
    }
}

fn quarter_total_points(total: Amount) -> Points {
    if total.is_multiple_of(QUARTER) {
        QUARTER_TOTAL_POINTS
    } else {
        0
    }
}

fn item_pair_points(item_count: usize) -> Points {
    (item_count / 2) as Points * ITEM_PAIR_POINTS
}

/// `ceil(price * 0.2)` when the trimmed description length is a multiple of 3.
///
/// Length is counted in UTF-8 bytes; an empty description qualifies.
fn description_points(item: &Item, price: Amount) -> Points {
    if item.short_description.trim().len() % 3 == 0 {
        price.scaled_ceil(DESCRIPTION_PRICE_FACTOR)
    } else {
        0
    }
}

fn odd_day_points(date: NaiveDate) -> Points {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

fn afternoon_points(time: NaiveTime) -> Points {
    let minutes = time.hour() * 60 + time.minute();
    if minutes > AFTERNOON_START && minutes < AFTERNOON_END {
        AFTERNOON_POINTS
    } else {
        0
    }
}
