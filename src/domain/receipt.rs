use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A purchase receipt as submitted by a client.
///
/// Amounts, date and time are kept in their wire form; the rule engine
/// parses them when scoring so that each malformed field maps to its own
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub purchase_date: String,
    /// 24-hour time of day, `HH:MM`.
    pub purchase_time: String,
    pub total: String,
    pub items: Vec<Item>,
}

/// A single line on a receipt. Order within the receipt matters for pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// Represents a non-negative currency amount with at most two fraction digits.
///
/// Backed by `rust_decimal::Decimal` so that the divisibility checks used by
/// the scoring rules are exact instead of subject to binary rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Parses the wire form of an amount (`"35.35"`, `"9"`, `"12."`, `".50"`).
    ///
    /// Signs, exponents, whitespace and more than two fraction digits are
    /// rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let (whole, fraction) = raw.split_once('.').unwrap_or((raw, ""));
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if fraction.len() > 2
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let dollars: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().ok()? * 10,
            _ => fraction.parse().ok()?,
        };
        let total_cents = dollars.checked_mul(100)?.checked_add(cents)?;
        Some(Self(Decimal::new(total_cents, 2)))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// True when the amount has no cents.
    pub fn is_round_dollar(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// True when the amount is an exact multiple of `step`. A zero step never divides.
    pub fn is_multiple_of(&self, step: Decimal) -> bool {
        !step.is_zero() && (self.0 % step).is_zero()
    }

    /// Multiplies by `factor` and rounds up to the next whole number.
    pub fn scaled_ceil(&self, factor: Decimal) -> u64 {
        // Non-negative by construction, and bounded by i64::MAX cents.
        (self.0 * factor).ceil().to_u64().unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_parse_valid() {
        assert_eq!(Amount::parse("35.35").unwrap().value(), dec!(35.35));
        assert_eq!(Amount::parse("9").unwrap().value(), dec!(9));
        assert_eq!(Amount::parse("9.5").unwrap().value(), dec!(9.50));
        assert_eq!(Amount::parse("12.").unwrap().value(), dec!(12));
        assert_eq!(Amount::parse(".25").unwrap().value(), dec!(0.25));
        assert_eq!(Amount::parse("0.00").unwrap(), Amount::ZERO);
    }

    #[test]
    fn test_amount_parse_rejects_malformed() {
        for raw in ["", ".", "-1.00", "+1.00", "1.234", "abc", "1e2", " 1.00", "1,00", "1.2.3"] {
            assert!(Amount::parse(raw).is_none(), "expected {raw:?} to be rejected");
        }
    }

    #[test]
    fn test_amount_parse_rejects_overflow() {
        assert!(Amount::parse("99999999999999999999").is_none());
    }

    #[test]
    fn test_round_dollar_is_exact() {
        assert!(Amount::parse("100.00").unwrap().is_round_dollar());
        assert!(Amount::parse("0").unwrap().is_round_dollar());
        assert!(!Amount::parse("35.35").unwrap().is_round_dollar());
        assert!(!Amount::parse("0.01").unwrap().is_round_dollar());
    }

    #[test]
    fn test_multiple_of_quarter_is_exact() {
        let quarter = dec!(0.25);
        assert!(Amount::parse("100.00").unwrap().is_multiple_of(quarter));
        assert!(Amount::parse("9.75").unwrap().is_multiple_of(quarter));
        // 0.1 + 0.2 style values that drift in binary floating point.
        assert!(!Amount::parse("0.30").unwrap().is_multiple_of(quarter));
        assert!(!Amount::parse("35.35").unwrap().is_multiple_of(quarter));
        assert!(!Amount::parse("1.00").unwrap().is_multiple_of(Decimal::ZERO));
    }

    #[test]
    fn test_scaled_ceil() {
        let fifth = dec!(0.2);
        assert_eq!(Amount::parse("12.25").unwrap().scaled_ceil(fifth), 3);
        assert_eq!(Amount::parse("12.00").unwrap().scaled_ceil(fifth), 3);
        assert_eq!(Amount::parse("10.00").unwrap().scaled_ceil(fifth), 2);
        assert_eq!(Amount::parse("0.01").unwrap().scaled_ceil(fifth), 1);
        assert_eq!(Amount::ZERO.scaled_ceil(fifth), 0);
    }

    #[test]
    fn test_receipt_deserialization_uses_camel_case() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "total": "1.25",
            "items": [{ "shortDescription": "Pepsi - 12-oz", "price": "1.25" }]
        }"#;
        let receipt: Receipt = serde_json::from_str(json).expect("Failed to deserialize receipt");

        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.items[0].short_description, "Pepsi - 12-oz");
    }

    #[test]
    fn test_receipt_deserialization_requires_items() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "total": "1.25"
        }"#;
        assert!(serde_json::from_str::<Receipt>(json).is_err());
    }
}
