#![allow(dead_code)]

use rand::Rng;
use rand::seq::SliceRandom;
use receipt_points::domain::receipt::{Item, Receipt};
use std::path::Path;

const RETAILERS: &[&str] = &["Target", "M&M Corner Market", "Walgreens", "7-Eleven", "  ", ""];
const DESCRIPTIONS: &[&str] = &[
    "Gatorade",
    "Mountain Dew 12PK",
    "Emils Cheese Pizza",
    "   Klarbrucke Pretzels 12PK  ",
    "abc",
    "",
];

pub fn load_fixture(name: &str) -> serde_json::Value {
    let path = Path::new("tests/fixtures").join(name);
    let content = std::fs::read_to_string(&path).expect("Failed to read fixture");
    serde_json::from_str(&content).expect("Failed to parse fixture")
}

pub fn load_receipt(name: &str) -> Receipt {
    serde_json::from_value(load_fixture(name)).expect("Fixture is not a receipt")
}

fn random_amount<R: Rng>(rng: &mut R) -> String {
    format!("{}.{:02}", rng.gen_range(0..500), rng.gen_range(0..100))
}

/// Builds a well-formed receipt with random contents.
pub fn random_receipt<R: Rng>(rng: &mut R) -> Receipt {
    let items = (0..rng.gen_range(0..8))
        .map(|_| Item {
            short_description: DESCRIPTIONS.choose(rng).unwrap().to_string(),
            price: random_amount(rng),
        })
        .collect();

    Receipt {
        retailer: RETAILERS.choose(rng).unwrap().to_string(),
        purchase_date: format!("2022-{:02}-{:02}", rng.gen_range(1..=12), rng.gen_range(1..=28)),
        purchase_time: format!("{:02}:{:02}", rng.gen_range(0..24), rng.gen_range(0..60)),
        total: random_amount(rng),
        items,
    }
}
