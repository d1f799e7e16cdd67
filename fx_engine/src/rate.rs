//! Per-city rate derivation.
//!
//! The rate table carries one base entry per currency. Each city gets a small,
//! deterministic nudge on top of it so that neighbouring cities show slightly
//! different prices without a second dataset. The nudge depends only on the
//! city code string.

use fx_common::model::{RateEntry, RatesTable};
use fx_common::request::DEFAULT_CURRENCY;
use fx_common::Product;
use serde::Serialize;

/// Step between adjacent nudge buckets, in INR.
pub const CITY_OFFSET_STEP: f64 = 0.05;
/// Number of nudge buckets; bucket `NUDGE_BUCKETS / 2` is the zero offset.
const NUDGE_BUCKETS: u32 = 9;

/// Stable 32-bit polynomial hash of a city code.
///
/// `h = h * 31 + unit` over the UTF-16 code units with wrapping arithmetic,
/// then the absolute value.
pub fn city_hash(city: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in city.encode_utf16() {
        h = h
            .wrapping_shl(5)
            .wrapping_sub(h)
            .wrapping_add(i32::from(unit));
    }
    h.unsigned_abs()
}

/// Rate nudge for `city`, always within `[-0.20, +0.20]`.
pub fn city_rate_offset(city: &str) -> f64 {
    let bucket = (city_hash(city) % NUDGE_BUCKETS) as i32 - (NUDGE_BUCKETS / 2) as i32;
    f64::from(bucket) * CITY_OFFSET_STEP
}

/// Card and notes rates after the city nudge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdjustedRates {
    /// INR per unit on a forex card, never negative.
    pub card_rate: f64,
    /// INR per unit of notes, never negative.
    pub notes_rate: f64,
}

impl AdjustedRates {
    /// Rate for the selected product.
    pub fn for_product(&self, product: Product) -> f64 {
        match product {
            Product::Card => self.card_rate,
            Product::Note => self.notes_rate,
        }
    }
}

/// Apply the city nudge to a base entry, clamping both rates at zero.
pub fn adjust_rate_entry(entry: &RateEntry, city: &str) -> AdjustedRates {
    let offset = city_rate_offset(city);
    AdjustedRates {
        card_rate: (entry.card_rate + offset).max(0.0),
        notes_rate: (entry.notes_rate + offset).max(0.0),
    }
}

/// Both adjusted rates for `currency` in `city`, or `None` if the currency is unpriced.
pub fn adjusted_rate_entry(rates: &RatesTable, currency: &str, city: &str) -> Option<AdjustedRates> {
    rates.get(currency).map(|entry| adjust_rate_entry(entry, city))
}

/// Effective INR-per-unit rate for the product, or `None` for an unknown currency.
pub fn derive_effective_rate(
    rates: &RatesTable,
    currency: &str,
    city: &str,
    product: Product,
) -> Option<f64> {
    adjusted_rate_entry(rates, currency, city).map(|r| r.for_product(product))
}

/// `amount * rate`, or `None` for the unquoted state (zero amount or no usable rate).
pub fn compute_total(amount: u32, effective_rate: f64) -> Option<f64> {
    if amount == 0 || effective_rate <= 0.0 {
        return None;
    }
    Some(f64::from(amount) * effective_rate)
}

/// Currency to price: `currency` if the table has it, otherwise the default.
pub fn resolve_currency<'a>(rates: &RatesTable, currency: &'a str) -> &'a str {
    if rates.contains(currency) {
        currency
    } else {
        DEFAULT_CURRENCY
    }
}
