//! The quote request owned by the front end.
//!
//! Every UI change (tab switch, city pick, amount edit) produces an updated
//! `QuoteRequest`, which is handed to the engine as a whole. The engine keeps
//! no state between calls.
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Largest amount, in foreign currency units, a single order may carry.
pub const MAX_AMOUNT: u32 = 9_999_999;
/// City used when the boot context does not name one.
pub const DEFAULT_CITY: &str = "DEL";
/// Currency used when the boot context does not name one, or names an unpriced one.
pub const DEFAULT_CURRENCY: &str = "USD";
/// Amount pre-filled in the amount field.
pub const DEFAULT_AMOUNT: u32 = 1000;

/// Inputs for one quote computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Selected city code.
    pub city: String,
    /// Selected currency code.
    pub currency: String,
    /// Notes or card.
    pub product: Product,
    /// Foreign currency units, at most `MAX_AMOUNT`.
    pub amount: u32,
    /// Applied coupon code, if any.
    pub coupon_code: Option<String>,
    /// Cashback promised by the coupon, in rupees.
    pub cashback_amount: Option<f64>,
    /// Strike-through rate shown next to the effective rate when a coupon applies.
    pub rate_old_override: Option<f64>,
    /// Caller's local wall-clock time.
    pub now: NaiveDateTime,
}

impl QuoteRequest {
    /// Create a request with default city, currency and amount and no coupon.
    pub fn new(product: Product, now: NaiveDateTime) -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            product,
            amount: DEFAULT_AMOUNT,
            coupon_code: None,
            cashback_amount: None,
            rate_old_override: None,
            now,
        }
    }

    /// Replace the city; codes are stored upper-case.
    pub fn with_city(mut self, city: &str) -> Self {
        self.city = city.trim().to_uppercase();
        self
    }

    /// Replace the currency; codes are stored upper-case.
    pub fn with_currency(mut self, currency: &str) -> Self {
        self.currency = currency.trim().to_uppercase();
        self
    }

    /// Replace the amount, clamped to `MAX_AMOUNT`.
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount.min(MAX_AMOUNT);
        self
    }

    /// Apply a coupon; an empty code removes it.
    pub fn with_coupon(mut self, code: &str, cashback: Option<f64>) -> Self {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            self.coupon_code = None;
            self.cashback_amount = None;
        } else {
            self.coupon_code = Some(code);
            self.cashback_amount = cashback;
        }
        self
    }

    /// Coupon code as a plain string, empty when none is applied.
    pub fn coupon(&self) -> &str {
        self.coupon_code.as_deref().unwrap_or("")
    }
}
