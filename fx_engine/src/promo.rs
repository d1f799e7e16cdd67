//! Promotional banners: savings estimate, coupon state and persuasion copy.

use fx_common::Product;
use serde::Serialize;

use crate::format::{group_decimal, RUPEE};

/// Share of the total quoted as savings against banks and airport counters.
pub const SAVINGS_RATIO: f64 = 0.035;
/// Markup added to the effective rate to simulate a struck-through "old" rate.
pub const OLD_RATE_MARKUP: f64 = 0.10;

/// Estimated savings in whole rupees; shown only when positive.
pub fn compute_savings_estimate(total: f64) -> u64 {
    if !total.is_finite() || total <= 0.0 {
        return 0;
    }
    (total * SAVINGS_RATIO).round() as u64
}

/// Coupon banner state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CouponEligibility {
    /// A coupon code is applied.
    pub applied: bool,
    /// Banner title; empty when no coupon applies.
    pub title: String,
    /// Banner subtitle; empty when no coupon applies.
    pub subtitle: String,
    /// The applied code, for the copy button.
    pub code: String,
}

/// Coupon banner for `coupon_code`; any non-empty code counts as applied.
pub fn compute_coupon_eligibility(coupon_code: &str, cashback_amount: Option<f64>) -> CouponEligibility {
    let code = coupon_code.trim();
    if code.is_empty() {
        return CouponEligibility::default();
    }
    let title = match cashback_amount {
        Some(cashback) if cashback > 0.0 => {
            format!("{RUPEE}{} cashback applied", group_decimal(cashback))
        }
        _ => "Coupon applied".to_string(),
    };
    CouponEligibility {
        applied: true,
        title,
        subtitle: "Discount applied on checkout".to_string(),
        code: code.to_string(),
    }
}

/// Rate shown struck through next to the effective rate while a coupon is applied.
///
/// This is a cosmetic comparison value, not a tracked historical rate.
pub fn strike_through_rate(effective_rate: f64, rate_old_override: Option<f64>) -> f64 {
    match rate_old_override {
        Some(old) if old > 0.0 => old,
        _ => effective_rate + OLD_RATE_MARKUP,
    }
}

/// Minimum-load hint for cards, or the dealer badge for notes.
pub fn persuasion_text(product: Product, currency: &str) -> &'static str {
    match product {
        Product::Note => "RBI Authorized Dealers",
        Product::Card => match currency {
            "USD" => "Start with just 10 USD",
            "AED" => "Start with just 40 AED",
            "THB" => "Start with just 350 THB",
            "EUR" => "Start with just 10 EUR",
            "SGD" => "Start with just 15 SGD",
            "GBP" => "Start with just 10 GBP",
            "HKD" => "Start with just 75 HKD",
            "CHF" => "Start with just 10 CHF",
            "SAR" => "Start with just 40 SAR",
            "CAD" => "Start with just 15 CAD",
            "ZAR" => "Start with just 150 ZAR",
            "AUD" => "Start with just 15 AUD",
            "JPY" => "Start with just 10,000 JPY",
            "NZD" => "Start with just 15 NZD",
            _ => "",
        },
    }
}
