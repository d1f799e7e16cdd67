//! Quote engine for the forex order widget.
//!
//! Pure, synchronous computations over the reference tables from `fx_common`:
//! - `rate` — per-city rate nudge, effective rate, totals.
//! - `format` — INR grouping and the crore abbreviation.
//! - `delivery` — cutoff-based delivery estimate and banner wording.
//! - `promo` — savings estimate, coupon banner, persuasion copy.
//! - `selector` — serviceable-city filtering and the city/currency pickers.
//! - `order` — amount entry, submit guard, chat enquiry link.
//! - `engine` — `QuoteEngine`, which assembles a full `Quote` per request.
#![warn(missing_docs)]
pub mod delivery;
pub mod engine;
pub mod format;
pub mod order;
pub mod promo;
pub mod rate;
pub mod selector;

pub use delivery::{compute_delivery_estimate, delivery_text, DeliveryEstimate, DeliveryText};
pub use engine::{Pricing, Quote, QuoteEngine};
pub use format::{format_currency_display, CurrencyDisplay};
pub use promo::{compute_coupon_eligibility, compute_savings_estimate, CouponEligibility};
pub use rate::{compute_total, derive_effective_rate};
pub use selector::{filter_serviceable_cities, search_cities, search_currencies};
