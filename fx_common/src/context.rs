//! Boot context read once from the embedding page's query string.
//!
//! The context only seeds the first `QuoteRequest`; the engine never looks at
//! it. Unrecognised or malformed values are ignored rather than rejected,
//! matching how the page treats a hand-edited URL.
use chrono::NaiveDateTime;
use log::debug;

use crate::product::ProductMode;
use crate::request::{QuoteRequest, DEFAULT_CITY, DEFAULT_CURRENCY};

/// Coupon applied when the page does not pass one and does not opt out.
pub const DEMO_COUPON: &str = "FOREXCASHBACK";
/// Cashback attached to the demo coupon.
pub const DEMO_CASHBACK: f64 = 100.0;

/// Values extracted from the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetContext {
    /// Which product tabs the page offers.
    pub product_mode: ProductMode,
    /// Initial city code, upper-case.
    pub city: Option<String>,
    /// Initial currency code, upper-case.
    pub currency: Option<String>,
    /// Coupon code, upper-case.
    pub coupon: Option<String>,
    /// Cashback in rupees; `None` when absent or not a positive number.
    pub cashback: Option<f64>,
    /// Strike-through rate override.
    pub rate_old: Option<f64>,
}

impl WidgetContext {
    /// Parse a query string such as `product=card&city=bom&coupon=save`.
    ///
    /// A leading `?` is accepted. When no coupon is given the demo coupon is
    /// applied unless `show_coupon=0`; it carries the demo cashback only when
    /// no cashback parameter was passed at all. A cashback that is present but
    /// not a positive number leaves the coupon with its generic title.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let params: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        let get = |name: &str| param(&params, name);
        let raw_cashback = get("cashback").or_else(|| get("cashback_amount"));

        let product_mode = get("product")
            .and_then(|p| p.parse::<ProductMode>().ok())
            .unwrap_or_default();

        let mut ctx = WidgetContext {
            product_mode,
            city: get("city").map(str::to_uppercase),
            currency: get("currency").map(str::to_uppercase),
            coupon: get("coupon").or_else(|| get("code")).map(str::to_uppercase),
            cashback: raw_cashback.and_then(parse_positive),
            rate_old: get("rate_old").and_then(parse_positive),
        };

        if ctx.coupon.is_none() && get("show_coupon") != Some("0") {
            ctx.coupon = Some(DEMO_COUPON.to_string());
            if raw_cashback.is_none() {
                ctx.cashback = Some(DEMO_CASHBACK);
            }
        }

        debug!("Widget context: {:?}", ctx);
        ctx
    }

    /// First request rendered by the widget.
    pub fn initial_request(&self, now: NaiveDateTime) -> QuoteRequest {
        let mut request = QuoteRequest::new(self.product_mode.initial_product(), now)
            .with_city(self.city.as_deref().unwrap_or(DEFAULT_CITY))
            .with_currency(self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY));
        if let Some(code) = &self.coupon {
            request = request.with_coupon(code, self.cashback);
        }
        request.rate_old_override = self.rate_old;
        request
    }
}

/// First non-empty value of `name`, trimmed.
fn param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.trim())
        .filter(|v| !v.is_empty())
}

fn parse_positive(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}
