//! Quote assembly.
//!
//! `QuoteEngine` borrows the reference tables and turns a `QuoteRequest` into
//! everything the widget shows for it. It keeps no state of its own: the same
//! request against the same tables always yields the same `Quote`.
use fx_common::model::ReferenceData;
use fx_common::{Product, QuoteRequest};
use log::debug;
use serde::Serialize;

use crate::delivery::{compute_delivery_estimate, DeliveryEstimate};
use crate::format::{format_currency_display, format_rate, CurrencyDisplay};
use crate::order::{enquiry_message, whatsapp_link};
use crate::promo::{
    compute_coupon_eligibility, compute_savings_estimate, persuasion_text, strike_through_rate,
    CouponEligibility,
};
use crate::rate::{compute_total, derive_effective_rate, resolve_currency};
use crate::selector::{ensure_serviceable_city, search_cities, search_currencies};
use crate::selector::{filter_serviceable_cities, CityGroup, CurrencyGroup};

/// Priced part of a quote; absent while the quote is unquoted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pricing {
    /// INR per unit after the city nudge.
    pub effective_rate: f64,
    /// `amount * effective_rate`.
    pub total: f64,
    /// Rendered total.
    pub display_total: CurrencyDisplay,
    /// Effective rate as `₹86.70/USD`.
    pub rate_text: String,
    /// Struck-through comparison rate, present while a coupon applies.
    pub old_rate_text: Option<String>,
    /// Estimated savings in whole rupees.
    pub savings_amount: u64,
}

/// Everything the widget renders for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// City the quote was priced for.
    pub city: String,
    /// Currency the quote was priced for.
    pub currency: String,
    /// Notes or card.
    pub product: Product,
    /// Foreign currency units.
    pub amount: u32,
    /// `None` when the currency is unpriced or the amount is zero.
    pub pricing: Option<Pricing>,
    /// Delivery date for an order placed at the request time.
    pub delivery: DeliveryEstimate,
    /// Shown whether or not the quote is priced.
    pub coupon: CouponEligibility,
    /// Trust badge text below the submit button.
    pub persuasion: &'static str,
}

impl Quote {
    #[allow(missing_docs)]
    pub fn effective_rate(&self) -> Option<f64> {
        self.pricing.as_ref().map(|p| p.effective_rate)
    }

    #[allow(missing_docs)]
    pub fn total(&self) -> Option<f64> {
        self.pricing.as_ref().map(|p| p.total)
    }

    #[allow(missing_docs)]
    pub fn display_total(&self) -> Option<&CurrencyDisplay> {
        self.pricing.as_ref().map(|p| &p.display_total)
    }

    #[allow(missing_docs)]
    pub fn is_same_day_delivery(&self) -> bool {
        self.delivery.is_same_day
    }

    /// Savings to advertise; zero hides the banner.
    pub fn savings_amount(&self) -> u64 {
        self.pricing.as_ref().map_or(0, |p| p.savings_amount)
    }

    #[allow(missing_docs)]
    pub fn coupon_applied(&self) -> bool {
        self.coupon.applied
    }

    #[allow(missing_docs)]
    pub fn coupon_title(&self) -> &str {
        &self.coupon.title
    }

    /// Whether there is a total to show.
    pub fn is_quoted(&self) -> bool {
        self.pricing.is_some()
    }
}

/// Stateless quote computation over borrowed reference tables.
#[derive(Debug, Clone, Copy)]
pub struct QuoteEngine<'a> {
    data: &'a ReferenceData,
}

impl<'a> QuoteEngine<'a> {
    /// Create an engine over the loaded tables.
    pub fn new(data: &'a ReferenceData) -> Self {
        Self { data }
    }

    /// Tables this engine reads from.
    pub fn data(&self) -> &'a ReferenceData {
        self.data
    }

    /// Apply the selection fallbacks the widget performs before every render.
    ///
    /// A city that does not deliver the selected product is replaced by the
    /// first serviceable top city (or the first serviceable city), and an
    /// unpriced currency is replaced by the default currency.
    pub fn normalize(&self, request: &QuoteRequest) -> QuoteRequest {
        let mut request = request.clone();
        if let Some(city) = ensure_serviceable_city(&self.data.cities, request.product, &request.city) {
            debug!(
                "City {} does not deliver {}, switching to {}",
                request.city, request.product, city
            );
            request.city = city.to_string();
        }
        let currency = resolve_currency(&self.data.rates, &request.currency).to_string();
        if currency != request.currency {
            debug!("Currency {} has no rate, switching to {}", request.currency, currency);
            request.currency = currency;
        }
        request
    }

    /// Compute the full quote for `request` as given.
    pub fn quote(&self, request: &QuoteRequest) -> Quote {
        let coupon = compute_coupon_eligibility(request.coupon(), request.cashback_amount);

        let pricing = derive_effective_rate(
            &self.data.rates,
            &request.currency,
            &request.city,
            request.product,
        )
        .and_then(|rate| compute_total(request.amount, rate).map(|total| (rate, total)))
        .map(|(rate, total)| Pricing {
            effective_rate: rate,
            total,
            display_total: format_currency_display(total),
            rate_text: format_rate(rate, &request.currency),
            old_rate_text: coupon.applied.then(|| {
                format_rate(
                    strike_through_rate(rate, request.rate_old_override),
                    &request.currency,
                )
            }),
            savings_amount: compute_savings_estimate(total),
        });

        debug!(
            "Quote {} {} {} in {}: {:?}",
            request.amount,
            request.currency,
            request.product,
            request.city,
            pricing.as_ref().map(|p| p.total)
        );

        Quote {
            city: request.city.clone(),
            currency: request.currency.clone(),
            product: request.product,
            amount: request.amount,
            pricing,
            delivery: compute_delivery_estimate(request.now),
            coupon,
            persuasion: persuasion_text(request.product, &request.currency),
        }
    }

    /// Grouped city picker contents for `product`, filtered by `query`.
    pub fn city_groups(&self, product: Product, query: &str) -> Vec<CityGroup<'a>> {
        let serviceable = filter_serviceable_cities(&self.data.cities, product);
        search_cities(serviceable, query)
    }

    /// Grouped currency picker contents, filtered by `query`.
    pub fn currency_groups(&self, query: &str) -> Vec<CurrencyGroup<'a>> {
        search_currencies(&self.data.currencies, &self.data.rates, query)
    }

    /// Chat deeplink for the request.
    pub fn enquiry_link(&self, request: &QuoteRequest) -> String {
        let message = enquiry_message(
            request.amount,
            &request.currency,
            request.product,
            self.data.city_name(&request.city),
        );
        whatsapp_link(&message)
    }
}
