//! Delivery estimate and the wording of the delivery banner.
//!
//! Orders placed before the 13:00 cutoff on a working day are delivered the
//! same day. Sunday has no deliveries, and a Saturday order after the cutoff
//! rolls over the weekend to Monday. All times are the caller's local wall
//! clock.
use std::time::Duration;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike, Weekday};
use serde::Serialize;

/// Hour of day (24-hour clock) after which same-day delivery closes.
pub const CUTOFF_HOUR: u32 = 13;
/// How often a long-lived front end should recompute the delivery banner.
pub const DELIVERY_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

const NOTE_SUNDAY: &str = "Sunday delivery not available";
const NOTE_WEEKEND_CUTOFF: &str = "Weekend cutoff";
const NOTE_CUTOFF: &str = "Order before 1 PM for same-day delivery";

/// When an order placed at a given moment will arrive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryEstimate {
    /// Delivery date.
    pub date: NaiveDate,
    /// Delivered on the order date.
    pub is_same_day: bool,
    /// Short explanation of the rule that applied.
    pub note: &'static str,
}

/// Delivery estimate for an order placed at `now`.
pub fn compute_delivery_estimate(now: NaiveDateTime) -> DeliveryEstimate {
    let today = now.date();
    let before_cutoff = now.hour() < CUTOFF_HOUR;

    match now.weekday() {
        Weekday::Sun => DeliveryEstimate {
            date: add_days(today, 1),
            is_same_day: false,
            note: NOTE_SUNDAY,
        },
        Weekday::Sat if !before_cutoff => DeliveryEstimate {
            date: add_days(today, 2),
            is_same_day: false,
            note: NOTE_WEEKEND_CUTOFF,
        },
        _ if before_cutoff => DeliveryEstimate {
            date: today,
            is_same_day: true,
            note: NOTE_CUTOFF,
        },
        _ => DeliveryEstimate {
            date: add_days(today, 1),
            is_same_day: false,
            note: NOTE_CUTOFF,
        },
    }
}

fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(TimeDelta::days(days)).unwrap_or(date)
}

/// Headline and sub-line of the delivery banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryText {
    /// Main line.
    pub headline: String,
    /// Smaller line below it.
    pub detail: String,
    /// Mirrors `DeliveryEstimate::is_same_day`.
    pub is_same_day: bool,
}

/// Banner text for an order placed at `now`.
///
/// `compact` drops the weekday (`12 Mar` instead of `Wed, 12 Mar`) for narrow
/// layouts.
pub fn delivery_text(now: NaiveDateTime, compact: bool) -> DeliveryText {
    let estimate = compute_delivery_estimate(now);
    let pattern = if compact { "%-d %b" } else { "%a, %-d %b" };
    let formatted = estimate.date.format(pattern).to_string();

    if estimate.is_same_day {
        return DeliveryText {
            headline: "Order before 1 PM & get it today!".to_string(),
            detail: format!("Delivery: {formatted} (today)"),
            is_same_day: true,
        };
    }

    let is_tomorrow = estimate.date == add_days(now.date(), 1);
    DeliveryText {
        headline: format!(
            "Delivery by {formatted}{}",
            if is_tomorrow { " (tomorrow)" } else { "" }
        ),
        detail: "Tip: Order before 1 PM for faster delivery".to_string(),
        is_same_day: false,
    }
}
