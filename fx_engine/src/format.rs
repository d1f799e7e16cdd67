//! INR display formatting.
//!
//! Amounts use Indian digit grouping: the last three integer digits form one
//! group and everything to the left is grouped in pairs (`1,23,45,678`).
//! Totals of ten million rupees and above are abbreviated to crores.
use serde::Serialize;

/// Rupee sign prefixed to every INR amount.
pub const RUPEE: &str = "₹";
/// One crore, ten million.
pub const CRORE: f64 = 10_000_000.0;

/// Short and full renderings of an INR value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyDisplay {
    /// What the total field shows; abbreviated for crore-sized values.
    pub display: String,
    /// Full grouped value, used as the tooltip.
    pub full: String,
}

impl CurrencyDisplay {
    /// Whether `display` is the crore abbreviation.
    pub fn is_abbreviated(&self) -> bool {
        self.display != self.full
    }
}

/// Format `value` as `₹` plus grouped digits, at most two fraction digits.
pub fn format_currency_display(value: f64) -> CurrencyDisplay {
    let full = format!("{RUPEE}{}", group_decimal(value));
    if value >= CRORE {
        CurrencyDisplay {
            display: format!("{RUPEE}{:.2} Cr", round_cents(value / CRORE)),
            full,
        }
    } else {
        CurrencyDisplay {
            display: full.clone(),
            full,
        }
    }
}

/// Whole-rupee amount with the rupee sign, e.g. `₹3,045`.
pub fn format_inr_integer(value: u64) -> String {
    format!("{RUPEE}{}", group_indian(&value.to_string()))
}

/// Per-unit rate such as `₹86.70/USD`.
pub fn format_rate(rate: f64, currency: &str) -> String {
    format!("{RUPEE}{:.2}/{currency}", round_cents(rate))
}

/// Round to two decimals with halves going away from zero.
///
/// `{:.2}` alone rounds an exact half to even, so `86.125` would print as
/// `86.12` where the widget shows `86.13`.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Indian-grouped decimal with up to two fraction digits, trailing zeros dropped.
pub fn group_decimal(value: f64) -> String {
    let fixed = format!("{:.2}", round_cents(value.abs()));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };

    let mut out = format!("{sign}{}", group_indian(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Insert en-IN separators into a string of ASCII digits.
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
