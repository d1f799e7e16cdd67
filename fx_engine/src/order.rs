//! Amount entry, submit validation and the chat enquiry link.

use fx_common::request::MAX_AMOUNT;
use fx_common::{FxError, Product, Result};

use crate::engine::Quote;
use crate::format::group_indian;

/// Chat endpoint that receives pre-filled order enquiries.
pub const WHATSAPP_BASE: &str = "https://wa.me/919212219191";

/// Amount typed into the amount field: digits only, clamped to `MAX_AMOUNT`.
///
/// Separators and stray characters are ignored; an input without digits
/// means zero.
pub fn parse_amount_input(raw: &str) -> u32 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    digits
        .parse::<u64>()
        .map(|n| n.min(u64::from(MAX_AMOUNT)) as u32)
        .unwrap_or(MAX_AMOUNT)
}

/// Submit guard: an order needs both a rate and a non-zero amount.
pub fn validate_order(quote: &Quote) -> Result<()> {
    match &quote.pricing {
        Some(_) => Ok(()),
        None => Err(FxError::IncompleteOrder),
    }
}

/// Text pre-filled into the chat enquiry.
pub fn enquiry_message(amount: u32, currency: &str, product: Product, city_name: &str) -> String {
    let amount = if amount == 0 {
        String::new()
    } else {
        group_indian(&amount.to_string())
    };
    format!(
        "Hi, I want to buy {amount} {currency} {} in {city_name}. Please share the best rate.",
        product.label()
    )
}

/// Chat deeplink carrying the enquiry message, spaces encoded as `%20`.
pub fn whatsapp_link(message: &str) -> String {
    format!("{WHATSAPP_BASE}?text={}", urlencoding::encode(message))
}
