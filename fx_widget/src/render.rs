//! Terminal rendering of engine output.
//!
//! Everything here only formats values the engine already computed.
use fx_common::{Product, QuoteRequest};
use fx_engine::format::{format_inr_integer, group_indian};
use fx_engine::selector::{CityGroup, CurrencyGroup};
use fx_engine::{delivery_text, Quote, QuoteEngine};

/// Print the full widget state for `request`.
pub fn print_quote(engine: &QuoteEngine, request: &QuoteRequest, quote: &Quote, compact: bool) {
    let data = engine.data();
    let tat = delivery_text(request.now, compact);

    println!(
        "{} | {} | {}",
        data.city_name(&quote.city),
        quote.product.label(),
        quote.currency
    );
    println!("  {}", tat.headline);
    println!("  {}", tat.detail);
    println!(
        "Amount:  {} {}",
        group_indian(&quote.amount.to_string()),
        quote.currency
    );

    match &quote.pricing {
        Some(pricing) => {
            match &pricing.old_rate_text {
                Some(old) => println!("Rate:    {} (was {})", pricing.rate_text, old),
                None => println!("Rate:    {}", pricing.rate_text),
            }
            if pricing.display_total.is_abbreviated() {
                println!(
                    "Total:   {} ({})",
                    pricing.display_total.display, pricing.display_total.full
                );
            } else {
                println!("Total:   {}", pricing.display_total.display);
            }
            println!("         Best Rate Guarantee: 2X cashback on the difference");
        }
        None => println!("Total:   select a currency and enter an amount"),
    }

    if quote.coupon.applied {
        println!(
            "Coupon:  {} [{}] {}",
            quote.coupon.title, quote.coupon.code, quote.coupon.subtitle
        );
    }
    if quote.savings_amount() > 0 {
        println!(
            "Savings: you save up to {} vs other banks & airports",
            format_inr_integer(quote.savings_amount())
        );
    }
    if !quote.persuasion.is_empty() {
        println!("         {}", quote.persuasion);
    }
    println!("Enquire: {}", engine.enquiry_link(request));
}

/// Print the city picker for `product`.
pub fn print_city_groups(product: Product, groups: &[CityGroup]) {
    if groups.is_empty() {
        println!("No city found for {}.", product.label());
        return;
    }
    for group in groups {
        println!("{}", group.kind);
        for city in &group.cities {
            println!("  {:<4} {}", city.code, city.name);
        }
    }
}

/// Print the currency picker, with each currency's effective rate in `city`.
pub fn print_currency_groups(
    engine: &QuoteEngine,
    city: &str,
    product: Product,
    groups: &[CurrencyGroup],
) {
    if groups.is_empty() {
        println!("No currency found.");
        return;
    }
    for group in groups {
        println!("{}", group.kind);
        for currency in &group.currencies {
            let rate = fx_engine::derive_effective_rate(
                &engine.data().rates,
                &currency.code,
                city,
                product,
            )
            .map(|r| fx_engine::format::format_rate(r, &currency.code))
            .unwrap_or_default();
            let right = currency.right_label.as_deref().unwrap_or("");
            println!("  {:<4} {:<24} {:>14} {}", currency.code, currency.name, rate, right);
        }
    }
}
