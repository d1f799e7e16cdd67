//! End-to-end checks against the sample reference data in `data/`.

use std::collections::HashSet;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use fx_common::request::MAX_AMOUNT;
use fx_common::{FxError, Product, QuoteRequest, ReferenceData, WidgetContext};
use fx_engine::order::validate_order;
use fx_engine::rate::city_rate_offset;
use fx_engine::selector::{CityGroupKind, CurrencyGroupKind};
use fx_engine::{delivery_text, QuoteEngine};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data")
}

fn load() -> ReferenceData {
    ReferenceData::load_dir(data_dir()).expect("sample data loads")
}

// 2025-03-12 is a Wednesday.
fn wednesday(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 12)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn sample_data_loads_all_three_tables() {
    let data = load();
    assert!(data.city("DEL").is_some());
    assert!(data.currency("USD").is_some());
    assert!(data.rates.contains("USD"));
    assert!(!data.rates.contains("KRW"));
}

#[test]
fn delhi_usd_notes_thousand() {
    let data = load();
    let engine = QuoteEngine::new(&data);
    let request = QuoteRequest::new(Product::Note, wednesday(10, 0))
        .with_city("DEL")
        .with_currency("USD")
        .with_amount(1000);

    let quote = engine.quote(&request);

    let base = data.rates.get("USD").unwrap().notes_rate;
    let expected_rate = (base + city_rate_offset("DEL")).max(0.0);
    let expected_total = 1000.0 * expected_rate;
    assert_eq!(quote.effective_rate(), Some(expected_rate));
    assert_eq!(quote.total(), Some(expected_total));
    assert_eq!(quote.savings_amount(), (expected_total * 0.035).round() as u64);
    assert_eq!(quote.display_total().unwrap().display, "₹86,700");
    assert!(quote.is_same_day_delivery());
    assert!(validate_order(&quote).is_ok());

    let json = serde_json::to_value(&quote).unwrap();
    assert_eq!(json["product"], "note");
    assert_eq!(json["pricing"]["savings_amount"], quote.savings_amount());
    assert_eq!(json["delivery"]["date"], "2025-03-12");
}

#[test]
fn maximum_amount_is_shown_in_crores() {
    let data = load();
    let engine = QuoteEngine::new(&data);
    let request = QuoteRequest::new(Product::Card, wednesday(15, 0))
        .with_city("BOM")
        .with_currency("GBP")
        .with_amount(MAX_AMOUNT);
    let quote = engine.quote(&request);
    let shown = quote.display_total().unwrap();
    assert!(shown.display.ends_with(" Cr"), "{}", shown.display);
    assert!(shown.full.starts_with("₹1,1"));
    assert!(!quote.is_same_day_delivery());
}

#[test]
fn zero_amount_cannot_be_booked() {
    let data = load();
    let engine = QuoteEngine::new(&data);
    let request = QuoteRequest::new(Product::Note, wednesday(10, 0)).with_amount(0);
    let quote = engine.quote(&request);
    assert!(!quote.is_quoted());
    assert!(matches!(validate_order(&quote), Err(FxError::IncompleteOrder)));
}

#[test]
fn default_context_renders_demo_coupon() {
    let data = load();
    let engine = QuoteEngine::new(&data);
    let request = WidgetContext::from_query("").initial_request(wednesday(12, 59));
    let quote = engine.quote(&engine.normalize(&request));
    assert!(quote.coupon_applied());
    assert_eq!(quote.coupon_title(), "₹100 cashback applied");
    let pricing = quote.pricing.as_ref().unwrap();
    assert_eq!(pricing.rate_text, "₹86.70/USD");
    assert_eq!(pricing.old_rate_text.as_deref(), Some("₹86.80/USD"));
}

#[test]
fn switching_to_card_moves_away_from_notes_only_city() {
    let data = load();
    let engine = QuoteEngine::new(&data);
    let request = QuoteRequest::new(Product::Card, wednesday(9, 0)).with_city("GOI");
    assert_eq!(engine.normalize(&request).city, "DEL");

    let notes = QuoteRequest::new(Product::Note, wednesday(9, 0)).with_city("GOI");
    assert_eq!(engine.normalize(&notes).city, "GOI");
}

#[test]
fn city_picker_groups_serviceable_cities() {
    let data = load();
    let engine = QuoteEngine::new(&data);

    let groups = engine.city_groups(Product::Note, "");
    assert_eq!(groups[0].kind, CityGroupKind::Top);
    let listed: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.cities.iter().map(|c| c.code.as_str()))
        .collect();
    assert!(listed.contains(&"GOI"));
    // Chandigarh and Lucknow deliver cards only.
    assert!(!listed.contains(&"IXC"));
    assert!(!listed.contains(&"LKO"));

    let card_names: Vec<&str> = engine
        .city_groups(Product::Card, "")
        .into_iter()
        .flat_map(|g| g.cities.into_iter().map(|c| c.name.as_str()))
        .collect();
    assert!(card_names.contains(&"Lucknow"));
    assert!(!card_names.contains(&"Goa"));
    // Indore carries no serviceability flags, so it is offered for neither product.
    assert_eq!(data.city_name("IDR"), "Indore");
    assert!(!card_names.contains(&"Indore"));
    assert!(!listed.contains(&"IDR"));

    let groups = engine.city_groups(Product::Card, "bengaluru");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].cities[0].code, "BLR");
}

#[test]
fn currency_picker_popular_then_alphabetical() {
    let data = load();
    let engine = QuoteEngine::new(&data);
    let groups = engine.currency_groups("");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].kind, CurrencyGroupKind::Popular);
    assert_eq!(groups[1].kind, CurrencyGroupKind::All);

    let popular: Vec<&str> = groups[0].currencies.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(popular, ["USD", "EUR", "GBP", "AED", "SGD", "THB"]);

    let names: Vec<&str> = groups[1].currencies.iter().map(|c| c.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_by_key(|n| n.to_lowercase());
    assert_eq!(names, sorted);

    let mut seen = HashSet::new();
    for currency in groups.iter().flat_map(|g| g.currencies.iter()) {
        assert!(seen.insert(currency.code.as_str()), "duplicate {}", currency.code);
        assert_ne!(currency.code, "KRW");
    }
}

#[test]
fn currency_search_is_conjunctive() {
    let data = load();
    let engine = QuoteEngine::new(&data);
    let groups = engine.currency_groups("us dollar");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].kind, CurrencyGroupKind::SearchResults);
    let results = &groups[0].currencies;
    assert!(results.iter().any(|c| c.code == "USD"));
    for currency in results {
        let hay = currency.search_haystack();
        assert!(hay.contains("us") && hay.contains("dollar"), "{}", currency.code);
    }
    assert!(results.iter().all(|c| c.code != "CAD"));
}

#[test]
fn delivery_banner_refreshes_with_clock() {
    let before = delivery_text(wednesday(12, 59), false);
    let after = delivery_text(wednesday(13, 0), false);
    assert!(before.is_same_day);
    assert_eq!(after.headline, "Delivery by Thu, 13 Mar (tomorrow)");
}
