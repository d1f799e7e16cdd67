//! City and currency selector lists.
//!
//! Both pickers show grouped lists with a search box. Groups that end up
//! empty after filtering are omitted so the caller can render whatever it
//! gets back.
use std::collections::HashSet;

use fx_common::model::{City, Currency, RatesTable};
use fx_common::Product;
use serde::Serialize;
use strum_macros::Display;

/// Heading of a city list group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[allow(missing_docs)]
pub enum CityGroupKind {
    #[strum(serialize = "Top Cities")]
    Top,
    #[strum(serialize = "Other Cities")]
    Other,
}

/// One group of the city list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityGroup<'a> {
    /// Group heading.
    pub kind: CityGroupKind,
    /// Matching cities in input order.
    pub cities: Vec<&'a City>,
}

/// Heading of a currency list group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[allow(missing_docs)]
pub enum CurrencyGroupKind {
    #[strum(serialize = "Popular Currencies")]
    Popular,
    #[strum(serialize = "All Currencies")]
    All,
    #[strum(serialize = "Search Results")]
    SearchResults,
}

/// One group of the currency list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyGroup<'a> {
    /// Group heading.
    pub kind: CurrencyGroupKind,
    /// Currencies in display order.
    pub currencies: Vec<&'a Currency>,
}

/// Whether `city` delivers `product`.
pub fn is_serviceable(city: &City, product: Product) -> bool {
    match product {
        Product::Card => city.serviceable_card,
        Product::Note => city.serviceable_notes,
    }
}

/// Cities that deliver `product`, in input order.
pub fn filter_serviceable_cities<'a, I>(cities: I, product: Product) -> Vec<&'a City>
where
    I: IntoIterator<Item = &'a City>,
{
    cities
        .into_iter()
        .filter(|c| is_serviceable(c, product))
        .collect()
}

/// City code to switch to when `current` does not deliver `product`.
///
/// Returns `None` when `current` is fine or when no city delivers the product
/// at all; otherwise the first top city, else the first serviceable city.
pub fn ensure_serviceable_city<'a>(
    cities: &'a [City],
    product: Product,
    current: &str,
) -> Option<&'a str> {
    let serviceable = filter_serviceable_cities(cities, product);
    if serviceable.is_empty() || serviceable.iter().any(|c| c.code == current) {
        return None;
    }
    serviceable
        .iter()
        .copied()
        .find(|c| c.is_top_city)
        .or_else(|| serviceable.first().copied())
        .map(|c| c.code.as_str())
}

fn city_matches(city: &City, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let mut hay = city.name.clone();
    hay.push(' ');
    hay.push_str(&city.aliases.join(" "));
    hay.to_lowercase().contains(query)
}

/// Top and other cities whose name or aliases contain `query`, case-insensitively.
pub fn search_cities<'a, I>(cities: I, query: &str) -> Vec<CityGroup<'a>>
where
    I: IntoIterator<Item = &'a City>,
{
    let query = query.trim().to_lowercase();
    let (top, other): (Vec<&City>, Vec<&City>) = cities
        .into_iter()
        .filter(|c| city_matches(c, &query))
        .partition(|c| c.is_top_city);

    [(CityGroupKind::Top, top), (CityGroupKind::Other, other)]
        .into_iter()
        .filter(|(_, cities)| !cities.is_empty())
        .map(|(kind, cities)| CityGroup { kind, cities })
        .collect()
}

/// Every whitespace-separated token of `query` occurs in the currency's search text.
pub fn currency_matches(currency: &Currency, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    let hay = currency.search_haystack();
    query.split_whitespace().all(|token| hay.contains(token))
}

/// Currency list for the picker, limited to currencies the rate table prices.
///
/// Without a query: popular currencies in input order, then the rest sorted
/// by name. With a query: a single result group of conjunctive token matches.
pub fn search_currencies<'a>(
    currencies: &'a [Currency],
    rates: &RatesTable,
    query: &str,
) -> Vec<CurrencyGroup<'a>> {
    let mut seen = HashSet::new();
    let available: Vec<&Currency> = currencies
        .iter()
        .filter(|&c| rates.contains(&c.code) && seen.insert(c.code.as_str()))
        .collect();

    let groups = if query.trim().is_empty() {
        let (popular, mut other): (Vec<&Currency>, Vec<&Currency>) =
            available.into_iter().partition(|c| c.popular);
        other.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });
        vec![
            (CurrencyGroupKind::Popular, popular),
            (CurrencyGroupKind::All, other),
        ]
    } else {
        let results = available
            .into_iter()
            .filter(|c| currency_matches(c, query))
            .collect();
        vec![(CurrencyGroupKind::SearchResults, results)]
    };

    groups
        .into_iter()
        .filter(|(_, list)| !list.is_empty())
        .map(|(kind, currencies)| CurrencyGroup { kind, currencies })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fx_common::model::RateEntry;

    fn city(code: &str, name: &str, top: bool, card: bool, notes: bool) -> City {
        City {
            code: code.into(),
            name: name.into(),
            aliases: Vec::new(),
            is_top_city: top,
            serviceable_card: card,
            serviceable_notes: notes,
        }
    }

    fn cities() -> Vec<City> {
        let mut bom = city("BOM", "Mumbai", true, true, true);
        bom.aliases = vec!["Bombay".into()];
        vec![
            city("AGR", "Agra", false, true, false),
            city("DEL", "Delhi", true, true, true),
            bom,
            city("GOI", "Goa", false, false, true),
            city("CCU", "Kolkata", true, true, false),
        ]
    }

    fn currency(code: &str, name: &str, popular: bool) -> Currency {
        Currency {
            code: code.into(),
            name: name.into(),
            popular,
            ..Currency::default()
        }
    }

    fn rates(codes: &[&str]) -> RatesTable {
        RatesTable::new(
            codes
                .iter()
                .map(|c| RateEntry {
                    currency: c.to_string(),
                    card_rate: 1.0,
                    notes_rate: 1.0,
                    image: String::new(),
                })
                .collect(),
        )
    }

    fn codes<'a>(list: &[&'a Currency]) -> Vec<&'a str> {
        list.iter().map(|&c| c.code.as_str()).collect()
    }

    #[test]
    fn filter_is_idempotent_and_order_preserving() {
        let all = cities();
        let once = filter_serviceable_cities(&all, Product::Note);
        let twice = filter_serviceable_cities(once.iter().copied(), Product::Note);
        assert_eq!(once, twice);
        let names: Vec<_> = once.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(names, ["DEL", "BOM", "GOI"]);
    }

    #[test]
    fn unserviceable_city_falls_back_to_first_top_city() {
        let all = cities();
        assert_eq!(ensure_serviceable_city(&all, Product::Note, "AGR"), Some("DEL"));
        assert_eq!(ensure_serviceable_city(&all, Product::Note, "GOI"), None);
        assert_eq!(ensure_serviceable_city(&all, Product::Card, "GOI"), Some("DEL"));
    }

    #[test]
    fn fallback_without_top_city_uses_first() {
        let all = vec![city("AGR", "Agra", false, true, false), city("GOI", "Goa", false, true, false)];
        assert_eq!(ensure_serviceable_city(&all, Product::Card, "DEL"), Some("AGR"));
        assert_eq!(ensure_serviceable_city(&all, Product::Note, "DEL"), None);
    }

    #[test]
    fn city_search_matches_aliases_and_drops_empty_groups() {
        let all = cities();
        let groups = search_cities(&all, "  BOMBAY ");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].kind, CityGroupKind::Top);
        assert_eq!(groups[0].cities[0].code, "BOM");

        let groups = search_cities(&all, "");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].kind.to_string(), "Other Cities");

        assert!(search_cities(&all, "zurich").is_empty());
    }

    #[test]
    fn currency_listing_popular_first_then_alphabetical() {
        let list = vec![
            currency("USD", "US Dollar", true),
            currency("THB", "Thai Baht", false),
            currency("EUR", "Euro", true),
            currency("AED", "UAE Dirham", false),
            currency("XYZ", "Unpriced", true),
            currency("CHF", "Swiss Franc", false),
            currency("USD", "US Dollar", true),
        ];
        let table = rates(&["USD", "THB", "EUR", "AED", "CHF"]);
        let groups = search_currencies(&list, &table, "");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].kind, CurrencyGroupKind::Popular);
        assert_eq!(codes(&groups[0].currencies), ["USD", "EUR"]);
        assert_eq!(codes(&groups[1].currencies), ["CHF", "THB", "AED"]);
    }

    #[test]
    fn currency_search_requires_every_token() {
        let mut aud = currency("AUD", "Australian Dollar", false);
        aud.search_terms = Some("aud australia dollar".into());
        let list = vec![
            currency("USD", "US Dollar", true),
            aud,
            currency("EUR", "Euro", true),
        ];
        let table = rates(&["USD", "AUD", "EUR"]);

        let groups = search_currencies(&list, &table, "us dollar");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].kind, CurrencyGroupKind::SearchResults);
        // "aud australia dollar" contains "us" inside "australia".
        assert_eq!(codes(&groups[0].currencies), ["USD", "AUD"]);

        let groups = search_currencies(&list, &table, "DOLLAR  usd");
        assert_eq!(codes(&groups[0].currencies), ["USD"]);

        assert!(search_currencies(&list, &table, "yen").is_empty());
    }
}
