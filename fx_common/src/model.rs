//! Reference data records: cities, currencies and base rates.
//!
//! All three tables are loaded once at startup from static JSON files and are
//! never mutated afterwards. Optional fields missing from a record default to
//! falsy/empty values instead of failing the whole load.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A delivery city.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct City {
    /// Upper-case city code, e.g. `DEL`.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Alternative names matched by the city search.
    pub aliases: Vec<String>,
    /// Listed under "Top Cities".
    pub is_top_city: bool,
    /// Forex card delivery available.
    pub serviceable_card: bool,
    /// Currency notes delivery available.
    pub serviceable_notes: bool,
}

/// A currency the widget can sell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Currency {
    /// ISO code, e.g. `USD`.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Listed under "Popular Currencies".
    pub popular: bool,
    /// Free-text haystack for search; falls back to `code + " " + name`.
    pub search_terms: Option<String>,
    /// Secondary label rendered on the right side of a list row.
    pub right_label: Option<String>,
}

impl Currency {
    /// Lower-cased text matched by the currency search.
    pub fn search_haystack(&self) -> String {
        match self.search_terms.as_deref() {
            Some(terms) if !terms.is_empty() => terms.to_lowercase(),
            _ => format!("{} {}", self.code, self.name).to_lowercase(),
        }
    }
}

/// Base INR-per-unit rates for one currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RateEntry {
    /// Currency code this entry prices.
    pub currency: String,
    /// INR per unit loaded on a forex card.
    pub card_rate: f64,
    /// INR per unit of currency notes.
    pub notes_rate: f64,
    /// Flag image path.
    pub image: String,
}

#[derive(Debug, Default, Deserialize)]
struct RatesFile {
    #[serde(default)]
    rates: Vec<RateEntry>,
}

/// Rate entries indexed by currency code, in file order.
#[derive(Debug, Clone, Default)]
pub struct RatesTable {
    entries: Vec<RateEntry>,
    index: HashMap<String, usize>,
}

impl RatesTable {
    /// Build a table from entries; a later duplicate code replaces the earlier one.
    pub fn new(entries: Vec<RateEntry>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            index.insert(entry.currency.clone(), pos);
        }
        Self { entries, index }
    }

    /// Decode the `{"rates": [...]}` document.
    pub fn from_json_slice(bytes: &[u8]) -> crate::Result<Self> {
        let file: RatesFile = serde_json::from_slice(bytes)?;
        Ok(Self::new(file.rates))
    }

    /// Base entry for `currency`, if the table prices it.
    pub fn get(&self, currency: &str) -> Option<&RateEntry> {
        self.index.get(currency).map(|&pos| &self.entries[pos])
    }

    /// Whether `currency` has a rate.
    pub fn contains(&self, currency: &str) -> bool {
        self.index.contains_key(currency)
    }

    /// All entries in file order.
    pub fn entries(&self) -> &[RateEntry] {
        &self.entries
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The three reference tables the widget needs before it can render.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    /// City list in file order.
    pub cities: Vec<City>,
    /// Currency list in file order.
    pub currencies: Vec<Currency>,
    /// Base rates.
    pub rates: RatesTable,
}

impl ReferenceData {
    /// Find a city by code.
    pub fn city(&self, code: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.code == code)
    }

    /// Find a currency by code.
    pub fn currency(&self, code: &str) -> Option<&Currency> {
        self.currencies.iter().find(|c| c.code == code)
    }

    /// City display name, or the raw code when the city is unknown.
    pub fn city_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.city(code).map(|c| c.name.as_str()).unwrap_or(code)
    }
}
