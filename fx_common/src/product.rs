//! Purchase modes offered by the widget.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// What the customer is buying: physical notes or a prepaid forex card.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
    Default,
)]
#[clap(rename_all = "lower")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Product {
    /// Prepaid forex card.
    Card,
    /// Currency notes (cash).
    #[default]
    Note,
}

impl Product {
    /// Label shown on the product tab and in enquiry messages.
    pub fn label(self) -> &'static str {
        match self {
            Product::Card => "Forex Card",
            Product::Note => "Currency Notes",
        }
    }
}

/// Which products the embedding page offers.
///
/// `Both` renders the two tabs; the single-product modes pin the product.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, Display, EnumString, Eq, PartialEq, Default,
)]
#[clap(rename_all = "lower")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProductMode {
    Card,
    Note,
    #[default]
    Both,
}

impl ProductMode {
    /// Product selected when the widget first renders.
    pub fn initial_product(self) -> Product {
        match self {
            ProductMode::Card => Product::Card,
            ProductMode::Note | ProductMode::Both => Product::Note,
        }
    }

    /// Whether the user may switch between products.
    pub fn allows_switching(self) -> bool {
        self == ProductMode::Both
    }
}
