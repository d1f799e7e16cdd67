//!
//! Common types and utilities shared by the quote engine and the widget front end.
//!
//! This crate aggregates:
//! - `error` — unified error type `FxError` used across the workspace.
//! - `result` — handy `Result<T, FxError>` alias.
//! - `model` — city, currency and rate reference records.
//! - `loader` — parallel, all-or-nothing loading of the three reference tables.
//! - `product` — notes vs. card, and which of them a page offers.
//! - `request` — the `QuoteRequest` value owned by the front end.
//! - `context` — boot context parsed from the page query string.
#![warn(missing_docs)]
pub mod context;
pub mod error;
pub mod loader;
pub mod model;
pub mod product;
pub mod request;
pub mod result;

pub use context::WidgetContext;
pub use error::FxError;
pub use model::{City, Currency, RateEntry, RatesTable, ReferenceData};
pub use product::{Product, ProductMode};
pub use request::QuoteRequest;
pub use result::Result;
