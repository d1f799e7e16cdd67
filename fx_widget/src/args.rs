//! Command-line arguments for the widget front end.
//!
//! This module defines the CLI interface using `clap`. Flags given on the
//! `quote` subcommand override whatever the `--query` string sets.
use clap::{Parser, Subcommand};
use fx_common::Product;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory holding cities.json, currencies.json and rates.json.
    #[clap(long, default_value = "data")]
    pub data_dir: String,

    /// Page query string, e.g. "product=card&city=bom&coupon=save10".
    #[clap(long, default_value = "")]
    pub query: String,

    #[command(subcommand)]
    pub command: Option<WidgetCommand>,
}

/// What to render.
#[derive(Debug, Subcommand)]
pub enum WidgetCommand {
    /// Price an order (the default when no subcommand is given).
    Quote(QuoteArgs),
    /// List the city picker.
    Cities {
        /// Product whose serviceable cities are listed; defaults to the page's product.
        #[clap(long, value_enum)]
        product: Option<Product>,
        /// Search text matched against names and aliases.
        query: Option<String>,
    },
    /// List the currency picker.
    Currencies {
        /// Whitespace-separated search tokens; all must match.
        query: Option<String>,
    },
}

/// Order fields for the `quote` subcommand.
#[derive(Debug, Default, clap::Args)]
pub struct QuoteArgs {
    /// City code.
    #[clap(long)]
    pub city: Option<String>,

    /// Currency code.
    #[clap(long)]
    pub currency: Option<String>,

    /// Notes or card.
    #[clap(long, value_enum)]
    pub product: Option<Product>,

    /// Amount as typed, separators allowed ("1,000").
    #[clap(long)]
    pub amount: Option<String>,

    /// Coupon code to apply.
    #[clap(long)]
    pub coupon: Option<String>,

    /// Cashback attached to the coupon, in rupees.
    #[clap(long)]
    pub cashback: Option<f64>,

    /// Strike-through rate shown while a coupon applies.
    #[clap(long)]
    pub rate_old: Option<f64>,

    /// Do not apply the demo coupon.
    #[clap(long)]
    pub no_coupon: bool,

    /// Short delivery date without the weekday.
    #[clap(long)]
    pub compact: bool,

    /// Print the quote as JSON.
    #[clap(long)]
    pub json: bool,

    /// Keep running and refresh the delivery banner every minute.
    #[clap(long)]
    pub watch: bool,
}
