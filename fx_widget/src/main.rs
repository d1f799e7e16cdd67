//! Forex widget: a terminal front end for the quote engine. It loads the
//! reference tables from a data directory, seeds the order from a page query
//! string and command-line flags, and prints the quote, the city picker or
//! the currency picker.
//!
//! Usage example (CLI):
//! ```bash
//! fx_widget --data-dir ./data --query "product=both&city=bom" quote --currency eur --amount 2,500
//! fx_widget cities --product card beng
//! fx_widget currencies "us dollar"
//! ```
//!
//! If any of the three data files cannot be loaded the widget prints a single
//! error and exits; there is no partial rendering.
#![warn(missing_docs)]
mod args;
mod render;
mod watch;

use crate::args::{Args, QuoteArgs, WidgetCommand};
use crate::render::{print_city_groups, print_currency_groups, print_quote};
use crate::watch::run_delivery_refresh;
use chrono::{Local, NaiveDateTime};
use clap::Parser;
use crossbeam_channel::bounded;
use fx_common::{FxError, Product, QuoteRequest, ReferenceData, Result, WidgetContext};
use fx_engine::order::{parse_amount_input, validate_order};
use fx_engine::QuoteEngine;
use log::{error, info, warn};
use std::io;
use std::path::PathBuf;
use std::thread;

fn main() -> Result<(), FxError> {
    init_logger();
    let args = Args::parse();

    let data_dir = normalize_path(&args.data_dir);
    let data = match ReferenceData::load_dir(&data_dir) {
        Ok(data) => data,
        Err(e) => {
            error!(
                "Failed to load widget data. Ensure {} contains cities.json, currencies.json and rates.json.",
                data_dir.display()
            );
            return Err(e);
        }
    };
    let engine = QuoteEngine::new(&data);
    let ctx = WidgetContext::from_query(&args.query);
    let now = Local::now().naive_local();

    match args
        .command
        .unwrap_or_else(|| WidgetCommand::Quote(QuoteArgs::default()))
    {
        WidgetCommand::Quote(quote_args) => run_quote(&engine, &ctx, &quote_args, now),
        WidgetCommand::Cities { product, query } => {
            let product = resolve_product(&ctx, product);
            let groups = engine.city_groups(product, query.as_deref().unwrap_or(""));
            print_city_groups(product, &groups);
            Ok(())
        }
        WidgetCommand::Currencies { query } => {
            let request = engine.normalize(&ctx.initial_request(now));
            let groups = engine.currency_groups(query.as_deref().unwrap_or(""));
            print_currency_groups(&engine, &request.city, request.product, &groups);
            Ok(())
        }
    }
}

fn run_quote(
    engine: &QuoteEngine,
    ctx: &WidgetContext,
    quote_args: &QuoteArgs,
    now: NaiveDateTime,
) -> Result<()> {
    let request = engine.normalize(&build_request(ctx, quote_args, now));
    let quote = engine.quote(&request);

    if quote_args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        print_quote(engine, &request, &quote, quote_args.compact);
    }
    if let Err(e) = validate_order(&quote) {
        warn!("{}", e);
    }

    if quote_args.watch {
        let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down widget...");
            let _ = shutdown_tx.try_send(());
        })
        .map_err(|e| FxError::Io(io::Error::other(e)))?;

        let compact = quote_args.compact;
        let refresher = thread::spawn(move || run_delivery_refresh(compact, shutdown_rx));
        if refresher.join().is_err() {
            error!("Delivery refresh thread panicked");
        }
    }
    Ok(())
}

/// Merge the page context and the command-line overrides into one request.
fn build_request(ctx: &WidgetContext, quote_args: &QuoteArgs, now: NaiveDateTime) -> QuoteRequest {
    let mut request = ctx.initial_request(now);
    request.product = resolve_product(ctx, quote_args.product);
    if let Some(city) = &quote_args.city {
        request = request.with_city(city);
    }
    if let Some(currency) = &quote_args.currency {
        request = request.with_currency(currency);
    }
    if let Some(raw) = &quote_args.amount {
        request = request.with_amount(parse_amount_input(raw));
    }

    if let Some(code) = &quote_args.coupon {
        request = request.with_coupon(code, quote_args.cashback);
    } else if quote_args.no_coupon {
        request = request.with_coupon("", None);
    } else if quote_args.cashback.is_some() && request.coupon_code.is_some() {
        request.cashback_amount = quote_args.cashback;
    }
    if let Some(rate_old) = quote_args.rate_old {
        request.rate_old_override = Some(rate_old);
    }
    request
}

/// Product from `--product`, unless the page pins a different one.
fn resolve_product(ctx: &WidgetContext, flag: Option<Product>) -> Product {
    let pinned = ctx.product_mode.initial_product();
    match flag {
        Some(product) if ctx.product_mode.allows_switching() || product == pinned => product,
        Some(product) => {
            warn!(
                "--product={} ignored: the page only offers {}",
                product, ctx.product_mode
            );
            pinned
        }
        None => pinned,
    }
}

/// Terminal logger: Info by default, no timestamps, `RUST_LOG` wins.
fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();
}

/// Data directory from `--data-dir`, with surrounding whitespace and one pair
/// of matching single or double quotes removed.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|&q| trimmed.strip_prefix(q).and_then(|s| s.strip_suffix(q)))
        .unwrap_or(trimmed);
    PathBuf::from(unquoted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 12)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn flags_override_query_values() {
        let ctx = WidgetContext::from_query("city=bom&currency=eur");
        let quote_args = QuoteArgs {
            city: Some("blr".into()),
            amount: Some("2,500".into()),
            product: Some(Product::Card),
            ..QuoteArgs::default()
        };
        let request = build_request(&ctx, &quote_args, now());
        assert_eq!(request.city, "BLR");
        assert_eq!(request.currency, "EUR");
        assert_eq!(request.amount, 2500);
        assert_eq!(request.product, Product::Card);
        assert_eq!(request.coupon(), "FOREXCASHBACK");
    }

    #[test]
    fn pinned_product_mode_ignores_other_product() {
        let ctx = WidgetContext::from_query("product=note");
        let quote_args = QuoteArgs {
            product: Some(Product::Card),
            ..QuoteArgs::default()
        };
        assert_eq!(build_request(&ctx, &quote_args, now()).product, Product::Note);
    }

    #[test]
    fn city_listing_follows_page_product() {
        let card_page = WidgetContext::from_query("product=card");
        assert_eq!(resolve_product(&card_page, None), Product::Card);
        assert_eq!(resolve_product(&card_page, Some(Product::Note)), Product::Card);

        let both = WidgetContext::from_query("");
        assert_eq!(resolve_product(&both, None), Product::Note);
        assert_eq!(resolve_product(&both, Some(Product::Card)), Product::Card);
    }

    #[test]
    fn no_coupon_flag_drops_demo_coupon() {
        let ctx = WidgetContext::from_query("");
        let quote_args = QuoteArgs {
            no_coupon: true,
            ..QuoteArgs::default()
        };
        let request = build_request(&ctx, &quote_args, now());
        assert_eq!(request.coupon_code, None);
        assert_eq!(request.cashback_amount, None);
    }

    #[test]
    fn strips_quotes_from_data_dir() {
        assert_eq!(normalize_path(" \"./data\" "), PathBuf::from("./data"));
        assert_eq!(normalize_path("'/srv/fx data'"), PathBuf::from("/srv/fx data"));
        assert_eq!(normalize_path("\"data"), PathBuf::from("\"data"));
    }
}
