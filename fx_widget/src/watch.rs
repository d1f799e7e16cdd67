//! Periodic delivery banner refresh.
//!
//! A long-running widget keeps its "today/tomorrow" wording current by
//! recomputing only the delivery estimate on a fixed interval. Nothing else
//! is re-rendered.
use chrono::Local;
use crossbeam_channel::{select, tick, Receiver};
use fx_engine::delivery::DELIVERY_REFRESH_INTERVAL;
use fx_engine::{delivery_text, DeliveryText};
use log::{debug, info};

/// Blocking refresh loop; returns once `shutdown_rx` fires or disconnects.
pub fn run_delivery_refresh(compact: bool, shutdown_rx: Receiver<()>) {
    let ticker = tick(DELIVERY_REFRESH_INTERVAL);
    let mut last: DeliveryText = delivery_text(Local::now().naive_local(), compact);
    info!(
        "Refreshing delivery estimate every {}s. Press Ctrl+C to exit.",
        DELIVERY_REFRESH_INTERVAL.as_secs()
    );

    loop {
        select! {
            recv(shutdown_rx) -> _ => break,
            recv(ticker) -> _ => {
                let current = delivery_text(Local::now().naive_local(), compact);
                if current != last {
                    println!("  {}", current.headline);
                    println!("  {}", current.detail);
                    last = current;
                } else {
                    debug!("Delivery estimate unchanged: {}", current.headline);
                }
            }
        }
    }
    info!("Delivery refresh stopping...");
}
