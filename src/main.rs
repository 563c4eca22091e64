//! Order Summary Frontend Entry Point

mod app;
mod components;
mod context;
mod dom;
mod menu;
mod models;
mod notice;
mod price;
mod store;
mod summary;

use log::LevelFilter;

#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(LOG_LEVEL);

    if let Err(e) = dom::start() {
        log::error!("[APP] Order summary not started: {}", e);
    }
}
