//! Outreach Dashboard Frontend Entry Point

mod app;
mod components;
mod context;
mod export;
mod format;
mod seed;
mod store;
mod toast;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = seed::load();
    let config = loaded.clone().unwrap_or_default();
    let _ = rolling_logger::init_logger(config.ui.log_capacity, log::LevelFilter::Debug);
    match loaded {
        Ok(_) => log::info!("[APP] seed loaded: {} members", config.members.len()),
        Err(err) => log::warn!("[APP] seed rejected, using built-in defaults: {}", err),
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
