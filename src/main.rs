//! Shopping List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod logging;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    // Logging comes up before config problems are reported, so load first
    // and complain afterwards.
    let loaded = config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init(config.log_level().unwrap_or(LevelFilter::Info));
    if let Err(e) = &loaded {
        log::warn!("{}; using defaults", e);
    }
    if let Err(e) = config.log_level() {
        log::warn!("{}; logging at info", e);
    }

    let origin = config::page_origin().unwrap_or_else(|e| {
        log::error!("{}", e);
        String::new()
    });
    log::info!("shopping list starting against {}", config.list_url(&origin));

    mount_to_body(move || view! { <App config=config origin=origin /> });
}
