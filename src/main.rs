//! Staff Reorder Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod dom;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let config = config::load_config();
    logger::init(config.level_filter());
    let items = config::load_initial_items(&config);
    log::info!("[APP] starting with {} {}", items.len(), config.item_label);

    mount_to_body(move || view! { <App config=config.clone() items=items.clone() /> });
}
