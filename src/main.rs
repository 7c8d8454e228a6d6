//! Todo List Frontend Entry Point

mod actions;
mod app;
mod components;
mod config;
mod error;
mod models;
mod rows;
mod selection;
mod store;
mod todos;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("[APP] logger init failed: {}", e).into());
    }
    log::info!("[APP] starting, log level {}", config.log_level);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
