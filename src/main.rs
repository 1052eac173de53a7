//! Worker Profile Frontend Entry Point

mod about_me;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod location;
mod models;
mod render;
mod store;
mod sync;
mod toast;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = match AppConfig::from_page() {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::error_1(&format!("Falling back to default config: {}", e).into());
            AppConfig::default()
        }
    };
    if let Err(e) = console_logger::init(config.log_filter()) {
        web_sys::console::error_1(&format!("Logger already installed: {}", e).into());
    }
    log::info!("Profile page starting, API base {:?}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
