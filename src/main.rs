//! Stock Dashboard Frontend Entry Point

mod config;
mod context;
mod notify;
mod store;
mod list_state;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Err(e) = console_logger::init(&config.log_filter) {
        web_sys::console::error_1(&format!("logger setup failed: {e}").into());
    }
    tracing::info!(api = %config.api_base_url, "starting stock dashboard");

    mount_to_body(move || view! { <App config=config /> });
}
