//! Personal Dashboard Frontend Entry Point

mod app;
mod components;
mod context;
mod markdown;
mod storage;
mod store;
mod theme;

use app::App;
use dashboard_core::DashboardConfig;
use leptos::prelude::*;
use storage::BrowserStorage;

fn main() {
    console_error_panic_hook::set_once();

    let config = DashboardConfig::load(&BrowserStorage);
    ring_logger::init(config.log_capacity, config.log_level());
    tracing::info!(data_key = %config.data_key, "dashboard starting");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
