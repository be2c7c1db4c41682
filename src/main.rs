//! Blog Frontend Entry Point

use blog_ui::config::client_config;
use blog_ui::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = client_config();
    console_logger::init(&config.log_level);
    tracing::info!(api_base = config.api_base.as_str(), "starting blog ui");

    mount_to_body(App);
}
