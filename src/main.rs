#![allow(warnings)]
//! Corporate Site Frontend Entry Point

mod api;
mod app;
mod backend;
mod components;
mod config;
mod context;
mod error;
mod models;
mod reorder;
mod role;
mod sequence;
mod store;
mod validation;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = SiteConfig::resolve();
    config::init_logging(config.log_level);
    log::info!("[APP] api base {}", config.api_base);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
