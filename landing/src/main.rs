// Arivamudham Landing Page - Leptos 0.8 Edition

use arivamudham_landing::{App, SiteConfig, logging};
use leptos::prelude::*;
use tracing::Level;

fn main() {
    console_error_panic_hook::set_once();

    let config = match SiteConfig::embedded() {
        Ok(config) => {
            logging::init(config.max_level());
            config
        }
        Err(err) => {
            logging::init(Level::INFO);
            tracing::warn!("site.json rejected, using defaults: {err}");
            SiteConfig::default()
        }
    };

    tracing::info!(
        "Starting {} landing v{}",
        config.brand,
        env!("CARGO_PKG_VERSION")
    );

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
