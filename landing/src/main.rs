// AoclimaOptions landing page - Leptos 0.8 CSR entry point

use aoclima_landing::{App, config::LandingConfig, logging};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, rejected) = match LandingConfig::embedded() {
        Ok(config) => (config, None),
        Err(err) => (LandingConfig::default(), Some(err)),
    };

    logging::init(&config.log_filter);
    if let Some(err) = rejected {
        tracing::warn!(error = %err, "embedded landing.toml rejected, using defaults");
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting landing page");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
