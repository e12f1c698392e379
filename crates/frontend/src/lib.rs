pub mod app;
pub mod layout;
pub mod shared;
pub mod usecases;

use app::{App, ConfigErrorPage};
use leptos::prelude::*;
use shared::config::AppConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    match AppConfig::from_build_env() {
        Ok(config) => {
            log::info!(
                "prediction endpoint: {} (timeout: {:?} ms)",
                config.endpoint,
                config.request_timeout_ms
            );
            leptos::mount::mount_to_body(move || view! { <App config=config /> });
        }
        Err(e) => {
            log::error!("configuration error: {}", e);
            let message = e.to_string();
            leptos::mount::mount_to_body(move || view! { <ConfigErrorPage message=message /> });
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
