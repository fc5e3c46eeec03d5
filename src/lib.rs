mod components;

pub mod config;
pub mod logging;
pub mod models;
pub mod pages;
pub mod projection;
pub mod repo;
pub mod state;
pub mod storage;
pub mod util;

use crate::config::{NotesConfig, DEFAULT_LOG_LEVEL};
use crate::logging::init_logging;
use crate::pages::NotesPage;
use crate::state::{AppContext, AppState};
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

#[component]
pub fn App(config: NotesConfig) -> impl IntoView {
    provide_context(AppContext(AppState::new(&config)));

    view! { <NotesPage /> }
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = NotesConfig::from_env();
    if let Err(err) = init_logging(&config.log_level) {
        let _ = init_logging(DEFAULT_LOG_LEVEL);
        log::warn!("{err}; using `{DEFAULT_LOG_LEVEL}`");
    }
    log::info!(
        "desktop notes starting (key `{}`, locale `{}`)",
        config.storage_key,
        config.locale
    );

    mount_to_body(move || view! { <App config=config /> });
}
