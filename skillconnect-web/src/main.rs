//! SkillConnect booking frontend
//!
//! Marketplace pages over mock data. The wallet connection and the payment
//! method rules live in `lib-wallet`; this crate binds them to the browser.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
pub mod data;
mod pages;
mod services;
mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("SkillConnect starting...");

    if let Err(e) = lib_wallet::init_config_from_env() {
        log::warn!("Wallet config not applied, using defaults: {}", e);
    }

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen shipped in index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document available");
        return;
    };

    match document.get_element_by_id("app-loading") {
        Some(element) => {
            if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
                if let Err(e) = html_element.class_list().add_1("hidden") {
                    log::warn!("Failed to hide loading screen: {:?}", e);
                }
            }
        }
        None => log::debug!("Loading element not found"),
    }
}
