//! # client
//!
//! Leptos + WASM frontend for the Fixerupper marketing site.
//!
//! The page is server-rendered by the `server` crate (`ssr` feature) and
//! hydrated in the browser (`hydrate` feature). Network calls only run after
//! hydration; during SSR the data-driven sections render their loading
//! placeholders.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
