//! Build-time configuration for the browser bundle.
//!
//! The WASM bundle has no process environment at runtime, so the backend
//! base address and the gallery refresh mode are read from the environment
//! when the crate is compiled:
//!
//! - `FIXERUPPER_BACKEND_URL`: backend base address (empty = same origin).
//! - `FIXERUPPER_RESEED_ON_LOAD`: `1`/`true`/`yes` makes the gallery wipe and
//!   reseed the backend before fetching. Off by default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::fetch::GalleryRefresh;

/// Backend base address baked in at build time.
pub fn backend_base() -> &'static str {
    option_env!("FIXERUPPER_BACKEND_URL").unwrap_or("")
}

/// Gallery refresh mode baked in at build time.
pub fn gallery_refresh() -> GalleryRefresh {
    parse_refresh(option_env!("FIXERUPPER_RESEED_ON_LOAD"))
}

fn parse_refresh(raw: Option<&str>) -> GalleryRefresh {
    match raw.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes") => GalleryRefresh::ReseedThenFetch,
        _ => GalleryRefresh::FetchOnly,
    }
}
