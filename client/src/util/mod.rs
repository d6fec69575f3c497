//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (build-time config,
//! window scroll, task liveness) from page and component logic so the pure
//! parts stay testable off-browser.

pub mod config;
pub mod liveness;
pub mod mount_fetch;
pub mod scroll;
pub mod slider;
pub mod year;
