//! Component-local client state.
//!
//! DESIGN
//! ======
//! Each section owns its state exclusively; nothing here is shared across
//! sections except the toast queue, which the app root provides via context.
//! State types are plain structs with explicit transition methods so the
//! contracts can be tested without a browser.

pub mod contact;
pub mod fetch;
pub mod toast;
