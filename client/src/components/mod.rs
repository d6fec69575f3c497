//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each landing page section is one component. Sections that talk to the
//! backend own their fetch state locally; the only shared context is the
//! toast queue provided by `app::App`.

pub mod contact;
pub mod footer;
pub mod gallery;
pub mod glyph;
pub mod header;
pub mod hero;
pub mod services;
pub mod testimonials;
pub mod toaster;
