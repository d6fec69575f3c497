//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `SiteApi` seam used by the page sections and its
//! browser implementation over `gloo-net`. Wire records live in the shared
//! `content` crate.

pub mod api;
