//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site has a single route. The page composes section components in
//! document order and delegates rendering details to `components`.

pub mod home;
