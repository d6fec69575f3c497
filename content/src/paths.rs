//! Backend API paths and base-address joining.

pub const TESTIMONIALS: &str = "/api/testimonials";
pub const GALLERY: &str = "/api/gallery";
pub const SEED: &str = "/api/seed";
pub const CONTACT: &str = "/api/contact";

/// Join a backend base address and an absolute API path.
///
/// Trailing slashes on `base` are dropped so `"http://host/"` and
/// `"http://host"` resolve the same. An empty base yields the bare path
/// (same-origin request).
#[must_use]
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    format!("{base}{path}")
}
