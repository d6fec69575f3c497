//! Window scroll tracking for the sticky header.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Vertical offset (px) past which the header switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// Whether the page has scrolled far enough to restyle the header.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Current `window.scrollY`, or `0.0` outside the browser.
pub fn window_scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
