use super::*;

#[test]
fn threshold_is_exclusive() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(SCROLL_THRESHOLD));
    assert!(is_scrolled(20.5));
    assert!(is_scrolled(400.0));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn window_scroll_is_zero_off_browser() {
    assert!(window_scroll_y().abs() < f64::EPSILON);
}
