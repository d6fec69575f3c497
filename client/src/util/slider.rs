//! Before/after comparison slider math.
//!
//! The slider position is a percentage of the card width. The "before"
//! image is clipped to that width and stretched back so it lines up with the
//! "after" image underneath.

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

pub const SLIDER_MIN: u8 = 5;
pub const SLIDER_MAX: u8 = 95;
pub const SLIDER_START: u8 = 50;

/// Parse a range input value, clamped to `[SLIDER_MIN, SLIDER_MAX]`.
/// Unparseable input yields `None` so the caller keeps its current value.
pub fn parse_position(raw: &str) -> Option<u8> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let clamped = value.round().clamp(f64::from(SLIDER_MIN), f64::from(SLIDER_MAX));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(clamped as u8)
}

/// CSS width of the clipping box around the "before" image.
pub fn clip_width(position: u8) -> String {
    format!("{position}%")
}

/// CSS width of the "before" image inside its clipping box.
pub fn before_image_width(position: u8) -> String {
    let position = position.clamp(SLIDER_MIN, SLIDER_MAX);
    format!("{:.2}%", 10_000.0 / f64::from(position))
}
