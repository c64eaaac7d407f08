//! Conversion of legacy fractional (0..1) positions to canvas pixels.
//!
//! Older layouts stored positions as fractions of the canvas size. A value of
//! exactly `0` or `1` cannot be told apart from a pixel coordinate and is
//! therefore left as-is.

#[cfg(test)]
#[path = "legacy_test.rs"]
mod legacy_test;

use crate::geom::Point;

/// Whether `value` looks like a legacy fractional coordinate (`0 < v < 1`).
#[must_use]
pub fn is_normalized_coordinate(value: f64) -> bool {
    value > 0.0 && value < 1.0
}

/// Scale a fractional position up to canvas pixels.
#[must_use]
pub fn normalized_to_pixels(nx: f64, ny: f64, canvas_width: f64, canvas_height: f64) -> Point {
    Point::new(nx * canvas_width, ny * canvas_height)
}

/// Convert a stored position to pixels if both axes are fractional.
#[must_use]
pub fn normalize_stored_position(stored: Point, canvas_width: f64, canvas_height: f64) -> Point {
    if is_normalized_coordinate(stored.x) && is_normalized_coordinate(stored.y) {
        tracing::debug!(x = stored.x, y = stored.y, "converting legacy fractional position");
        normalized_to_pixels(stored.x, stored.y, canvas_width, canvas_height)
    } else {
        stored
    }
}
