//! Small numeric helpers shared by the viewport and placement code.

#[cfg(test)]
#[path = "scalar_test.rs"]
mod scalar_test;

/// Restrict `value` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: when `min > max` the upper bound
/// wins, matching `min(max(value, min), max)`.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Snap `value` to the nearest multiple of `grid_size`.
///
/// Exact midpoints round up (toward positive infinity), so `75` on a grid of
/// `50` becomes `100` and `-25` becomes `0`. A non-positive grid leaves the
/// value untouched.
#[must_use]
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    if grid_size <= 0.0 || !grid_size.is_finite() {
        return value;
    }
    (value / grid_size + 0.5).floor() * grid_size
}
