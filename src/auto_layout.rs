//! Initial grid layout for items that have no saved position.

#[cfg(test)]
#[path = "auto_layout_test.rs"]
mod auto_layout_test;

use crate::geom::Point;
use crate::legacy::normalize_stored_position;

/// Distribute `count` items over a near-square grid covering the canvas.
///
/// `cols = ceil(sqrt(count))`, `rows = ceil(count / cols)`; item `i` gets the
/// center of cell `i` in row-major order.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn calculate_auto_layout_positions(count: usize, canvas_width: f64, canvas_height: f64) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }
    let cols = (count as f64).sqrt().ceil() as usize;
    let rows = count.div_ceil(cols);
    let cell_width = canvas_width / cols as f64;
    let cell_height = canvas_height / rows as f64;

    (0..count)
        .map(|i| {
            let col = (i % cols) as f64;
            let row = (i / cols) as f64;
            Point::new((col + 0.5) * cell_width, (row + 0.5) * cell_height)
        })
        .collect()
}

/// Resolve load-time positions for a list of items.
///
/// Stored positions are kept (legacy fractions converted to pixels). Items
/// without one receive consecutive auto-layout slots, computed for the number
/// of missing items only, in input order.
#[must_use]
pub fn seed_positions(stored: &[Option<Point>], canvas_width: f64, canvas_height: f64) -> Vec<Point> {
    let missing = stored.iter().filter(|p| p.is_none()).count();
    let mut slots = calculate_auto_layout_positions(missing, canvas_width, canvas_height).into_iter();
    if missing > 0 {
        tracing::debug!(missing, total = stored.len(), "seeding auto-layout positions");
    }

    stored
        .iter()
        .map(|entry| match entry {
            Some(point) => normalize_stored_position(*point, canvas_width, canvas_height),
            None => slots.next().unwrap_or_default(),
        })
        .collect()
}
