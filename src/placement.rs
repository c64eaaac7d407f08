//! Collision-avoiding auto-placement for newly added items.
//!
//! The search is a discrete, row-major grid scan rather than a bin packer:
//! items are added one at a time, so the first free grid slot is good enough
//! and the result is fully deterministic for a given input. When the grid is
//! saturated, [`place_item`] falls back to a diagonal cascade so an add never
//! fails outright.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use serde::{Deserialize, Serialize};

use crate::collision::collides_with_any;
use crate::consts::CASCADE_STEP;
use crate::geom::{Point, Rect};

/// Scalar inputs of the placement search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRequest {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub item_width: f64,
    pub item_height: f64,
    /// Distance between successive candidates on both axes.
    pub grid_step: f64,
    /// Gap kept from the canvas edge and from existing items.
    pub padding: f64,
}

/// Which strategy produced a [`Placement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementStrategy {
    /// First free slot of the grid scan.
    Grid,
    /// Diagonal cascade used once the grid is saturated.
    Cascade,
}

/// Where a new item goes and how the position was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Point,
    pub strategy: PlacementStrategy,
}

/// Find the first collision-free top-left corner for a new item.
///
/// Candidates start at `(padding, padding)` and advance by `grid_step`,
/// first along X while `x + item_width < canvas_width`, then along Y while
/// `y + item_height < canvas_height`. Each candidate is tested against every
/// existing rectangle with the request's padding. Returns `None` once the scan
/// is exhausted, or immediately when `grid_step` is not a positive number.
#[must_use]
pub fn find_available_position(existing: &[Rect], request: &PlacementRequest) -> Option<Point> {
    let PlacementRequest { canvas_width, canvas_height, item_width, item_height, grid_step, padding } = *request;
    if grid_step <= 0.0 || !grid_step.is_finite() {
        tracing::warn!(grid_step, "auto-placement skipped: grid step must be positive");
        return None;
    }

    let mut y = padding;
    while y + item_height < canvas_height {
        let mut x = padding;
        while x + item_width < canvas_width {
            let candidate = Rect::new(x, y, item_width, item_height);
            if !collides_with_any(&candidate, existing, padding) {
                tracing::debug!(x, y, existing = existing.len(), "auto-placement found free slot");
                return Some(Point::new(x, y));
            }
            x += grid_step;
        }
        y += grid_step;
    }

    tracing::debug!(existing = existing.len(), canvas_width, canvas_height, "auto-placement grid saturated");
    None
}

/// Deterministic fallback slot for the `index`-th item on a saturated canvas.
///
/// Slots run diagonally from `(padding, padding)` in steps of
/// [`CASCADE_STEP`] and wrap before the item would cross the canvas edge.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn cascade_position(index: usize, request: &PlacementRequest) -> Point {
    let room_x = request.canvas_width - request.item_width - request.padding;
    let room_y = request.canvas_height - request.item_height - request.padding;
    let room = room_x.min(room_y);
    let slots = if room > 0.0 { (room / CASCADE_STEP).floor() + 1.0 } else { 1.0 };
    let k = (index as f64) % slots;
    let offset = request.padding + k * CASCADE_STEP;
    Point::new(offset, offset)
}

/// Place a new item: grid search first, cascade when the grid is full.
#[must_use]
pub fn place_item(existing: &[Rect], request: &PlacementRequest) -> Placement {
    if let Some(position) = find_available_position(existing, request) {
        return Placement { position, strategy: PlacementStrategy::Grid };
    }
    let position = cascade_position(existing.len(), request);
    tracing::warn!(x = position.x, y = position.y, "no free grid slot; using cascade placement");
    Placement { position, strategy: PlacementStrategy::Cascade }
}
