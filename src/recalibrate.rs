//! Bounds recalibration after free-form dragging.
//!
//! DESIGN
//! ======
//! A drag may leave items hanging past a canvas edge. Rather than clamping
//! the dragged item alone, the whole layout is shifted by one translation so
//! every item keeps its position relative to every other item. Only a real
//! bounds violation triggers a shift: items inside the canvas stay put no
//! matter how far they sit from the origin.
//!
//! `None` means the layout is wider (or taller) than the canvas and no
//! translation can fit it; the caller rejects the drag or grows the canvas.

#[cfg(test)]
#[path = "recalibrate_test.rs"]
mod recalibrate_test;

use serde::{Deserialize, Serialize};

use crate::geom::{Point, PositionedItem, bounding_box};

/// Outcome of a successful recalibration.
///
/// `positions` is the full adjusted item set and always equals the input
/// shifted by `(offset_x, offset_y)`; with zero offsets it echoes the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecalibrationResult {
    pub needs_recalibration: bool,
    pub offset_x: f64,
    pub offset_y: f64,
    pub positions: Vec<PositionedItem>,
}

impl RecalibrationResult {
    fn unchanged(items: &[PositionedItem]) -> Self {
        Self { needs_recalibration: false, offset_x: 0.0, offset_y: 0.0, positions: items.to_vec() }
    }
}

/// Result of applying a drag and recalibrating the layout.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// The drag fits, possibly after a uniform shift.
    Accepted(RecalibrationResult),
    /// The drag cannot be reconciled with the canvas bounds (or named no item).
    Rejected,
}

/// Compute the minimal uniform shift that brings every item inside
/// `[0, canvas_width] x [0, canvas_height]`.
///
/// Returns `None` when the items' spread exceeds the canvas on either axis.
#[must_use]
pub fn recalibrate_button_positions(
    items: &[PositionedItem],
    canvas_width: f64,
    canvas_height: f64,
) -> Option<RecalibrationResult> {
    let Some(bbox) = bounding_box(items.iter().map(|item| item.rect)) else {
        return Some(RecalibrationResult::unchanged(items));
    };

    let Some(offset_x) = axis_offset(bbox.x, bbox.right(), canvas_width) else {
        tracing::warn!(min_x = bbox.x, max_x = bbox.right(), canvas_width, "layout wider than canvas");
        return None;
    };
    let Some(offset_y) = axis_offset(bbox.y, bbox.bottom(), canvas_height) else {
        tracing::warn!(min_y = bbox.y, max_y = bbox.bottom(), canvas_height, "layout taller than canvas");
        return None;
    };

    if offset_x == 0.0 && offset_y == 0.0 {
        return Some(RecalibrationResult::unchanged(items));
    }

    let positions: Vec<PositionedItem> = items
        .iter()
        .map(|item| PositionedItem { id: item.id.clone(), rect: item.rect.translated(offset_x, offset_y) })
        .collect();

    if let Some(stray) = positions.iter().find(|item| !item.rect.is_within(canvas_width, canvas_height)) {
        tracing::warn!(id = %stray.id, offset_x, offset_y, "recalibrated item still out of bounds");
        return None;
    }

    tracing::debug!(offset_x, offset_y, items = positions.len(), "recalibrated layout");
    Some(RecalibrationResult { needs_recalibration: true, offset_x, offset_y, positions })
}

/// Shift along one axis for an extent `[min, max]` on a canvas of `size`.
///
/// Left/top overflow moves the extent so `min` lands on 0. If the far edge
/// then overflows, the extent is instead pulled back so `max` lands on
/// `size`, unless that would push `min` below 0.
fn axis_offset(min: f64, max: f64, size: f64) -> Option<f64> {
    let mut offset = if min < 0.0 { -min } else { 0.0 };
    if max + offset > size {
        let pulled = size - max;
        if min + pulled < 0.0 {
            return None;
        }
        offset = pulled;
    }
    Some(offset)
}

/// Move item `id` so its top-left corner sits at `origin`, then recalibrate.
#[must_use]
pub fn apply_drag(
    items: &[PositionedItem],
    id: &str,
    origin: Point,
    canvas_width: f64,
    canvas_height: f64,
) -> DragOutcome {
    if !items.iter().any(|item| item.id == id) {
        tracing::debug!(%id, "drag names an unknown item");
        return DragOutcome::Rejected;
    }

    let moved: Vec<PositionedItem> = items
        .iter()
        .map(|item| {
            if item.id == id {
                PositionedItem { id: item.id.clone(), rect: item.rect.with_origin(origin) }
            } else {
                item.clone()
            }
        })
        .collect();

    match recalibrate_button_positions(&moved, canvas_width, canvas_height) {
        Some(result) => DragOutcome::Accepted(result),
        None => DragOutcome::Rejected,
    }
}
