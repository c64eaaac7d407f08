//! Geometry value types shared by every engine module.
//!
//! All types are plain snapshots. The engine never keeps references to
//! caller-owned items; callers pass slices in and get fresh values back.
//! Field names serialize in camelCase to match the stored board documents.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

use crate::consts::BOUNDS_EPSILON;

/// Identifier of a placed button or fixture, as persisted by the data layer.
pub type ItemId = String;

/// A point in either screen or canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in canvas pixels. `(x, y)` is the top-left corner.
///
/// Width and height are expected to be positive; the engine does not check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rectangle of the given size centered on `center`.
    #[must_use]
    pub fn centered_at(center: Point, width: f64, height: f64) -> Self {
        Self { x: center.x - width / 2.0, y: center.y - height / 2.0, width, height }
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Copy of this rectangle moved by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..*self }
    }

    /// Copy of this rectangle with its top-left corner moved to `origin`.
    #[must_use]
    pub fn with_origin(&self, origin: Point) -> Self {
        Self { x: origin.x, y: origin.y, ..*self }
    }

    /// Whether `pt` lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.right() && pt.y >= self.y && pt.y <= self.bottom()
    }

    /// Whether the rectangle lies fully inside `[0, width] x [0, height]`.
    ///
    /// A slack of [`BOUNDS_EPSILON`] absorbs rounding left behind by a shift.
    #[must_use]
    pub fn is_within(&self, width: f64, height: f64) -> bool {
        self.x >= -BOUNDS_EPSILON
            && self.y >= -BOUNDS_EPSILON
            && self.right() <= width + BOUNDS_EPSILON
            && self.bottom() <= height + BOUNDS_EPSILON
    }
}

/// The on-page bounding rectangle of the element that hosts a canvas.
///
/// Mirrors what `getBoundingClientRect()` reports; only `left` and `top`
/// take part in the transform.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Convert a page-space point to coordinates local to this container.
    #[must_use]
    pub fn to_local(&self, page: Point) -> Point {
        Point::new(page.x - self.left, page.y - self.top)
    }

    /// Convert a container-local point back to page space.
    #[must_use]
    pub fn to_page(&self, local: Point) -> Point {
        Point::new(local.x + self.left, local.y + self.top)
    }
}

/// A uniquely identified rectangle on a canvas (a scene button or a fixture).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedItem {
    pub id: ItemId,
    #[serde(flatten)]
    pub rect: Rect,
}

impl PositionedItem {
    #[must_use]
    pub fn new(id: impl Into<ItemId>, rect: Rect) -> Self {
        Self { id: id.into(), rect }
    }
}

/// Smallest rectangle containing every item, or `None` for an empty slice.
#[must_use]
pub fn bounding_box(rects: impl IntoIterator<Item = Rect>) -> Option<Rect> {
    let mut iter = rects.into_iter();
    let first = iter.next()?;
    let (mut min_x, mut min_y) = (first.x, first.y);
    let (mut max_x, mut max_y) = (first.right(), first.bottom());
    for rect in iter {
        min_x = min_x.min(rect.x);
        min_y = min_y.min(rect.y);
        max_x = max_x.max(rect.right());
        max_y = max_y.max(rect.bottom());
    }
    Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}
