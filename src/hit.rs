//! Hit-testing screen points against placed items.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geom::{ContainerRect, ItemId, Point, PositionedItem, Rect};
use crate::viewport::{SizeMode, ViewportTransform};

/// Whether `screen` lands on a layout fixture centered at `center_px`.
///
/// The fixture marker keeps a constant on-screen size, so the test uses the
/// fixed half-size around the projected center rather than a half-size
/// scaled by zoom. Edges count as hits.
#[must_use]
pub fn is_point_in_fixture(screen: Point, center_px: Point, viewport: &ViewportTransform, size_px: f64) -> bool {
    viewport
        .screen_bounds(center_px, size_px, size_px, SizeMode::Fixed)
        .contains(screen)
}

/// Whether a page-space point lands on a Scene Board item.
///
/// Buttons scale with zoom, so the test runs in canvas space against the
/// stored rectangle.
#[must_use]
pub fn is_point_in_item(screen: Point, rect: &Rect, viewport: &ViewportTransform, container: &ContainerRect) -> bool {
    rect.contains(viewport.screen_to_canvas(screen, container))
}

/// The topmost fixture under `screen`, where later entries draw on top.
///
/// Fixture positions are the centers of their rectangles.
#[must_use]
pub fn topmost_fixture_at<'a>(
    screen: Point,
    fixtures: &'a [PositionedItem],
    viewport: &ViewportTransform,
    size_px: f64,
) -> Option<&'a ItemId> {
    fixtures
        .iter()
        .rev()
        .find(|item| is_point_in_fixture(screen, item.rect.center(), viewport, size_px))
        .map(|item| &item.id)
}
