//! Axis-aligned collision detection with padding.

#[cfg(test)]
#[path = "collision_test.rs"]
mod collision_test;

use crate::geom::Rect;

/// Whether `a` and `b` overlap once `padding` is added to one side.
///
/// Rectangles collide unless they are strictly separated along at least one
/// axis, so edge-touching rectangles (zero gap) collide. Padding enlarges the
/// occupied region and never shrinks it.
#[must_use]
pub fn check_collision(a: &Rect, b: &Rect, padding: f64) -> bool {
    !(a.right() + padding < b.x
        || a.x > b.right() + padding
        || a.bottom() + padding < b.y
        || a.y > b.bottom() + padding)
}

/// Whether `candidate` collides with any rectangle in `existing`.
#[must_use]
pub fn collides_with_any(candidate: &Rect, existing: &[Rect], padding: f64) -> bool {
    existing.iter().any(|other| check_collision(candidate, other, padding))
}
