//! Pan/zoom viewport and screen <-> canvas coordinate conversions.
//!
//! Both editing surfaces share one transform model: canvas content is drawn
//! with `translate(offset) scale(scale)`. They differ only in whether an
//! entity's on-screen size follows the zoom, which is expressed with
//! [`SizeMode`] instead of two parallel transform implementations.
//!
//! - Scene Board buttons grow and shrink with zoom ([`SizeMode::Scaled`]),
//!   and pointer events arrive in page coordinates, so the container's
//!   bounding rect is subtracted first.
//! - Layout fixtures keep a constant marker size ([`SizeMode::Fixed`]); only
//!   their position is projected, relative to the canvas origin.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ZOOM, MIN_ZOOM};
use crate::geom::{ContainerRect, Point, Rect};
use crate::scalar::clamp;

/// Whether an entity's on-screen size follows the viewport scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeMode {
    /// Size is multiplied by the zoom factor (Scene Board buttons).
    #[default]
    Scaled,
    /// Size is constant on screen; only the position is projected (fixtures).
    Fixed,
}

/// Viewport state for pan/zoom.
///
/// `offset_x` / `offset_y` are in screen pixels. `scale` is a zoom factor
/// (1.0 = no zoom) and must be positive; [`Self::with_scale`] and
/// [`Self::zoomed_at`] keep it inside `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportTransform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, scale: 1.0 }
    }
}

impl ViewportTransform {
    #[must_use]
    pub fn new(offset_x: f64, offset_y: f64, scale: f64) -> Self {
        Self { offset_x, offset_y, scale }
    }

    // --- Scene Board (container-relative, free scale) ---

    /// Convert a page-space pointer position to canvas coordinates.
    ///
    /// `canvas = (screen - container.origin - offset) / scale`
    #[must_use]
    pub fn screen_to_canvas(&self, screen: Point, container: &ContainerRect) -> Point {
        self.screen_to_pixel(container.to_local(screen))
    }

    /// Convert a canvas point to page-space coordinates.
    #[must_use]
    pub fn canvas_to_screen(&self, canvas: Point, container: &ContainerRect) -> Point {
        container.to_page(self.pixel_to_screen(canvas))
    }

    // --- Layout editor (canvas-origin relative) ---

    /// Project a canvas pixel onto the screen: `screen = pixel * scale + offset`.
    #[must_use]
    pub fn pixel_to_screen(&self, pixel: Point) -> Point {
        Point {
            x: pixel.x * self.scale + self.offset_x,
            y: pixel.y * self.scale + self.offset_y,
        }
    }

    /// Inverse of [`Self::pixel_to_screen`].
    #[must_use]
    pub fn screen_to_pixel(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.offset_x) / self.scale,
            y: (screen.y - self.offset_y) / self.scale,
        }
    }

    // --- Sizes ---

    /// On-screen size of an entity whose canvas size is `width` x `height`.
    #[must_use]
    pub fn screen_size(&self, width: f64, height: f64, mode: SizeMode) -> (f64, f64) {
        match mode {
            SizeMode::Scaled => (width * self.scale, height * self.scale),
            SizeMode::Fixed => (width, height),
        }
    }

    /// On-screen footprint of an entity centered on `center_px` in canvas space.
    ///
    /// The result is relative to the canvas origin, like [`Self::pixel_to_screen`].
    #[must_use]
    pub fn screen_bounds(&self, center_px: Point, width: f64, height: f64, mode: SizeMode) -> Rect {
        let (w, h) = self.screen_size(width, height, mode);
        Rect::centered_at(self.pixel_to_screen(center_px), w, h)
    }

    /// Convert a screen-space pointer delta to a canvas-space delta.
    #[must_use]
    pub fn screen_delta_to_canvas(&self, dx: f64, dy: f64) -> Point {
        Point::new(dx / self.scale, dy / self.scale)
    }

    // --- Viewport manipulation ---

    /// Copy of this viewport with `scale` clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    #[must_use]
    pub fn with_scale(&self, scale: f64) -> Self {
        self.with_scale_in(scale, MIN_ZOOM, MAX_ZOOM)
    }

    /// Copy of this viewport with `scale` clamped to `[min_zoom, max_zoom]`.
    #[must_use]
    pub fn with_scale_in(&self, scale: f64, min_zoom: f64, max_zoom: f64) -> Self {
        Self { scale: clamp(scale, min_zoom, max_zoom), ..*self }
    }

    /// Zoom by `factor` while keeping the canvas point under `anchor` fixed.
    ///
    /// `anchor` is relative to the canvas origin (container-local for the
    /// Scene Board). The resulting scale is clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    #[must_use]
    pub fn zoomed_at(&self, anchor: Point, factor: f64) -> Self {
        self.zoomed_at_in(anchor, factor, MIN_ZOOM, MAX_ZOOM)
    }

    /// [`Self::zoomed_at`] with the scale clamped to `[min_zoom, max_zoom]`.
    #[must_use]
    pub fn zoomed_at_in(&self, anchor: Point, factor: f64, min_zoom: f64, max_zoom: f64) -> Self {
        let pinned = self.screen_to_pixel(anchor);
        let scale = clamp(self.scale * factor, min_zoom, max_zoom);
        Self {
            offset_x: anchor.x - pinned.x * scale,
            offset_y: anchor.y - pinned.y * scale,
            scale,
        }
    }

    /// Pan by a screen-space delta.
    #[must_use]
    pub fn panned_by(&self, dx: f64, dy: f64) -> Self {
        Self { offset_x: self.offset_x + dx, offset_y: self.offset_y + dy, ..*self }
    }
}
