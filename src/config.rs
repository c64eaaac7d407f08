//! Canvas configuration parsed from environment variables.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_GRID_STEP, DEFAULT_PADDING, FIXTURE_SIZE_PX, MAX_ZOOM,
    MIN_ZOOM,
};
use crate::geom::{ItemId, Point, PositionedItem};
use crate::hit::topmost_fixture_at;
use crate::placement::PlacementRequest;
use crate::viewport::ViewportTransform;

/// Errors produced when validating a [`CanvasConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A canvas dimension is zero, negative or not finite.
    #[error("canvas {axis} must be positive, got {value}")]
    InvalidCanvasSize { axis: &'static str, value: f64 },

    /// The auto-placement grid step is zero, negative or not finite.
    #[error("grid step must be positive, got {0}")]
    InvalidGridStep(f64),

    /// Padding is negative or not finite.
    #[error("padding must be non-negative, got {0}")]
    InvalidPadding(f64),

    /// Zoom limits are non-positive or out of order.
    #[error("zoom range invalid: min {min}, max {max}")]
    InvalidZoomRange { min: f64, max: f64 },

    /// The fixture marker size is zero, negative or not finite.
    #[error("fixture size must be positive, got {0}")]
    InvalidFixtureSize(f64),
}

/// Canvas size, placement grid, zoom range and fixture marker size for one surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanvasConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub grid_step: f64,
    pub padding: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub fixture_size_px: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            grid_step: DEFAULT_GRID_STEP,
            padding: DEFAULT_PADDING,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            fixture_size_px: FIXTURE_SIZE_PX,
        }
    }
}

impl CanvasConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `CANVAS_WIDTH` / `CANVAS_HEIGHT`: default 4000
    /// - `CANVAS_GRID_STEP`: default 50
    /// - `CANVAS_PADDING`: default 10
    /// - `CANVAS_MIN_ZOOM` / `CANVAS_MAX_ZOOM`: default 0.5 / 3.0
    /// - `CANVAS_FIXTURE_SIZE_PX`: default 40
    ///
    /// Unparseable values are ignored. Call [`Self::validate`] afterwards.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            canvas_width: env_parse("CANVAS_WIDTH", defaults.canvas_width),
            canvas_height: env_parse("CANVAS_HEIGHT", defaults.canvas_height),
            grid_step: env_parse("CANVAS_GRID_STEP", defaults.grid_step),
            padding: env_parse("CANVAS_PADDING", defaults.padding),
            min_zoom: env_parse("CANVAS_MIN_ZOOM", defaults.min_zoom),
            max_zoom: env_parse("CANVAS_MAX_ZOOM", defaults.max_zoom),
            fixture_size_px: env_parse("CANVAS_FIXTURE_SIZE_PX", defaults.fixture_size_px),
        }
    }

    /// Check every value against the engine's caller contract.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.canvas_width) {
            return Err(ConfigError::InvalidCanvasSize { axis: "width", value: self.canvas_width });
        }
        if !is_positive(self.canvas_height) {
            return Err(ConfigError::InvalidCanvasSize { axis: "height", value: self.canvas_height });
        }
        if !is_positive(self.grid_step) {
            return Err(ConfigError::InvalidGridStep(self.grid_step));
        }
        if !(self.padding >= 0.0 && self.padding.is_finite()) {
            return Err(ConfigError::InvalidPadding(self.padding));
        }
        if !is_positive(self.min_zoom) || !is_positive(self.max_zoom) || self.min_zoom > self.max_zoom {
            return Err(ConfigError::InvalidZoomRange { min: self.min_zoom, max: self.max_zoom });
        }
        if !is_positive(self.fixture_size_px) {
            return Err(ConfigError::InvalidFixtureSize(self.fixture_size_px));
        }
        Ok(())
    }

    /// Placement request for an item of the given size on this canvas.
    #[must_use]
    pub fn placement_request(&self, item_width: f64, item_height: f64) -> PlacementRequest {
        PlacementRequest {
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            item_width,
            item_height,
            grid_step: self.grid_step,
            padding: self.padding,
        }
    }

    /// Copy of `viewport` with `scale` clamped to this config's zoom range.
    #[must_use]
    pub fn set_zoom(&self, viewport: &ViewportTransform, scale: f64) -> ViewportTransform {
        viewport.with_scale_in(scale, self.min_zoom, self.max_zoom)
    }

    /// Zoom `viewport` about `anchor`, clamped to this config's zoom range.
    #[must_use]
    pub fn zoom_at(&self, viewport: &ViewportTransform, anchor: Point, factor: f64) -> ViewportTransform {
        viewport.zoomed_at_in(anchor, factor, self.min_zoom, self.max_zoom)
    }

    /// Topmost fixture under `screen`, using this config's marker size.
    #[must_use]
    pub fn fixture_at<'a>(
        &self,
        screen: Point,
        fixtures: &'a [PositionedItem],
        viewport: &ViewportTransform,
    ) -> Option<&'a ItemId> {
        topmost_fixture_at(screen, fixtures, viewport, self.fixture_size_px)
    }
}

fn is_positive(value: f64) -> bool {
    value > 0.0 && value.is_finite()
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
