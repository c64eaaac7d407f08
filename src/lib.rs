//! Geometry engine for the lighting console's drag-and-drop canvases.
//!
//! Two surfaces share this crate: the Scene Board, where scene buttons are
//! laid out on a zoomable canvas, and the 2D Layout editor, where fixtures are
//! placed as constant-size markers. The UI layer feeds raw pointer positions
//! and viewport state in and gets canvas positions, hit results and corrected
//! layouts back. Every function is pure; callers own all item data.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geom`] | `Point`, `Rect`, `PositionedItem` and friends |
//! | [`scalar`] | `clamp` and `snap_to_grid` |
//! | [`viewport`] | Pan/zoom transform and screen <-> canvas conversion |
//! | [`hit`] | Hit-testing fixtures and buttons under the pointer |
//! | [`collision`] | Axis-aligned overlap test with padding |
//! | [`placement`] | Grid-scan auto-placement with cascade fallback |
//! | [`recalibrate`] | Uniform shift that pulls a dragged layout back in bounds |
//! | [`auto_layout`] | Near-square grid seeding for unplaced items |
//! | [`legacy`] | Fractional (0..1) position conversion |
//! | [`config`] | Canvas settings from the environment |
//! | [`consts`] | Shared numeric constants (zoom limits, grid step, etc.) |

pub mod auto_layout;
pub mod collision;
pub mod config;
pub mod consts;
pub mod geom;
pub mod hit;
pub mod legacy;
pub mod placement;
pub mod recalibrate;
pub mod scalar;
pub mod viewport;
