//! chart-adorn: colour-bar and smoothed-trend adornment layout.
//!
//! This crate lays out 2D chart adornments, axis-attached colour bars and
//! smoothed trend overlays, as backend-agnostic renderable layers. All
//! operations are pure transforms from specs and data to layers; a host
//! plotting framework supplies the drawing backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ColorBarSpec, SmoothPlot, add_color_bar, render_color_bar, render_smooth_plot};
pub use error::{LayoutError, LayoutResult};
