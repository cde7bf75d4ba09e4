//! Software rendering for Notch paint output.
//!
//! # Scope
//!
//! This crate provides:
//! - **Canvas** - a raster [`PaintRenderingContext2D`](notch_css::PaintRenderingContext2D)
//!   backed by `tiny-skia`, with save/restore state and mask clipping
//! - **Display list replay** - rasterize a recorded [`DisplayList`](notch_css::DisplayList)
//! - **Image export** - convert or save the surface through the `image` crate
//!
//! # Not Yet Implemented
//!
//! - Transforms other than an ellipse's own rotation
//! - Strokes, gradients, and patterns

/// The raster drawing surface.
pub mod canvas;
/// Rendering error type.
pub mod error;

pub use notch_css as css;

pub use canvas::{Canvas, paint_to_canvas};
pub use error::RenderError;
