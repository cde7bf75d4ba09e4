//! Painting
//!
//! [CSS Painting API Level 1](https://www.w3.org/TR/css-paint-api-1/)
//!
//! A paint definition draws into a [`PaintRenderingContext2D`]. The context
//! can be a [`DisplayList`] that records the calls, or any rasterizing
//! surface that implements the trait:
//!
//! ```text
//! Properties → Resolve → Fit → Paint → Render
//!                                ↓
//!                          DisplayList
//! ```

mod context;
mod display_list;
mod painter;
mod worklet;

pub use context::PaintRenderingContext2D;
pub use display_list::{DisplayCommand, DisplayList};
pub use painter::{BorderRadiusReversePainter, draw, resolve_color};
pub use worklet::{PaintDefinition, PaintWorkletGlobalScope};
