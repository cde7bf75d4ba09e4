//! Reverse border radius: style values, radius resolution, and painting.
//!
//! # Scope
//!
//! This crate implements:
//! - **Style Values** ([CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/))
//!   - `<length>` and `<percentage>` tokens as a magnitude plus a unit
//!   - Color values (hex, named colors, `rgb()`/`hsl()`)
//!
//! - **Corner Radius Resolution**
//!   - `--border-radius-reverse` shorthand with the `border-radius` 1-4 value
//!     side lists and an optional `/` vertical list
//!   - Per-corner longhands that override the shorthand
//!   - Per-axis overlap fitting ([§ 5.5 Overlapping Curves](https://www.w3.org/TR/css-backgrounds-3/#corner-overlap))
//!
//! - **Painting** ([CSS Painting API Level 1](https://www.w3.org/TR/css-paint-api-1/))
//!   - A canvas-like drawing surface trait
//!   - A recording display list
//!   - A paint worklet scope with the `border-radius-reverse` painter
//!
//! # Not Yet Implemented
//!
//! - Percentage radii resolved against the box (magnitudes are used as-is)
//! - Fractional and signed magnitudes

/// Error types for value parsing and painting.
pub mod error;
/// Painting surfaces, the painter, and the paint worklet registry.
pub mod paint;
/// Property names and the read-only property map handed to painters.
pub mod properties;
/// Corner radius resolution and fitting.
pub mod radius;
/// Length and color values.
pub mod values;

// Re-exports for convenience
pub use error::{PaintError, ValueError};
pub use paint::{
    BorderRadiusReversePainter, DisplayCommand, DisplayList, PaintDefinition,
    PaintRenderingContext2D, PaintWorkletGlobalScope,
};
pub use properties::StylePropertyMap;
pub use radius::{
    BoxGeometry, Corner, CornerRadius, FittedRadii, RadiusPair, ResolvedRadii, Shorthand,
    compute_properties, extract_explicits, extract_shorthand, extract_sides, fit,
};
pub use values::{ColorValue, LengthUnit, LengthValue, parse_length, sanitize_tokens};
