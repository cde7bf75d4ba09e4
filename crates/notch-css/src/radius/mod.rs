//! Corner radius resolution and fitting.
//!
//! [CSS Backgrounds and Borders Level 3 § 5](https://www.w3.org/TR/css-backgrounds-3/#corners)
//!
//! ```text
//! --border-radius-reverse ──┐
//!                           ├─ compute_properties ─→ ResolvedRadii ─ fit(box) ─→ FittedRadii
//! --border-radius-reverse-* ┘
//! ```
//!
//! Corners are always ordered top-left, top-right, bottom-right, bottom-left.

mod fit;
mod resolve;

use std::ops::Index;

use serde::Serialize;
use strum_macros::Display;

use crate::properties::{
    BORDER_RADIUS_REVERSE_BOTTOM_LEFT, BORDER_RADIUS_REVERSE_BOTTOM_RIGHT,
    BORDER_RADIUS_REVERSE_TOP_LEFT, BORDER_RADIUS_REVERSE_TOP_RIGHT,
};
use crate::values::LengthValue;

pub use fit::fit;
pub use resolve::{compute_properties, extract_explicits, extract_shorthand, extract_sides};

/// One of the four corners of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    /// Vertex at `(0, 0)`.
    TopLeft,
    /// Vertex at `(width, 0)`.
    TopRight,
    /// Vertex at `(width, height)`.
    BottomRight,
    /// Vertex at `(0, height)`.
    BottomLeft,
}

impl Corner {
    /// All corners in painting order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Position of this corner in [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The longhand property that sets this corner.
    #[must_use]
    pub const fn property_name(self) -> &'static str {
        match self {
            Self::TopLeft => BORDER_RADIUS_REVERSE_TOP_LEFT,
            Self::TopRight => BORDER_RADIUS_REVERSE_TOP_RIGHT,
            Self::BottomRight => BORDER_RADIUS_REVERSE_BOTTOM_RIGHT,
            Self::BottomLeft => BORDER_RADIUS_REVERSE_BOTTOM_LEFT,
        }
    }

    /// The box vertex this corner's ellipse is centered on.
    #[must_use]
    pub const fn vertex(self, geometry: BoxGeometry) -> (f64, f64) {
        match self {
            Self::TopLeft => (0.0, 0.0),
            Self::TopRight => (geometry.width, 0.0),
            Self::BottomRight => (geometry.width, geometry.height),
            Self::BottomLeft => (0.0, geometry.height),
        }
    }
}

/// Size of the box being painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxGeometry {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl BoxGeometry {
    /// Create a geometry from its dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The two semi-axes of one corner's ellipse, as written.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CornerRadius {
    /// Horizontal semi-axis.
    pub x: LengthValue,
    /// Vertical semi-axis.
    pub y: LengthValue,
}

impl CornerRadius {
    /// Create a radius from both semi-axes.
    #[must_use]
    pub const fn new(x: LengthValue, y: LengthValue) -> Self {
        Self { x, y }
    }

    /// A circular radius: both semi-axes equal.
    #[must_use]
    pub const fn circular(radius: LengthValue) -> Self {
        Self::new(radius, radius)
    }
}

/// Outcome of reading the shorthand property.
///
/// A shorthand that is missing or malformed contributes nothing; it never
/// aborts the paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shorthand {
    /// The shorthand parsed; one radius per corner.
    Resolved([CornerRadius; 4]),
    /// The shorthand was missing or malformed.
    Absent,
}

impl Shorthand {
    /// The radius this shorthand gives `corner`, if it resolved.
    #[must_use]
    pub const fn get(&self, corner: Corner) -> Option<CornerRadius> {
        match self {
            Self::Resolved(corners) => Some(corners[corner.index()]),
            Self::Absent => None,
        }
    }

    /// Whether the shorthand resolved.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// A radius for every corner, before fitting to the box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedRadii([CornerRadius; 4]);

impl ResolvedRadii {
    /// Wrap four radii given in corner order.
    #[must_use]
    pub const fn new(corners: [CornerRadius; 4]) -> Self {
        Self(corners)
    }

    /// The radii in corner order.
    #[must_use]
    pub const fn corners(&self) -> &[CornerRadius; 4] {
        &self.0
    }

    /// Iterate over `(corner, radius)` in corner order.
    pub fn iter(&self) -> impl Iterator<Item = (Corner, CornerRadius)> + '_ {
        Corner::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Index<Corner> for ResolvedRadii {
    type Output = CornerRadius;

    fn index(&self, corner: Corner) -> &CornerRadius {
        &self.0[corner.index()]
    }
}

/// Numeric semi-axes of one corner's ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadiusPair {
    /// Horizontal semi-axis.
    pub x: f64,
    /// Vertical semi-axis.
    pub y: f64,
}

impl RadiusPair {
    /// Create a pair from both semi-axes.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Radii fitted to a box so that curves on a shared edge never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FittedRadii {
    corners: [RadiusPair; 4],
    horizontal_factor: f64,
    vertical_factor: f64,
    scaled: bool,
}

impl FittedRadii {
    /// The fitted radii in corner order.
    #[must_use]
    pub const fn corners(&self) -> &[RadiusPair; 4] {
        &self.corners
    }

    /// Iterate over `(corner, radius)` in corner order.
    pub fn iter(&self) -> impl Iterator<Item = (Corner, RadiusPair)> + '_ {
        Corner::ALL.into_iter().zip(self.corners.iter().copied())
    }

    /// Factor every horizontal semi-axis was (or would have been) scaled by.
    #[must_use]
    pub const fn horizontal_factor(&self) -> f64 {
        self.horizontal_factor
    }

    /// Factor every vertical semi-axis was (or would have been) scaled by.
    #[must_use]
    pub const fn vertical_factor(&self) -> f64 {
        self.vertical_factor
    }

    /// Whether the radii were scaled. `false` means they are the raw
    /// magnitudes, untouched.
    #[must_use]
    pub const fn is_scaled(&self) -> bool {
        self.scaled
    }
}

impl Index<Corner> for FittedRadii {
    type Output = RadiusPair;

    fn index(&self, corner: Corner) -> &RadiusPair {
        &self.corners[corner.index()]
    }
}
