//! The `border-radius-reverse` painter.
//!
//! Fills the whole box, then clears a quarter-ellipse at each corner: the
//! inverse of a rounded rectangle.

use std::f64::consts::TAU;

use notch_common::warning::warn_once;

use super::context::PaintRenderingContext2D;
use super::worklet::PaintDefinition;
use crate::error::PaintError;
use crate::properties::{BORDER_RADIUS_REVERSE_COLOR, INPUT_PROPERTIES, StylePropertyMap};
use crate::radius::{BoxGeometry, Corner, FittedRadii, RadiusPair, compute_properties, fit};
use crate::values::ColorValue;

/// Paint definition registered as `border-radius-reverse`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorderRadiusReversePainter;

impl BorderRadiusReversePainter {
    /// The name the painter registers under.
    pub const NAME: &'static str = "border-radius-reverse";
}

impl PaintDefinition for BorderRadiusReversePainter {
    fn input_properties(&self) -> &[&'static str] {
        &INPUT_PROPERTIES
    }

    fn paint(
        &self,
        context: &mut dyn PaintRenderingContext2D,
        geometry: BoxGeometry,
        props: &StylePropertyMap,
    ) -> Result<(), PaintError> {
        let radii = fit(&compute_properties(props)?, geometry);
        draw(context, geometry, &radii, resolve_color(props));
        Ok(())
    }
}

/// Read `--border-radius-reverse-color`.
///
/// Returns `None` when the property is missing or not a color. The context's
/// fill style is then left alone, the same way a canvas ignores an invalid
/// `fillStyle` assignment.
#[must_use]
pub fn resolve_color(props: &StylePropertyMap) -> Option<ColorValue> {
    let raw = props.get(BORDER_RADIUS_REVERSE_COLOR)?;
    let color = ColorValue::parse(raw);
    if color.is_none() {
        warn_once(
            "Paint",
            &format!("ignoring {BORDER_RADIUS_REVERSE_COLOR}: '{raw}' is not a color"),
        );
    }
    color
}

/// Fill `geometry` and cut a quarter-ellipse out of each corner.
///
/// Every cutout is bracketed by `save`/`restore`, so the context's clip
/// region is the same before and after.
pub fn draw(
    context: &mut dyn PaintRenderingContext2D,
    geometry: BoxGeometry,
    radii: &FittedRadii,
    color: Option<ColorValue>,
) {
    if let Some(color) = color {
        context.set_fill_style(color);
    }
    context.fill_rect(0.0, 0.0, geometry.width, geometry.height);

    for corner in Corner::ALL {
        clear_ellipse(context, corner.vertex(geometry), radii[corner]);
    }
}

/// Clip to a full ellipse centered on `(x, y)` and clear its bounding box.
///
/// Only the quarter inside the box has anything to clear.
fn clear_ellipse(
    context: &mut dyn PaintRenderingContext2D,
    (x, y): (f64, f64),
    RadiusPair { x: radius_x, y: radius_y }: RadiusPair,
) {
    context.save();
    context.begin_path();
    context.ellipse(x, y, radius_x, radius_y, 0.0, 0.0, TAU);
    context.clip();
    context.clear_rect(x - radius_x, y - radius_y, radius_x * 2.0, radius_y * 2.0);
    context.restore();
}
