use crate::values::ColorValue;

/// The drawing surface handed to a paint definition.
///
/// [HTML § 4.12.5.1 The 2D rendering context](https://html.spec.whatwg.org/multipage/canvas.html#2dcontext)
///
/// The subset of `CanvasRenderingContext2D` a `PaintRenderingContext2D`
/// exposes that painters in this crate use. Semantics follow the canvas:
///
/// - fill style and clip region are drawing state, pushed by `save` and popped
///   by `restore`; `restore` with nothing saved does nothing
/// - the current path is not drawing state
/// - `clip` intersects the clip region with the current path
/// - `clear_rect` sets pixels inside the rectangle and the clip region to
///   transparent black
pub trait PaintRenderingContext2D {
    /// Set the color used by `fill_rect`.
    fn set_fill_style(&mut self, color: ColorValue);

    /// Paint a rectangle with the current fill style, within the clip region.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Clear a rectangle to transparent black, within the clip region.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Push the drawing state.
    fn save(&mut self);

    /// Pop the drawing state.
    fn restore(&mut self);

    /// Empty the current path.
    fn begin_path(&mut self);

    /// Add an elliptical arc to the current path.
    ///
    /// Angles are in radians, measured clockwise from the positive x-axis;
    /// `rotation` turns the ellipse around its center.
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    );

    /// Intersect the clip region with the current path.
    fn clip(&mut self);
}
