//! Raster canvas for headless painting.
//!
//! Executes [`PaintRenderingContext2D`] calls on a `tiny-skia` pixmap.
//!
//! # Architecture
//!
//! The canvas is the final stage in the pipeline:
//!
//! ```text
//! Properties → Resolve → Fit → Paint → Render
//!                                ↓        ↓
//!                          DisplayList → Pixels
//! ```
//!
//! The canvas knows nothing about radii or custom properties. It only
//! executes drawing calls, either directly from a paint definition or by
//! replaying a display list.
//!
//! [HTML § 4.12.5 The 2D rendering context](https://html.spec.whatwg.org/multipage/canvas.html#2dcontext)

use std::f64::consts::{FRAC_PI_8, TAU};
use std::path::Path as FsPath;

use image::{ImageBuffer, Rgba, RgbaImage};
use notch_common::warning::warn_once;
use notch_css::{
    BoxGeometry, ColorValue, DisplayList, PaintRenderingContext2D, PaintWorkletGlobalScope,
    StylePropertyMap,
};
use tiny_skia::{
    BlendMode, Color, FillRule, Mask, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Rect,
    Transform,
};

use crate::error::RenderError;

/// Largest angle covered by one line segment when flattening a partial arc.
const ARC_STEP: f64 = FRAC_PI_8 / 4.0;

/// The parts of the drawing state that `save` and `restore` act on.
///
/// [§ 4.12.5.1.3 The canvas state](https://html.spec.whatwg.org/multipage/canvas.html#the-canvas-state)
///
/// The current path is not part of the drawing state.
#[derive(Clone)]
struct DrawingState {
    fill_style: Color,
    /// Coverage of the clip region. `None` means unclipped.
    clip: Option<Mask>,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            fill_style: Color::BLACK,
            clip: None,
        }
    }
}

/// Software canvas that rasterizes drawing calls into a pixel buffer.
///
/// Starts out fully transparent, with an opaque black fill style and no clip.
pub struct Canvas {
    pixmap: Pixmap,
    state: DrawingState,
    /// Saved states, innermost last.
    stack: Vec<DrawingState>,
    /// Closed subpaths added since the last `begin_path`.
    path: Vec<Path>,
}

impl Canvas {
    /// Create a transparent canvas.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidSurfaceSize`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RenderError::InvalidSurfaceSize { width, height })?;
        Ok(Self {
            pixmap,
            state: DrawingState::default(),
            stack: Vec::new(),
            path: Vec::new(),
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Execute a display list, in order, against this canvas.
    pub fn render(&mut self, display_list: &DisplayList) {
        display_list.replay(self);
    }

    /// Straight-alpha color of the pixel at `(x, y)`, or `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorValue> {
        // Pixmap::pixel only bounds-checks the flat index.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some(ColorValue::rgba(
            color.red(),
            color.green(),
            color.blue(),
            color.alpha(),
        ))
    }

    /// Number of states currently saved.
    #[must_use]
    pub fn state_depth(&self) -> usize {
        self.stack.len()
    }

    /// The canvas contents as a straight-alpha image.
    #[must_use]
    pub fn to_image(&self) -> RgbaImage {
        pixmap_to_image(&self.pixmap)
    }

    /// The canvas contents drawn over a solid `background` color.
    #[must_use]
    pub fn composite_over(&self, background: ColorValue) -> RgbaImage {
        let mut base = self.pixmap.clone();
        base.fill(to_skia_color(background));
        base.draw_pixmap(
            0,
            0,
            self.pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        pixmap_to_image(&base)
    }

    /// Save the canvas contents to a file.
    ///
    /// The format is inferred from the extension.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Image`] if the image cannot be encoded or written.
    pub fn save_image(&self, path: &FsPath) -> Result<(), RenderError> {
        self.to_image().save(path)?;
        Ok(())
    }

    /// Fill `rect` through the current clip with `paint`.
    fn fill_clipped(&mut self, rect: Rect, paint: &Paint<'_>) {
        self.pixmap
            .fill_rect(rect, paint, Transform::identity(), self.state.clip.as_ref());
    }
}

impl PaintRenderingContext2D for Canvas {
    fn set_fill_style(&mut self, color: ColorValue) {
        self.state.fill_style = to_skia_color(color);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let Some(rect) = normalized_rect(x, y, width, height) else {
            return;
        };
        let mut paint = Paint {
            anti_alias: true,
            ..Paint::default()
        };
        paint.set_color(self.state.fill_style);
        self.fill_clipped(rect, &paint);
    }

    /// [`clearRect`](https://html.spec.whatwg.org/multipage/canvas.html#dom-context-2d-clearrect)
    ///
    /// "Clear all pixels on the bitmap in the specified rectangle to
    /// transparent black", within the clipping region.
    ///
    /// An opaque source under `DestinationOut` leaves dst × (1 − coverage),
    /// so partially covered mask pixels are only partially cleared.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let Some(rect) = normalized_rect(x, y, width, height) else {
            return;
        };
        let paint = Paint {
            blend_mode: BlendMode::DestinationOut,
            anti_alias: true,
            ..Paint::default()
        };
        self.fill_clipped(rect, &paint);
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    /// "If the stack is empty, then return."
    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    ) {
        if radius_x < 0.0 || radius_y < 0.0 {
            warn_once(
                "Render",
                &format!("ignoring ellipse with negative radius ({radius_x}, {radius_y})"),
            );
            return;
        }
        if let Some(path) =
            ellipse_path(x, y, radius_x, radius_y, rotation, start_angle, end_angle)
        {
            self.path.push(path);
        }
    }

    /// [`clip`](https://html.spec.whatwg.org/multipage/canvas.html#dom-context-2d-clip)
    ///
    /// The new clip region is the intersection of the current one and the
    /// area of the current path. An empty path clips everything away.
    #[allow(clippy::cast_possible_truncation)]
    fn clip(&mut self) {
        let Some(mut mask) = Mask::new(self.pixmap.width(), self.pixmap.height()) else {
            return;
        };
        for path in &self.path {
            mask.fill_path(path, FillRule::Winding, true, Transform::identity());
        }
        if let Some(current) = &self.state.clip {
            for (coverage, existing) in mask.data_mut().iter_mut().zip(current.data()) {
                *coverage = ((u16::from(*coverage) * u16::from(*existing) + 127) / 255) as u8;
            }
        }
        self.state.clip = Some(mask);
    }
}

/// Size a canvas to `geometry`, rounded up, and run the paint registered as `name`.
///
/// # Errors
///
/// Returns [`RenderError::InvalidSurfaceSize`] if the box rounds to zero
/// pixels, or [`RenderError::Paint`] if the paint fails.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn paint_to_canvas(
    scope: &PaintWorkletGlobalScope,
    name: &str,
    geometry: BoxGeometry,
    props: &StylePropertyMap,
) -> Result<Canvas, RenderError> {
    let mut canvas = Canvas::new(
        geometry.width.max(0.0).ceil() as u32,
        geometry.height.max(0.0).ceil() as u32,
    )?;
    scope.invoke(name, &mut canvas, geometry, props)?;
    Ok(canvas)
}

/// A rectangle with negative extents flipped onto its positive form.
#[allow(clippy::cast_possible_truncation)]
fn normalized_rect(x: f64, y: f64, width: f64, height: f64) -> Option<Rect> {
    let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
    let (y, height) = if height < 0.0 { (y + height, -height) } else { (y, height) };
    Rect::from_xywh(x as f32, y as f32, width as f32, height as f32)
}

/// A closed path for an elliptical arc.
///
/// A sweep of a full turn or more is an exact oval. Shorter sweeps are
/// flattened to line segments and closed with a chord.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::too_many_arguments
)]
fn ellipse_path(
    x: f64,
    y: f64,
    radius_x: f64,
    radius_y: f64,
    rotation: f64,
    start_angle: f64,
    end_angle: f64,
) -> Option<Path> {
    let sweep = end_angle - start_angle;
    let path = if sweep.abs() >= TAU {
        let bounds = Rect::from_xywh(
            (x - radius_x) as f32,
            (y - radius_y) as f32,
            (radius_x * 2.0) as f32,
            (radius_y * 2.0) as f32,
        )?;
        PathBuilder::from_oval(bounds)?
    } else {
        let steps = (sweep.abs() / ARC_STEP).ceil().max(1.0) as u32;
        let mut builder = PathBuilder::new();
        for step in 0..=steps {
            let angle = sweep.mul_add(f64::from(step) / f64::from(steps), start_angle);
            let px = radius_x.mul_add(angle.cos(), x) as f32;
            let py = radius_y.mul_add(angle.sin(), y) as f32;
            if step == 0 {
                builder.move_to(px, py);
            } else {
                builder.line_to(px, py);
            }
        }
        builder.close();
        builder.finish()?
    };
    path.transform(Transform::from_rotate_at(
        rotation.to_degrees() as f32,
        x as f32,
        y as f32,
    ))
}

fn to_skia_color(color: ColorValue) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn pixmap_to_image(pixmap: &Pixmap) -> RgbaImage {
    ImageBuffer::from_fn(pixmap.width(), pixmap.height(), |x, y| {
        pixmap.pixel(x, y).map_or(Rgba([0, 0, 0, 0]), |pixel| {
            let color = pixel.demultiply();
            Rgba([color.red(), color.green(), color.blue(), color.alpha()])
        })
    })
}
