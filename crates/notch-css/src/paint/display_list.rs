//! Display List - a recorded sequence of drawing commands
//!
//! Painting into a [`DisplayList`] captures exactly which calls a paint
//! definition made. The list can be inspected, or replayed onto a rasterizing
//! context later.

use super::context::PaintRenderingContext2D;
use crate::values::ColorValue;

/// A single recorded call on a [`PaintRenderingContext2D`].
///
/// Commands are stored in the order they were issued.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCommand {
    /// Set the fill style.
    SetFillStyle {
        /// The new fill color.
        color: ColorValue,
    },

    /// Fill a rectangle with the current fill style.
    FillRect {
        /// X coordinate of the rectangle's top-left corner.
        x: f64,
        /// Y coordinate of the rectangle's top-left corner.
        y: f64,
        /// Width of the rectangle in pixels.
        width: f64,
        /// Height of the rectangle in pixels.
        height: f64,
    },

    /// Clear a rectangle to transparent black.
    ClearRect {
        /// X coordinate of the rectangle's top-left corner.
        x: f64,
        /// Y coordinate of the rectangle's top-left corner.
        y: f64,
        /// Width of the rectangle in pixels.
        width: f64,
        /// Height of the rectangle in pixels.
        height: f64,
    },

    /// Push the drawing state.
    Save,

    /// Pop the drawing state.
    Restore,

    /// Empty the current path.
    BeginPath,

    /// Add an elliptical arc to the current path.
    Ellipse {
        /// X coordinate of the center.
        x: f64,
        /// Y coordinate of the center.
        y: f64,
        /// Horizontal semi-axis.
        radius_x: f64,
        /// Vertical semi-axis.
        radius_y: f64,
        /// Rotation of the ellipse in radians.
        rotation: f64,
        /// Start angle in radians.
        start_angle: f64,
        /// End angle in radians.
        end_angle: f64,
    },

    /// Intersect the clip region with the current path.
    Clip,
}

/// A list of drawing commands in the order they were issued.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command to the display list.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    /// Get the commands in issue order.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// Get the number of commands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the display list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Save nesting depth after the last command.
    ///
    /// Unmatched `Restore` commands are ignored, as they are on a canvas.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.commands
            .iter()
            .fold(0usize, |depth, command| match command {
                DisplayCommand::Save => depth + 1,
                DisplayCommand::Restore => depth.saturating_sub(1),
                _ => depth,
            })
    }

    /// Re-issue every command, in order, on `context`.
    pub fn replay(&self, context: &mut dyn PaintRenderingContext2D) {
        for command in &self.commands {
            match *command {
                DisplayCommand::SetFillStyle { color } => context.set_fill_style(color),
                DisplayCommand::FillRect {
                    x,
                    y,
                    width,
                    height,
                } => context.fill_rect(x, y, width, height),
                DisplayCommand::ClearRect {
                    x,
                    y,
                    width,
                    height,
                } => context.clear_rect(x, y, width, height),
                DisplayCommand::Save => context.save(),
                DisplayCommand::Restore => context.restore(),
                DisplayCommand::BeginPath => context.begin_path(),
                DisplayCommand::Ellipse {
                    x,
                    y,
                    radius_x,
                    radius_y,
                    rotation,
                    start_angle,
                    end_angle,
                } => context.ellipse(x, y, radius_x, radius_y, rotation, start_angle, end_angle),
                DisplayCommand::Clip => context.clip(),
            }
        }
    }
}

impl PaintRenderingContext2D for DisplayList {
    fn set_fill_style(&mut self, color: ColorValue) {
        self.push(DisplayCommand::SetFillStyle { color });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push(DisplayCommand::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push(DisplayCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn save(&mut self) {
        self.push(DisplayCommand::Save);
    }

    fn restore(&mut self) {
        self.push(DisplayCommand::Restore);
    }

    fn begin_path(&mut self) {
        self.push(DisplayCommand::BeginPath);
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
        self.push(DisplayCommand::Ellipse {
            x,
            y,
            radius_x,
            radius_y,
            rotation,
            start_angle,
            end_angle,
        });
    }

    fn clip(&mut self) {
        self.push(DisplayCommand::Clip);
    }
}
