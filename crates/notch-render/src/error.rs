use notch_css::PaintError;
use thiserror::Error;

/// Failure while creating, painting, or exporting a canvas.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A pixmap cannot have a zero width or height.
    #[error("cannot create a {width}x{height} surface")]
    InvalidSurfaceSize {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The paint definition failed.
    #[error(transparent)]
    Paint(#[from] PaintError),

    /// Encoding or writing the image failed.
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}
