use thiserror::Error;

/// Errors that can occur while rasterizing a bar scene.
#[derive(Debug, Error)]
pub enum RenderError {
    /// `tiny-skia` refused to allocate a surface of this size.
    #[error("cannot allocate a {width}x{height} surface")]
    InvalidSurface {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// The scene's frame does not fit on the content surface.
    #[error("bar frame {frame_width}x{frame_height} at y={frame_y} does not fit a {width}x{height} surface")]
    SizeMismatch {
        /// Bar width in points.
        frame_width: f32,
        /// Bar height in points.
        frame_height: f32,
        /// Top edge of the bar in screen coordinates.
        frame_y: f32,
        /// Surface width in pixels.
        width: u32,
        /// Surface height in pixels.
        height: u32,
    },
    /// PNG encoding failed.
    #[error("failed to encode png: {0}")]
    Encode(String),
}
