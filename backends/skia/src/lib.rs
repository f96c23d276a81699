//! CPU rasterizer for [`curvebar`] scenes, built on `tiny-skia`.
//!
//! [`Renderer`] takes a [`BarScene`](curvebar::BarScene) and the pixels
//! currently behind the bar, and composites the notched material, the
//! highlight circle and the tab icons on top of them.
//!
//! ```rust,ignore
//! let renderer = Renderer::new(style.materials);
//! let frame = renderer.render(&scene, &content)?;
//! std::fs::write("bar.png", encode_png(&frame)?)?;
//! ```

mod blur;
mod convert;
mod error;
mod icon;
mod renderer;

pub use blur::blur;
pub use error::RenderError;
pub use icon::draw_icon;
pub use renderer::{Renderer, encode_png, surface};
