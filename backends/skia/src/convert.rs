//! Conversions from curvebar's value types into `tiny-skia` ones.

use curvebar::{Path, PathElement, Rgba};
use tiny_skia::{Color, PathBuilder};

/// Builds a `tiny-skia` path. Returns `None` for empty or degenerate paths.
pub(crate) fn build_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();

    for element in path.elements() {
        match element {
            PathElement::MoveTo(p) => builder.move_to(p.x, p.y),
            PathElement::LineTo(p) => builder.line_to(p.x, p.y),
            PathElement::QuadTo(c, p) => builder.quad_to(c.x, c.y, p.x, p.y),
            PathElement::CurveTo(c1, c2, p) => builder.cubic_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
            PathElement::Close => builder.close(),
        }
    }

    builder.finish()
}

#[inline]
pub(crate) fn color(rgba: Rgba) -> Color {
    Color::from_rgba(
        rgba.r.clamp(0.0, 1.0),
        rgba.g.clamp(0.0, 1.0),
        rgba.b.clamp(0.0, 1.0),
        rgba.a.clamp(0.0, 1.0),
    )
    .unwrap_or(Color::TRANSPARENT)
}
