use curvebar::{BarScene, MaterialPalette, MaterialStyle, Rgba};
use tiny_skia::{FillRule, Mask, Paint, PathBuilder, Pixmap, PixmapPaint, Transform};

use crate::{
    blur::blur,
    convert::{build_path, color},
    error::RenderError,
    icon,
};

/// Allocates a transparent surface.
///
/// # Errors
///
/// Returns [`RenderError::InvalidSurface`] when either dimension is zero or
/// the surface would be too large.
pub fn surface(width: u32, height: u32) -> Result<Pixmap, RenderError> {
    Pixmap::new(width, height).ok_or(RenderError::InvalidSurface { width, height })
}

/// Encodes a rendered frame as PNG.
///
/// # Errors
///
/// Returns [`RenderError::Encode`] if the encoder fails.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    pixmap
        .encode_png()
        .map_err(|err| RenderError::Encode(err.to_string()))
}

/// Rasterizes bar scenes on top of existing content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    palette: MaterialPalette,
    icon_color: Rgba,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(MaterialPalette::default())
    }
}

impl Renderer {
    /// Creates a renderer that resolves materials through `palette`.
    #[must_use]
    pub const fn new(palette: MaterialPalette) -> Self {
        Self {
            palette,
            icon_color: Rgba::WHITE,
        }
    }

    /// Uses `color` for the tab icons instead of white.
    #[must_use]
    pub const fn with_icon_color(mut self, color: Rgba) -> Self {
        self.icon_color = color;
        self
    }

    /// Renders `scene` over a copy of `content` and returns the new frame.
    ///
    /// # Errors
    ///
    /// See [`Renderer::render_onto`].
    pub fn render<T>(&self, scene: &BarScene<T>, content: &Pixmap) -> Result<Pixmap, RenderError> {
        let mut target = content.clone();
        self.render_onto(scene, &mut target)?;
        Ok(target)
    }

    /// Renders `scene` directly into `target`.
    ///
    /// `target` holds whatever is behind the bar; the bar's materials blur it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::SizeMismatch`] if the bar frame lies outside
    /// `target`.
    pub fn render_onto<T>(&self, scene: &BarScene<T>, target: &mut Pixmap) -> Result<(), RenderError> {
        check_fits(scene, target)?;
        let frame = scene.frame;
        let transform = Transform::from_translate(frame.x(), frame.y());

        match build_path(&scene.backdrop.clip) {
            Some(clip) => {
                let style = self.palette.style(scene.backdrop.material);
                apply_material(target, &clip, transform, style)?;
            }
            None => tracing::trace!("empty backdrop, skipping material"),
        }

        if let Some(highlight) = scene.highlight {
            let circle = highlight.circle;
            if let Some(shape) =
                PathBuilder::from_circle(circle.center.x, circle.center.y, circle.radius)
            {
                let style = self.palette.style(highlight.material);
                apply_material(target, &shape, transform, style)?;
            }
        }

        let mut paint = Paint::default();
        paint.set_color(color(self.icon_color));
        paint.anti_alias = true;
        for button in &scene.buttons {
            let size = button.icon_size.width;
            icon::draw(
                target,
                button.icon,
                size.mul_add(-0.5, button.icon_center.x),
                size.mul_add(-0.5, button.icon_center.y),
                size,
                &paint,
                transform,
            );
        }

        tracing::trace!(
            buttons = scene.buttons.len(),
            anchor = ?scene.anchor,
            "rendered tab bar"
        );
        Ok(())
    }
}

#[allow(clippy::cast_precision_loss)]
fn check_fits<T>(scene: &BarScene<T>, target: &Pixmap) -> Result<(), RenderError> {
    let frame = scene.frame;
    let width = target.width();
    let height = target.height();
    let fits = frame.x() >= 0.0
        && frame.y() >= 0.0
        && frame.max_x() <= width as f32
        && frame.max_y() <= height as f32;
    if fits {
        Ok(())
    } else {
        Err(RenderError::SizeMismatch {
            frame_width: frame.width(),
            frame_height: frame.height(),
            frame_y: frame.y(),
            width,
            height,
        })
    }
}

/// Blurs what lies under `shape` and lays the material's tint over it.
fn apply_material(
    target: &mut Pixmap,
    shape: &tiny_skia::Path,
    transform: Transform,
    style: MaterialStyle,
) -> Result<(), RenderError> {
    let (width, height) = (target.width(), target.height());
    let mut mask = Mask::new(width, height).ok_or(RenderError::InvalidSurface { width, height })?;
    mask.fill_path(shape, FillRule::Winding, true, transform);

    let blurred = blur(target, style.blur_radius);
    target.draw_pixmap(
        0,
        0,
        blurred.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        Some(&mask),
    );

    let mut paint = Paint::default();
    paint.set_color(color(style.tint));
    paint.anti_alias = true;
    target.fill_path(shape, &paint, FillRule::Winding, transform, None);
    Ok(())
}
