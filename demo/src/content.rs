//! Placeholder screens shown behind the bar.

use curvebar::{Point, Rgba, Tab, TabItem};
use curvebar_skia::{RenderError, draw_icon, surface};
use tiny_skia::{Color, FillRule, Paint, Path, PathBuilder, Pixmap, Transform};

const CARD_HEIGHT: f32 = 160.0;
const CARD_GAP: f32 = 20.0;
const MARGIN: f32 = 20.0;

/// Paints the screen for `tab`.
///
/// Home shows a column of purple cards that runs behind the bar, so the
/// blur has something to work on. The other tabs show their glyph large in
/// the middle of a plain background.
///
/// # Errors
///
/// Fails if the surface cannot be allocated.
pub fn screen(tab: Tab, width: u32, height: u32) -> Result<Pixmap, RenderError> {
    let mut pixmap = surface(width, height)?;
    pixmap.fill(Color::from_rgba8(13, 13, 18, 255));

    if tab == Tab::Home {
        draw_cards(&mut pixmap);
    } else {
        draw_marker(&mut pixmap, tab);
    }
    Ok(pixmap)
}

#[allow(clippy::cast_precision_loss)]
fn draw_marker(pixmap: &mut Pixmap, tab: Tab) {
    let center = Point::new(pixmap.width() as f32 / 2.0, pixmap.height() as f32 / 3.0);
    let size = (pixmap.width() as f32 / 3.0).min(160.0);
    draw_icon(pixmap, tab.icon(), center, size, Rgba::new(0.6, 0.6, 0.65, 1.0));
}

#[allow(clippy::cast_precision_loss)]
fn draw_cards(pixmap: &mut Pixmap) {
    let width = pixmap.width() as f32;
    let height = pixmap.height() as f32;
    let mut paint = Paint::default();
    paint.anti_alias = true;

    let mut top = MARGIN;
    let mut index = 0_u8;
    while top < height {
        // Alternate two shades so the blur shows.
        let shade = if index % 2 == 0 {
            Color::from_rgba8(124, 77, 255, 255)
        } else {
            Color::from_rgba8(179, 136, 255, 255)
        };
        paint.set_color(shade);
        if let Some(card) = rounded_rect(MARGIN, top, width - 2.0 * MARGIN, CARD_HEIGHT, 16.0) {
            pixmap.fill_path(&card, &paint, FillRule::Winding, Transform::identity(), None);
        }
        top += CARD_HEIGHT + CARD_GAP;
        index = index.wrapping_add(1);
    }
}

fn rounded_rect(x: f32, y: f32, width: f32, height: f32, radius: f32) -> Option<Path> {
    let r = radius.min(width / 2.0).min(height / 2.0);
    let (right, bottom) = (x + width, y + height);

    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(right - r, y);
    pb.quad_to(right, y, right, y + r);
    pb.line_to(right, bottom - r);
    pb.quad_to(right, bottom, right - r, bottom);
    pb.line_to(x + r, bottom);
    pb.quad_to(x, bottom, x, bottom - r);
    pb.line_to(x, y + r);
    pb.quad_to(x, y, x + r, y);
    pb.close();
    pb.finish()
}
