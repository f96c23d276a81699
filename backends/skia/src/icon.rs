//! Vector glyphs for the built-in tab icons.
//!
//! Glyphs are drawn in a unit square and scaled into the icon box at draw
//! time. Unknown icon names fall back to a dot.

use curvebar::{Point, Rgba};
use tiny_skia::{FillRule, LineCap, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use crate::convert::color;

enum Glyph {
    Fill(Path),
    Stroke(Path, f32),
}

fn house() -> Option<Vec<Glyph>> {
    let mut pb = PathBuilder::new();
    pb.move_to(0.5, 0.06);
    pb.line_to(0.98, 0.5);
    pb.line_to(0.84, 0.5);
    pb.line_to(0.84, 0.94);
    pb.line_to(0.6, 0.94);
    pb.line_to(0.6, 0.66);
    pb.line_to(0.4, 0.66);
    pb.line_to(0.4, 0.94);
    pb.line_to(0.16, 0.94);
    pb.line_to(0.16, 0.5);
    pb.line_to(0.02, 0.5);
    pb.close();
    Some(vec![Glyph::Fill(pb.finish()?)])
}

fn magnifying_glass() -> Option<Vec<Glyph>> {
    let lens = PathBuilder::from_circle(0.42, 0.42, 0.3)?;
    let mut handle = PathBuilder::new();
    handle.move_to(0.64, 0.64);
    handle.line_to(0.92, 0.92);
    Some(vec![
        Glyph::Stroke(lens, 0.1),
        Glyph::Stroke(handle.finish()?, 0.12),
    ])
}

fn bell() -> Option<Vec<Glyph>> {
    let mut body = PathBuilder::new();
    body.move_to(0.5, 0.08);
    body.cubic_to(0.72, 0.08, 0.8, 0.26, 0.8, 0.44);
    body.line_to(0.8, 0.64);
    body.line_to(0.92, 0.78);
    body.line_to(0.08, 0.78);
    body.line_to(0.2, 0.64);
    body.line_to(0.2, 0.44);
    body.cubic_to(0.2, 0.26, 0.28, 0.08, 0.5, 0.08);
    body.close();
    let clapper = PathBuilder::from_circle(0.5, 0.86, 0.09)?;
    Some(vec![Glyph::Fill(body.finish()?), Glyph::Fill(clapper)])
}

fn person() -> Option<Vec<Glyph>> {
    let head = PathBuilder::from_circle(0.5, 0.28, 0.2)?;
    let mut shoulders = PathBuilder::new();
    shoulders.move_to(0.1, 0.94);
    shoulders.cubic_to(0.1, 0.66, 0.28, 0.54, 0.5, 0.54);
    shoulders.cubic_to(0.72, 0.54, 0.9, 0.66, 0.9, 0.94);
    shoulders.close();
    Some(vec![Glyph::Fill(head), Glyph::Fill(shoulders.finish()?)])
}

fn dot() -> Option<Vec<Glyph>> {
    Some(vec![Glyph::Fill(PathBuilder::from_circle(0.5, 0.5, 0.2)?)])
}

fn glyphs(name: &str) -> Option<Vec<Glyph>> {
    match name {
        "house.fill" => house(),
        "magnifyingglass" => magnifying_glass(),
        "bell.fill" => bell(),
        "person.fill" => person(),
        _ => dot(),
    }
}

/// Draws the icon called `name` into the square box `size` wide whose
/// top-left corner is `transform` applied to `(left, top)`.
pub(crate) fn draw(
    pixmap: &mut Pixmap,
    name: &str,
    left: f32,
    top: f32,
    size: f32,
    paint: &Paint<'_>,
    transform: Transform,
) {
    let Some(glyphs) = glyphs(name) else {
        tracing::trace!(name, "icon glyph failed to build");
        return;
    };
    let transform = transform.pre_translate(left, top).pre_scale(size, size);

    for glyph in glyphs {
        match glyph {
            Glyph::Fill(path) => {
                pixmap.fill_path(&path, paint, FillRule::Winding, transform, None);
            }
            Glyph::Stroke(path, width) => {
                let stroke = Stroke {
                    width,
                    line_cap: LineCap::Round,
                    ..Stroke::default()
                };
                pixmap.stroke_path(&path, paint, &stroke, transform, None);
            }
        }
    }
}

/// Draws the glyph for `icon` in a `size`-wide square centered on `center`.
///
/// `icon` takes the same symbol names as [`TabItem::icon`](curvebar::TabItem::icon).
pub fn draw_icon(pixmap: &mut Pixmap, icon: &str, center: Point, size: f32, tint: Rgba) {
    let mut paint = Paint::default();
    paint.set_color(color(tint));
    paint.anti_alias = true;
    let left = size.mul_add(-0.5, center.x);
    let top = size.mul_add(-0.5, center.y);
    draw(pixmap, icon, left, top, size, &paint, Transform::identity());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::Color;

    fn painted(name: &str) -> usize {
        let mut pixmap = Pixmap::new(40, 40).unwrap();
        let mut paint = Paint::default();
        paint.set_color(Color::WHITE);
        draw(&mut pixmap, name, 5.0, 5.0, 25.0, &paint, Transform::identity());
        pixmap.pixels().iter().filter(|px| px.alpha() > 0).count()
    }

    #[test]
    fn every_builtin_icon_draws_something() {
        for name in ["house.fill", "magnifyingglass", "bell.fill", "person.fill"] {
            assert!(painted(name) > 20, "{name} drew nothing");
        }
    }

    #[test]
    fn unknown_icon_is_a_small_dot() {
        let dot = painted("questionmark");
        assert!(dot > 0);
        assert!(dot < painted("house.fill"));
    }

    #[test]
    fn public_drawer_centers_the_glyph() {
        let mut pixmap = Pixmap::new(40, 40).unwrap();
        draw_icon(&mut pixmap, "person.fill", Point::new(20.0, 20.0), 30.0, Rgba::WHITE);
        assert!(pixmap.pixel(20, 10).unwrap().alpha() > 0);
        assert_eq!(pixmap.pixel(1, 1).unwrap().alpha(), 0);
    }

    #[test]
    fn icon_stays_inside_its_box() {
        let mut pixmap = Pixmap::new(40, 40).unwrap();
        let mut paint = Paint::default();
        paint.set_color(Color::WHITE);
        draw(&mut pixmap, "house.fill", 5.0, 5.0, 25.0, &paint, Transform::identity());
        for (i, px) in pixmap.pixels().iter().enumerate() {
            if px.alpha() > 0 {
                let (x, y) = (i % 40, i / 40);
                assert!((4..=31).contains(&x) && (4..=31).contains(&y), "({x}, {y})");
            }
        }
    }
}
