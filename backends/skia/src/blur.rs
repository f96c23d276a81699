//! Approximate gaussian blur for material backdrops.
//!
//! Three successive box blurs converge on a gaussian. The pixmap data is
//! premultiplied RGBA, which averages correctly channel by channel.

use tiny_skia::Pixmap;

const PASSES: usize = 3;

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Returns a blurred copy of `pixmap`.
///
/// `radius` is the visual extent of the blur in pixels; a radius below one
/// pixel returns an unmodified copy.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn blur(pixmap: &Pixmap, radius: f32) -> Pixmap {
    let mut out = pixmap.clone();
    if !radius.is_finite() {
        return out;
    }
    let box_radius = (radius.max(0.0) / PASSES as f32).round() as usize;
    if box_radius == 0 {
        return out;
    }

    let width = pixmap.width() as usize;
    let height = pixmap.height() as usize;
    let mut scratch = vec![0_u8; out.data().len()];
    for _ in 0..PASSES {
        box_blur(out.data(), &mut scratch, width, height, box_radius, Axis::Horizontal);
        box_blur(&scratch, out.data_mut(), width, height, box_radius, Axis::Vertical);
    }
    out
}

/// One sliding-window box blur along `axis`. Edges are clamped.
#[allow(clippy::cast_possible_truncation)]
fn box_blur(src: &[u8], dst: &mut [u8], width: usize, height: usize, radius: usize, axis: Axis) {
    let (lines, len, line_stride, step) = match axis {
        Axis::Horizontal => (height, width, width * 4, 4),
        Axis::Vertical => (width, height, 4, width * 4),
    };
    if len == 0 {
        return;
    }
    let window = (2 * radius + 1) as u32;
    let last = len - 1;

    for line in 0..lines {
        let base = line * line_stride;
        for channel in 0..4 {
            let at = |i: usize| u32::from(src[base + i.min(last) * step + channel]);

            let mut sum = at(0) * radius as u32;
            for i in 0..=radius {
                sum += at(i);
            }

            for i in 0..len {
                let value = ((sum + window / 2) / window) as u8;
                dst[base + i * step + channel] = value;
                sum += at(i + radius + 1);
                sum -= at(i.saturating_sub(radius));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::Color;

    fn filled(width: u32, height: u32, color: Color) -> Pixmap {
        let mut pixmap = Pixmap::new(width, height).unwrap();
        pixmap.fill(color);
        pixmap
    }

    #[test]
    fn uniform_image_is_unchanged() {
        let pixmap = filled(32, 16, Color::from_rgba8(200, 40, 90, 255));
        let blurred = blur(&pixmap, 12.0);
        assert_eq!(blurred.data(), pixmap.data());
    }

    #[test]
    fn tiny_radius_is_a_copy() {
        let mut pixmap = filled(8, 8, Color::BLACK);
        pixmap.data_mut()[0] = 255;
        assert_eq!(blur(&pixmap, 0.5).data(), pixmap.data());
        assert_eq!(blur(&pixmap, f32::NAN).data(), pixmap.data());
    }

    #[test]
    fn bright_pixel_spreads_to_neighbours() {
        let mut pixmap = filled(21, 21, Color::BLACK);
        let center = (10 * 21 + 10) * 4;
        pixmap.data_mut()[center] = 255;

        let blurred = blur(&pixmap, 6.0);
        let red = |x: usize, y: usize| blurred.data()[(y * 21 + x) * 4];

        assert!(red(10, 10) < 255);
        assert!(red(11, 10) > 0);
        assert!(red(10, 12) > 0);
        assert!(red(10, 10) >= red(12, 10));
        assert_eq!(red(0, 0), 0);
        // Alpha was opaque everywhere and stays that way.
        assert!(blurred.data().chunks_exact(4).all(|px| px[3] == 255));
    }
}
