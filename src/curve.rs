//! The curved clip path under the active tab.
//!
//! The bar's backdrop is a rectangle whose top edge dips into a rounded notch
//! centered on the anchor. Two mirrored cubic segments form the notch:
//!
//! ```text
//!  (0,0) ──────────╮         ╭────────── (w,0)
//!                   ╲       ╱
//!                    ╰──●──╯   ← (center, depth)
//!  │                                        │
//!  (0,h) ─────────────────────────────────── (w,h)
//! ```

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};
use crate::path::Path;

/// Fixed constants describing the notch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveShape {
    /// How far the notch dips below the top edge.
    pub depth: f32,
    /// Distance from the notch center to where it leaves the top edge.
    pub half_width: f32,
    /// Horizontal distance of each bezier handle from the notch center.
    pub control_offset: f32,
}

impl Default for CurveShape {
    fn default() -> Self {
        Self {
            depth: 35.0,
            half_width: 50.0,
            control_offset: 25.0,
        }
    }
}

/// The notch geometry after clamping it into a container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Notch {
    /// Horizontal center, always inside `[0, width]`.
    pub center: f32,
    /// Effective half-width, never reaching past either container edge.
    pub half_width: f32,
    /// Effective depth, at most the container height.
    pub depth: f32,
    /// Effective handle offset, scaled with the half-width.
    pub control_offset: f32,
}

impl CurveShape {
    /// Resolves where the notch sits for `anchor` inside a container of `size`.
    ///
    /// Returns `None` for an empty container or a non-finite anchor. An anchor
    /// outside `[0, width]` is clamped onto the nearest edge; an anchor inside
    /// is kept as is. Near an edge the notch narrows instead of moving, so it
    /// stays under the anchor and never reaches past the top edge.
    #[must_use]
    pub fn notch(&self, anchor: f32, size: Size) -> Option<Notch> {
        if size.is_empty() || !anchor.is_finite() {
            return None;
        }

        let center = anchor.clamp(0.0, size.width);
        let nominal = self.half_width.max(0.0);
        let half_width = nominal.min(center).min(size.width - center);
        let control_offset = if nominal > 0.0 {
            self.control_offset.clamp(0.0, nominal) * (half_width / nominal)
        } else {
            0.0
        };

        Some(Notch {
            center,
            half_width,
            depth: self.depth.clamp(0.0, size.height),
            control_offset,
        })
    }

    /// Builds the closed clip path for the given anchor and container size.
    ///
    /// The contour starts at the top-left corner, runs along the top edge
    /// through the notch, then down the right edge, across the bottom and back
    /// up the left edge. An empty container yields an empty path.
    #[must_use]
    pub fn path(&self, anchor: f32, size: Size) -> Path {
        let mut path = Path::new();
        let Some(notch) = self.notch(anchor, size) else {
            return path;
        };

        let Notch {
            center,
            half_width,
            depth,
            control_offset,
        } = notch;

        path.move_to(Point::zero());
        path.line_to(Point::new(center - half_width, 0.0));
        path.bezier_to(
            Point::new(center - control_offset, 0.0),
            Point::new(center - control_offset, depth),
            Point::new(center, depth),
        );
        path.bezier_to(
            Point::new(center + control_offset, depth),
            Point::new(center + control_offset, 0.0),
            Point::new(center + half_width, 0.0),
        );
        path.line_to(Point::new(size.width, 0.0));
        path.line_to(Point::new(size.width, size.height));
        path.line_to(Point::new(0.0, size.height));
        path.close();
        path
    }
}
