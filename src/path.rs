//! Path builder used for clip shapes.
//!
//! The builder speaks the crate's own [`Point`] type while storing a
//! `kurbo::BezPath` underneath, so hit-testing comes from kurbo and backends
//! only ever see [`PathElement`]s.

use kurbo::{self, Shape};

use crate::geometry::Point;

/// One drawing command of a [`Path`], in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    /// Start a new sub-path at the given point.
    MoveTo(Point),
    /// Straight line to the given point.
    LineTo(Point),
    /// Quadratic bezier: control point, end point.
    QuadTo(Point, Point),
    /// Cubic bezier: first control, second control, end point.
    CurveTo(Point, Point, Point),
    /// Close the current sub-path.
    Close,
}

/// Path builder for constructing clip shapes.
///
/// # Example
///
/// ```
/// use curvebar::{Path, Point};
///
/// let mut path = Path::new();
/// path.move_to(Point::new(0.0, 0.0));
/// path.line_to(Point::new(100.0, 0.0));
/// path.line_to(Point::new(100.0, 40.0));
/// path.close();
/// assert_eq!(path.len(), 4);
/// ```
#[derive(Clone, PartialEq, Default)]
pub struct Path {
    inner: kurbo::BezPath,
}

impl Path {
    /// Creates a new empty path.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: kurbo::BezPath::new(),
        }
    }

    /// Moves the current point to the specified position without drawing.
    pub fn move_to(&mut self, point: Point) {
        self.inner.move_to(to_kurbo(point));
    }

    /// Draws a straight line from the current point to the specified point.
    pub fn line_to(&mut self, point: Point) {
        self.inner.line_to(to_kurbo(point));
    }

    /// Draws a quadratic Bezier curve from the current point to `end` using `control_point`.
    pub fn quadratic_to(&mut self, control_point: Point, end: Point) {
        self.inner.quad_to(to_kurbo(control_point), to_kurbo(end));
    }

    /// Draws a cubic Bezier curve from the current point to `end`.
    ///
    /// # Arguments
    /// * `control_point1` - The first control point
    /// * `control_point2` - The second control point
    /// * `end` - The end point of the curve
    pub fn bezier_to(&mut self, control_point1: Point, control_point2: Point, end: Point) {
        self.inner.curve_to(
            to_kurbo(control_point1),
            to_kurbo(control_point2),
            to_kurbo(end),
        );
    }

    /// Closes the current sub-path by drawing a straight line back to the start.
    pub fn close(&mut self) {
        self.inner.close_path();
    }

    /// Returns true if the path has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.elements().is_empty()
    }

    /// Number of drawing commands in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.elements().len()
    }

    /// Iterates over the drawing commands of the path.
    pub fn elements(&self) -> impl Iterator<Item = PathElement> + '_ {
        self.inner.elements().iter().map(|el| match *el {
            kurbo::PathEl::MoveTo(p) => PathElement::MoveTo(from_kurbo(p)),
            kurbo::PathEl::LineTo(p) => PathElement::LineTo(from_kurbo(p)),
            kurbo::PathEl::QuadTo(c, p) => PathElement::QuadTo(from_kurbo(c), from_kurbo(p)),
            kurbo::PathEl::CurveTo(c1, c2, p) => {
                PathElement::CurveTo(from_kurbo(c1), from_kurbo(c2), from_kurbo(p))
            }
            kurbo::PathEl::ClosePath => PathElement::Close,
        })
    }

    /// Returns true if `point` is inside the filled path (non-zero winding).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        !self.is_empty() && self.inner.contains(to_kurbo(point))
    }
}

impl core::fmt::Debug for Path {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Path")
            .field("elements", &self.inner.elements().len())
            .finish()
    }
}

fn to_kurbo(point: Point) -> kurbo::Point {
    kurbo::Point::new(f64::from(point.x), f64::from(point.y))
}

#[allow(clippy::cast_possible_truncation)]
fn from_kurbo(point: kurbo::Point) -> Point {
    Point::new(point.x as f32, point.y as f32)
}
