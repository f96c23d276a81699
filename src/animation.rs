//! Spring physics and shape morphing for the bar's transitions.
//!
//! Two primitives drive every animation of the component:
//!
//! - [`Animated`] is a scalar pulled toward a target by a damped [`Spring`].
//!   It moves the notch anchor and each button's elevation. Retargeting keeps
//!   the current value and velocity, so a tap that lands mid-flight bends the
//!   motion instead of restarting it.
//! - [`ShapeMorph`] interpolates between two shapes over a fixed duration.
//!   It moves the shared highlight circle from the previous button to the new one.

use core::f32::consts::PI;
use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Longest physics step. Larger frame deltas are split into sub-steps.
const MAX_STEP: f32 = 1.0 / 240.0;

/// Frames longer than this are treated as a stall and clipped.
const MAX_FRAME: f32 = 0.25;

/// Range the spring's response is held to.
const RESPONSE_RANGE: (f32, f32) = (0.01, 10.0);

/// Largest damping fraction the spring accepts.
const MAX_DAMPING_FRACTION: f32 = 10.0;

// ============================================================================
// Spring
// ============================================================================

/// A damped spring described by its perceptual parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spring {
    /// Approximate period of the undamped oscillation, in seconds.
    pub response: f32,
    /// Damping ratio: `1.0` is critically damped, lower values overshoot.
    pub damping_fraction: f32,
    /// Displacement and speed below which the spring counts as settled.
    pub rest_threshold: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            response: 0.55,
            damping_fraction: 0.825,
            rest_threshold: 0.01,
        }
    }
}

impl Spring {
    /// Spring constant for unit mass.
    #[must_use]
    pub fn stiffness(&self) -> f32 {
        let omega = 2.0 * PI / self.effective_response();
        omega * omega
    }

    /// Damping coefficient for unit mass.
    #[must_use]
    pub fn damping(&self) -> f32 {
        let fraction = self.damping_fraction.max(0.0).min(MAX_DAMPING_FRACTION);
        4.0 * PI * fraction / self.effective_response()
    }

    /// Response clamped into [`RESPONSE_RANGE`]. `NaN` maps to the stiffest.
    fn effective_response(&self) -> f32 {
        self.response.max(RESPONSE_RANGE.0).min(RESPONSE_RANGE.1)
    }

    /// Longest integration step that stays stable for this spring.
    fn max_step(&self) -> f32 {
        let omega = self.stiffness().sqrt();
        MAX_STEP
            .min(0.5 / omega)
            .min(1.0 / self.damping().max(f32::EPSILON))
    }

    fn rest_threshold(&self) -> f32 {
        self.rest_threshold.max(1e-4)
    }
}

// ============================================================================
// Animated
// ============================================================================

/// A scalar animated by a [`Spring`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animated {
    value: f32,
    velocity: f32,
    target: f32,
    spring: Spring,
}

impl Animated {
    /// Creates a settled value.
    #[must_use]
    pub const fn new(value: f32, spring: Spring) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            spring,
        }
    }

    /// Current presentation value.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Value the spring is heading toward.
    #[must_use]
    pub const fn target(&self) -> f32 {
        self.target
    }

    /// Current velocity in units per second.
    #[must_use]
    pub const fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Jumps to `value` and stops all motion.
    pub const fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Points the spring at a new target, keeping value and velocity.
    pub const fn retarget(&mut self, target: f32) {
        self.target = target;
    }

    /// True once the value rests on its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advances the simulation by `dt` and returns whether it is still moving.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.is_settled() {
            return false;
        }

        let dt = dt.as_secs_f32().clamp(0.0, MAX_FRAME);
        let steps = (dt / self.spring.max_step()).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let stiffness = self.spring.stiffness();
        let damping = self.spring.damping();

        for _ in 0..steps {
            let displacement = self.value - self.target;
            let acceleration = -stiffness * displacement - damping * self.velocity;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
        }

        if !(self.value.is_finite() && self.velocity.is_finite()) {
            tracing::debug!(target = self.target, "spring diverged, snapping to target");
            self.snap_to(self.target);
            return false;
        }

        let threshold = self.spring.rest_threshold();
        if (self.value - self.target).abs() < threshold && self.velocity.abs() < threshold {
            self.snap_to(self.target);
            return false;
        }
        true
    }
}

// ============================================================================
// Shape morphing
// ============================================================================

/// Types that can be blended linearly.
pub trait Interpolate: Copy {
    /// Returns the shape `t` of the way from `self` to `other`.
    #[must_use]
    fn interpolate(self, other: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(self, other: Self, t: f32) -> Self {
        (other - self).mul_add(t, self)
    }
}

impl Interpolate for Point {
    fn interpolate(self, other: Self, t: f32) -> Self {
        Self::new(self.x.interpolate(other.x, t), self.y.interpolate(other.y, t))
    }
}

/// A circle, the shape of the highlight behind the active icon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    /// Center in the bar's coordinate space.
    pub center: Point,
    /// Radius in points.
    pub radius: f32,
}

impl Circle {
    /// Creates a circle.
    #[must_use]
    pub const fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl Interpolate for Circle {
    fn interpolate(self, other: Self, t: f32) -> Self {
        Self {
            center: self.center.interpolate(other.center, t),
            radius: self.radius.interpolate(other.radius, t),
        }
    }
}

/// A capability that moves one shape into another over time.
///
/// Native backends may satisfy this with their own shared-element
/// transition. [`TweenMorph`] is the portable fallback.
pub trait ShapeMorph {
    /// The shape being morphed.
    type Shape;

    /// Starts a morph from `from` to `to` lasting `duration`.
    fn begin(&mut self, from: Self::Shape, to: Self::Shape, duration: Duration);

    /// Advances the morph and returns the shape to draw.
    fn advance(&mut self, dt: Duration) -> Self::Shape;

    /// The shape to draw right now.
    fn current(&self) -> Self::Shape;

    /// True once the morph has reached its destination.
    fn is_finished(&self) -> bool;
}

/// Time-based morph with a quadratic ease-out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenMorph<S> {
    from: S,
    to: S,
    elapsed: Duration,
    duration: Duration,
}

impl<S: Interpolate> TweenMorph<S> {
    /// Creates a finished morph resting on `shape`.
    #[must_use]
    pub const fn resting(shape: S) -> Self {
        Self {
            from: shape,
            to: shape,
            elapsed: Duration::ZERO,
            duration: Duration::ZERO,
        }
    }

    /// The shape this morph is heading toward.
    #[must_use]
    pub const fn destination(&self) -> S {
        self.to
    }

    /// Starts a new morph toward `to` from whatever is drawn now.
    pub fn retarget(&mut self, to: S, duration: Duration) {
        let from = self.current();
        self.begin(from, to, duration);
    }

    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// Quadratic ease-out: fast start, smooth deceleration.
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

impl<S: Interpolate> ShapeMorph for TweenMorph<S> {
    type Shape = S;

    fn begin(&mut self, from: S, to: S, duration: Duration) {
        self.from = from;
        self.to = to;
        self.elapsed = Duration::ZERO;
        self.duration = duration;
    }

    fn advance(&mut self, dt: Duration) -> S {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.current()
    }

    fn current(&self) -> S {
        let progress = self.progress();
        if progress >= 1.0 {
            return self.to;
        }
        self.from.interpolate(self.to, ease_out(progress))
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run(animated: &mut Animated, frames: usize) {
        for _ in 0..frames {
            animated.tick(FRAME);
        }
    }

    #[test]
    fn spring_converges_and_settles() {
        let mut x = Animated::new(50.0, Spring::default());
        x.retarget(250.0);
        assert!(!x.is_settled());

        run(&mut x, 300);
        assert!(x.is_settled());
        assert_eq!(x.value(), 250.0);
        assert!(!x.tick(FRAME));
    }

    #[test]
    fn spring_moves_toward_target_on_first_frame() {
        let mut x = Animated::new(0.0, Spring::default());
        x.retarget(100.0);
        assert!(x.tick(FRAME));
        assert!(x.value() > 0.0 && x.value() < 100.0);
    }

    #[test]
    fn retarget_keeps_presentation_state() {
        let mut x = Animated::new(0.0, Spring::default());
        x.retarget(100.0);
        run(&mut x, 5);

        let value = x.value();
        let velocity = x.velocity();
        x.retarget(-100.0);
        assert_eq!(x.value(), value);
        assert_eq!(x.velocity(), velocity);

        run(&mut x, 400);
        assert_eq!(x.value(), -100.0);
    }

    #[test]
    fn stalled_frame_does_not_explode() {
        let mut x = Animated::new(0.0, Spring::default());
        x.retarget(1.0);
        x.tick(Duration::from_secs(30));
        assert!(x.value().is_finite());
        assert!(x.value().abs() < 10.0);
    }

    #[test]
    fn snap_stops_motion() {
        let mut x = Animated::new(0.0, Spring::default());
        x.retarget(10.0);
        x.tick(FRAME);
        x.snap_to(3.0);
        assert!(x.is_settled());
        assert_eq!(x.target(), 3.0);
    }

    #[test]
    fn extreme_springs_stay_finite_and_settle() {
        let springs = [
            (0.005, 0.825),
            (0.0, 0.825),
            (f32::NAN, 0.825),
            (0.01, 100.0),
            (0.2, 4.0),
        ];
        for (response, damping_fraction) in springs {
            let spring = Spring {
                response,
                damping_fraction,
                ..Spring::default()
            };
            let mut x = Animated::new(50.0, spring);
            x.retarget(350.0);

            let mut frames = 0;
            while x.tick(FRAME) {
                assert!(x.value().is_finite(), "{response} {damping_fraction}");
                frames += 1;
                assert!(frames < 2_000, "{response} {damping_fraction} never settled");
            }
            assert_eq!(x.value(), 350.0);
        }
    }

    #[test]
    fn stiffness_and_damping_are_bounded() {
        let spring = Spring {
            response: 0.0,
            damping_fraction: 1e9,
            ..Spring::default()
        };
        assert!(spring.stiffness().is_finite());
        assert!(spring.damping().is_finite());
        assert!(spring.max_step() > 0.0);
    }

    #[test]
    fn morph_reaches_destination() {
        let from = Circle::new(Point::new(50.0, 0.0), 27.5);
        let to = Circle::new(Point::new(250.0, 0.0), 27.5);
        let mut morph = TweenMorph::resting(from);
        morph.begin(from, to, Duration::from_millis(100));
        assert!(!morph.is_finished());

        let halfway = morph.advance(Duration::from_millis(50));
        // Ease-out covers more than half the distance in half the time.
        assert!(halfway.center.x > 150.0 && halfway.center.x < 250.0);

        let end = morph.advance(Duration::from_millis(80));
        assert!(morph.is_finished());
        assert_eq!(end, to);
    }

    #[test]
    fn interrupted_morph_starts_from_current_shape() {
        let a = Circle::new(Point::new(0.0, 0.0), 10.0);
        let b = Circle::new(Point::new(100.0, 0.0), 10.0);
        let c = Circle::new(Point::new(300.0, 0.0), 10.0);

        let mut morph = TweenMorph::resting(a);
        morph.retarget(b, Duration::from_millis(100));
        let mid = morph.advance(Duration::from_millis(40));

        morph.retarget(c, Duration::from_millis(100));
        assert_eq!(morph.current(), mid);
        assert_eq!(morph.destination(), c);
    }

    #[test]
    fn zero_duration_morph_jumps() {
        let a = Circle::new(Point::zero(), 1.0);
        let b = Circle::new(Point::new(10.0, 10.0), 2.0);
        let mut morph = TweenMorph::resting(a);
        morph.begin(a, b, Duration::ZERO);
        assert!(morph.is_finished());
        assert_eq!(morph.current(), b);
    }
}
