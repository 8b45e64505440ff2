//! Extrema of a polynomial on a circle, or on the arc of it inside a
//! half-plane.
//!
//! The circle `(x1 - c1)² + (x2 - c2)² = r²` is traced by angle,
//! `x(θ) = c + r·(cos θ, sin θ)`. The restriction `f(x(θ))` is sampled at
//! evenly spaced angles; the best sample and its two neighbours bracket the
//! extremum, which golden section search then refines. Sampling must be fine
//! enough that the bracket holds a single extremum.
//!
//! A [`HalfPlane`] `a·x1 + b·x2 <= c` cuts the circle down to an [`Arc`].
//! Samples then span the arc from end to end, brackets are clamped to it, and
//! the endpoints are candidates in their own right.

use std::convert::Infallible;
use std::f64::consts::TAU;

use stationary_core::{OptimizationProblem, Polynomial};
use thiserror::Error;

use crate::optimization::golden_section;

/// A circle with finite centre and finite positive radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    center: [f64; 2],
    radius: f64,
}

/// Errors that can occur when constructing a [`Circle`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CircleError {
    #[error("circle center must be finite, got {0:?}")]
    Center([f64; 2]),

    #[error("circle radius must be finite and positive, got {0}")]
    Radius(f64),
}

impl Circle {
    /// Creates the circle of `radius` around `center`.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-finite centre or a radius that is not
    /// finite and positive.
    pub fn new(center: [f64; 2], radius: f64) -> Result<Self, CircleError> {
        if !center.iter().all(|c| c.is_finite()) {
            return Err(CircleError::Center(center));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(CircleError::Radius(radius));
        }
        Ok(Self { center, radius })
    }

    /// The unit circle around the origin.
    #[must_use]
    pub fn unit() -> Self {
        Self {
            center: [0.0, 0.0],
            radius: 1.0,
        }
    }

    #[must_use]
    pub fn center(&self) -> [f64; 2] {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the point at angle `theta`, measured from the positive x1 axis.
    #[must_use]
    pub fn point_at(&self, theta: f64) -> [f64; 2] {
        let (sin, cos) = theta.sin_cos();
        [
            self.center[0] + self.radius * cos,
            self.center[1] + self.radius * sin,
        ]
    }
}

/// The closed half-plane `a·x1 + b·x2 <= c`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HalfPlane {
    a: f64,
    b: f64,
    c: f64,
}

/// Errors that can occur when restricting a circle to a half-plane.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum HalfPlaneError {
    #[error("half-plane coefficients must be finite, got {0:?}")]
    NonFinite([f64; 3]),

    #[error("at least one of the x1 and x2 coefficients must be non-zero")]
    Degenerate,

    #[error("the half-plane does not meet the circle")]
    Disjoint,
}

impl HalfPlane {
    /// Creates the half-plane `a·x1 + b·x2 <= c`.
    ///
    /// # Errors
    ///
    /// Returns an error for non-finite coefficients or `a = b = 0`.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, HalfPlaneError> {
        if ![a, b, c].iter().all(|v| v.is_finite()) {
            return Err(HalfPlaneError::NonFinite([a, b, c]));
        }
        if a == 0.0 && b == 0.0 {
            return Err(HalfPlaneError::Degenerate);
        }
        Ok(Self { a, b, c })
    }

    #[must_use]
    pub fn contains(&self, x: [f64; 2]) -> bool {
        self.a * x[0] + self.b * x[1] <= self.c
    }
}

/// The part of a circle searched for extrema: the whole circle or a closed
/// arc running counterclockwise from `start` through `span` radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc {
    circle: Circle,
    start: f64,
    span: f64,
    whole: bool,
}

impl From<Circle> for Arc {
    fn from(circle: Circle) -> Self {
        Self {
            circle,
            start: 0.0,
            span: TAU,
            whole: true,
        }
    }
}

impl Arc {
    /// The points of `circle` that lie in `half_plane`.
    ///
    /// On the circle, `a·x1 + b·x2 - c = r·h·cos(θ - φ) + k` with
    /// `h = |(a, b)|`, `φ = atan2(b, a)` and `k = a·c1 + b·c2 - c`, so the
    /// feasible angles are those with `cos(θ - φ) <= -k / (r·h)`.
    ///
    /// # Errors
    ///
    /// Returns [`HalfPlaneError::Disjoint`] if no point of the circle lies in
    /// the half-plane. A tangent half-plane gives a zero-length arc.
    pub fn within(circle: Circle, half_plane: &HalfPlane) -> Result<Self, HalfPlaneError> {
        let HalfPlane { a, b, c } = *half_plane;
        let h = a.hypot(b);
        let k = a * circle.center[0] + b * circle.center[1] - c;
        let bound = -k / (circle.radius * h);

        if bound >= 1.0 {
            return Ok(Self::from(circle));
        }
        if bound < -1.0 - 4.0 * f64::EPSILON {
            return Err(HalfPlaneError::Disjoint);
        }

        let alpha = bound.max(-1.0).acos();
        Ok(Self {
            circle,
            start: (b.atan2(a) + alpha).rem_euclid(TAU),
            span: TAU - 2.0 * alpha,
            whole: false,
        })
    }

    #[must_use]
    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    /// Returns the angle the arc starts at, in `[0, 2π)`.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the angle the arc sweeps, `2π` for the whole circle.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.span
    }

    #[must_use]
    pub fn is_whole_circle(&self) -> bool {
        self.whole
    }

    /// Returns the arc's angle closest to `theta`, measured along the arc.
    fn clamp(&self, theta: f64) -> f64 {
        if self.whole {
            theta
        } else {
            theta.clamp(self.start, self.start + self.span)
        }
    }
}

/// Configuration for the circle search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    samples: usize,
    refine: golden_section::Config,
}

/// Errors that can occur when validating a circle search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least 3 samples are needed to bracket an extremum, got {0}")]
    TooFewSamples(usize),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            samples: 360,
            refine: golden_section::Config::default(),
        }
    }
}

impl Config {
    /// Creates a config that samples `samples` angles before refining.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples` is less than 3.
    pub fn new(samples: usize, refine: golden_section::Config) -> Result<Self, ConfigError> {
        if samples < 3 {
            return Err(ConfigError::TooFewSamples(samples));
        }
        Ok(Self { samples, refine })
    }

    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    #[must_use]
    pub fn refine(&self) -> &golden_section::Config {
        &self.refine
    }
}

/// A point on the circle with the function value there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CirclePoint {
    /// Angle in `[0, 2π)`.
    pub theta: f64,
    pub x: [f64; 2],
    pub value: f64,
}

/// The smallest and largest value of a function on a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleExtrema {
    pub min: CirclePoint,
    pub max: CirclePoint,
}

/// Finds the minimum and maximum of `f` on `circle`.
///
/// # Errors
///
/// Returns an error if a golden section refinement fails.
pub fn extrema_on_circle(
    f: &Polynomial,
    circle: &Circle,
    config: &Config,
) -> Result<CircleExtrema, golden_section::Error> {
    extrema_on_arc(f, &Arc::from(*circle), config)
}

/// Finds the minimum and maximum of `f` on `arc`.
///
/// # Errors
///
/// Returns an error if a golden section refinement fails.
pub fn extrema_on_arc(
    f: &Polynomial,
    arc: &Arc,
    config: &Config,
) -> Result<CircleExtrema, golden_section::Error> {
    Ok(CircleExtrema {
        min: minimize(f, arc, config)?,
        max: maximize(f, arc, config)?,
    })
}

/// Finds the minimum of `f` on `arc`.
///
/// # Errors
///
/// Returns an error if the golden section refinement fails.
pub fn minimize(
    f: &Polynomial,
    arc: &Arc,
    config: &Config,
) -> Result<CirclePoint, golden_section::Error> {
    search(f, arc, config, Goal::Min)
}

/// Finds the maximum of `f` on `arc`.
///
/// # Errors
///
/// Returns an error if the golden section refinement fails.
pub fn maximize(
    f: &Polynomial,
    arc: &Arc,
    config: &Config,
) -> Result<CirclePoint, golden_section::Error> {
    search(f, arc, config, Goal::Max)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Goal {
    Min,
    Max,
}

impl Goal {
    fn is_better(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Goal::Min => candidate < incumbent,
            Goal::Max => candidate > incumbent,
        }
    }
}

/// The restriction `θ ↦ f(x(θ))` as a one-parameter objective.
struct OnCircle<'a> {
    f: &'a Polynomial,
    circle: &'a Circle,
}

impl OnCircle<'_> {
    fn at(&self, theta: f64) -> CirclePoint {
        let x = self.circle.point_at(theta);
        CirclePoint {
            theta: theta.rem_euclid(TAU),
            x,
            value: self.f.eval_f64(x),
        }
    }
}

impl OptimizationProblem<1> for OnCircle<'_> {
    type Error = Infallible;

    fn objective(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(self.at(x[0]).value)
    }
}

fn search(
    f: &Polynomial,
    arc: &Arc,
    config: &Config,
    goal: Goal,
) -> Result<CirclePoint, golden_section::Error> {
    let objective = OnCircle {
        f,
        circle: &arc.circle,
    };
    if arc.span <= 0.0 {
        return Ok(objective.at(arc.start));
    }

    // The whole circle wraps around, so its last sample stops one step short
    // of the first. An arc is sampled from end to end.
    #[allow(clippy::cast_precision_loss)]
    let step = if arc.whole {
        TAU / config.samples() as f64
    } else {
        arc.span / (config.samples() - 1) as f64
    };

    #[allow(clippy::cast_precision_loss)]
    let sampled = (0..config.samples())
        .map(|k| {
            let theta = arc.start + k as f64 * step;
            (theta, objective.at(theta))
        })
        .reduce(|best, s| if goal.is_better(s.1.value, best.1.value) { s } else { best });
    let Some((theta, sampled)) = sampled else {
        return Ok(objective.at(arc.start));
    };

    let bounds = [arc.clamp(theta - step), arc.clamp(theta + step)];
    let solution = match goal {
        Goal::Min => golden_section::minimize_unobserved(&objective, bounds, config.refine())?,
        Goal::Max => golden_section::maximize_unobserved(&objective, bounds, config.refine())?,
    };
    log::trace!(
        "{goal:?} on circle: sample θ = {}, refined θ = {} after {} iters",
        sampled.theta,
        solution.x,
        solution.iters
    );

    let refined = objective.at(solution.x);
    Ok(if goal.is_better(sampled.value, refined.value) {
        sampled
    } else {
        refined
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4, PI, SQRT_2};
    use stationary_core::Variables;

    fn parse(src: &str) -> Polynomial {
        Polynomial::parse(src, &Variables::default()).unwrap()
    }

    #[test]
    fn linear_function_on_unit_circle() {
        let f = parse("x1 + x2");
        let extrema = extrema_on_circle(&f, &Circle::unit(), &Config::default()).unwrap();

        assert_relative_eq!(extrema.max.value, SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(extrema.max.theta, FRAC_PI_4, epsilon = 1e-6);
        assert_relative_eq!(extrema.max.x[0], FRAC_1_SQRT_2, epsilon = 1e-6);
        assert_relative_eq!(extrema.max.x[1], FRAC_1_SQRT_2, epsilon = 1e-6);

        assert_relative_eq!(extrema.min.value, -SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(extrema.min.theta, 5.0 * FRAC_PI_4, epsilon = 1e-6);
    }

    #[test]
    fn extremum_between_samples_is_refined() {
        // Four samples at 0, π/2, π, 3π/2 miss the maximum at θ = 1 entirely.
        let f = parse("0.5403023058681398*x1 + 0.8414709848078965*x2");
        let config = Config::new(4, golden_section::Config::default()).unwrap();

        let max = maximize(&f, &Circle::unit().into(), &config).unwrap();

        assert_relative_eq!(max.theta, 1.0, epsilon = 1e-6);
        assert_relative_eq!(max.value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn shifted_circle() {
        // Distance² from the origin on the circle of radius 1 around (3, 4):
        // nearest point at distance 4, farthest at 6.
        let f = parse("x1^2 + x2^2");
        let circle = Circle::new([3.0, 4.0], 1.0).unwrap();

        let extrema = extrema_on_circle(&f, &circle, &Config::default()).unwrap();

        assert_relative_eq!(extrema.min.value, 16.0, epsilon = 1e-10);
        assert_relative_eq!(extrema.min.x[0], 2.4, epsilon = 1e-6);
        assert_relative_eq!(extrema.min.x[1], 3.2, epsilon = 1e-6);
        assert_relative_eq!(extrema.max.value, 36.0, epsilon = 1e-10);
    }

    #[test]
    fn half_plane_cuts_an_arc() {
        // y <= x keeps the lower-right half, from 5π/4 round to π/4.
        let below = HalfPlane::new(-1.0, 1.0, 0.0).unwrap();
        let arc = Arc::within(Circle::unit(), &below).unwrap();

        assert!(!arc.is_whole_circle());
        assert_relative_eq!(arc.start(), 5.0 * FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(arc.span(), PI, epsilon = 1e-12);
        assert!(below.contains(Circle::unit().point_at(0.0)));
        assert!(!below.contains(Circle::unit().point_at(PI / 2.0)));
    }

    #[test]
    fn extrema_on_the_arc_of_the_course_function() {
        // 2x² + y² - 2xy - 3x - 2y on x² + y² = 1 with y <= x. Both extrema
        // are where the circle meets y = x, at the ends of the arc.
        let vars = Variables::new("x", "y").unwrap();
        let f = Polynomial::parse("2*x^2 + y^2 - 2*x*y - 3*x - 2*y", &vars).unwrap();
        let below = HalfPlane::new(-1.0, 1.0, 0.0).unwrap();
        let arc = Arc::within(Circle::unit(), &below).unwrap();

        let extrema = extrema_on_arc(&f, &arc, &Config::default()).unwrap();

        assert_relative_eq!(extrema.min.value, 0.5 - 5.0 * FRAC_1_SQRT_2, epsilon = 1e-9);
        assert_relative_eq!(extrema.min.x[0], FRAC_1_SQRT_2, epsilon = 1e-9);
        assert_relative_eq!(extrema.min.x[1], FRAC_1_SQRT_2, epsilon = 1e-9);
        assert_relative_eq!(extrema.min.theta, FRAC_PI_4, epsilon = 1e-9);

        assert_relative_eq!(extrema.max.value, 0.5 + 5.0 * FRAC_1_SQRT_2, epsilon = 1e-9);
        assert_relative_eq!(extrema.max.x[0], -FRAC_1_SQRT_2, epsilon = 1e-9);
        assert_relative_eq!(extrema.max.x[1], -FRAC_1_SQRT_2, epsilon = 1e-9);

        // The unrestricted circle reaches further on both sides.
        let whole = extrema_on_circle(&f, &Circle::unit(), &Config::default()).unwrap();
        assert!(whole.min.value <= extrema.min.value + 1e-12);
        assert!(whole.max.value >= extrema.max.value - 1e-12);
    }

    #[test]
    fn interior_and_endpoint_extrema_on_an_arc() {
        // x1 + x2 <= 0: the minimum -√2 is inside the arc, the maximum 0 is
        // reached at both ends.
        let f = parse("x1 + x2");
        let half = HalfPlane::new(1.0, 1.0, 0.0).unwrap();
        let arc = Arc::within(Circle::unit(), &half).unwrap();

        let extrema = extrema_on_arc(&f, &arc, &Config::default()).unwrap();

        assert_relative_eq!(extrema.min.value, -SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(extrema.min.theta, 5.0 * FRAC_PI_4, epsilon = 1e-6);
        assert_relative_eq!(extrema.max.value, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn tangent_disjoint_and_containing_half_planes() {
        let circle = Circle::unit();

        // x1 >= 1 touches the circle only at (1, 0).
        let tangent = HalfPlane::new(-1.0, 0.0, -1.0).unwrap();
        let arc = Arc::within(circle, &tangent).unwrap();
        assert_relative_eq!(arc.span(), 0.0, epsilon = 1e-12);
        let point = minimize(&parse("x2"), &arc, &Config::default()).unwrap();
        assert_relative_eq!(point.x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(point.x[1], 0.0, epsilon = 1e-12);

        let beyond = HalfPlane::new(-1.0, 0.0, -2.0).unwrap();
        assert_eq!(Arc::within(circle, &beyond), Err(HalfPlaneError::Disjoint));

        let everything = HalfPlane::new(1.0, 0.0, 5.0).unwrap();
        assert!(Arc::within(circle, &everything).unwrap().is_whole_circle());

        assert_eq!(HalfPlane::new(0.0, 0.0, 1.0), Err(HalfPlaneError::Degenerate));
        assert!(matches!(
            HalfPlane::new(1.0, f64::INFINITY, 0.0),
            Err(HalfPlaneError::NonFinite(_))
        ));
    }

    #[test]
    fn invalid_circles_and_configs() {
        assert_eq!(Circle::new([0.0, 0.0], 0.0), Err(CircleError::Radius(0.0)));
        assert!(matches!(
            Circle::new([f64::NAN, 0.0], 1.0),
            Err(CircleError::Center(_))
        ));
        assert_eq!(
            Config::new(2, golden_section::Config::default()),
            Err(ConfigError::TooFewSamples(2))
        );
    }
}
