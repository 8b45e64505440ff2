//! Stationary points of a polynomial along a line.
//!
//! The line is traced as `x(t)` by [`Line::parametrize`], so the restriction
//! `r(t) = f(x(t))` is a univariate polynomial. Its stationary points are
//! the rational roots of `r'(t)`, classified by the sign of `r''(t)`. For a
//! quadratic restriction `r(t) = αt² + βt + γ` this is the vertex
//! `t* = -β / 2α`.

use num_rational::BigRational;
use num_traits::Zero;
use stationary_core::{Line, Polynomial, Univariate};
use thiserror::Error;

use crate::roots::{RootError, rational_roots};
use crate::stationary::Classification;

/// Errors that can occur when optimizing along a line.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("the restriction has irrational stationary points")]
    IrrationalRoots,

    #[error("the restriction has coefficients too large for an exact root search")]
    RootSearchTooLarge,
}

/// A stationary point of the restriction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineStationary {
    /// Parameter along the line.
    pub t: BigRational,

    pub point: [BigRational; 2],

    pub value: BigRational,

    /// [`Classification::LocalMinimum`] or [`Classification::LocalMaximum`]
    /// by the sign of `r''(t)`; [`Classification::Degenerate`] when it is
    /// zero.
    pub classification: Classification,
}

/// The outcome of [`optimize_on_line`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineOutcome {
    /// `f` takes this value everywhere on the line.
    Constant(BigRational),

    /// The stationary points of the restriction in ascending `t`; empty when
    /// the restriction is monotonic.
    Stationary(Vec<LineStationary>),
}

/// Returns `r(t) = f(x(t))` for the parametrization of `line`.
#[must_use]
pub fn restrict(f: &Polynomial, line: &Line) -> Univariate {
    let [x1, x2] = line.parametrize();
    f.substitute(&x1, &x2)
}

/// Finds and classifies every stationary point of `f` along `line`.
///
/// # Errors
///
/// Returns an error if `r'(t)` has real roots that cannot be found exactly.
pub fn optimize_on_line(f: &Polynomial, line: &Line) -> Result<LineOutcome, Error> {
    let r = restrict(f, line);
    log::debug!(
        "restriction of f to {}: {:?}",
        line.display_with(f.variables()),
        r.coefficients()
    );

    if r.degree().unwrap_or(0) == 0 {
        return Ok(LineOutcome::Constant(r.eval(&BigRational::zero())));
    }

    let slope = r.derivative();
    let curvature = slope.derivative();
    let ts = rational_roots(&slope).map_err(|err| match err {
        RootError::Irrational => Error::IrrationalRoots,
        RootError::TooLarge => Error::RootSearchTooLarge,
    })?;

    let stationary = ts
        .into_iter()
        .map(|t| {
            let classification = match curvature.eval(&t).cmp(&BigRational::zero()) {
                std::cmp::Ordering::Greater => Classification::LocalMinimum,
                std::cmp::Ordering::Less => Classification::LocalMaximum,
                std::cmp::Ordering::Equal => Classification::Degenerate,
            };
            LineStationary {
                point: line.point_at(&t),
                value: r.eval(&t),
                classification,
                t,
            }
        })
        .collect();

    Ok(LineOutcome::Stationary(stationary))
}

#[cfg(test)]
mod tests {
    use super::*;

    use stationary_core::Variables;

    fn q(n: i64, d: i64) -> BigRational {
        BigRational::new(n.into(), d.into())
    }

    fn parse(src: &str, vars: &Variables) -> Polynomial {
        Polynomial::parse(src, vars).unwrap()
    }

    #[test]
    fn quadratic_vertex_on_line() {
        let vars = Variables::new("x", "y").unwrap();
        let f = parse("4*x^2 + 3*y^2 - 5*x*y - 8*x", &vars);
        let line = Line::new(q(1, 1), q(1, 1), q(4, 1)).unwrap();

        // r(t) = 12t² - 52t + 48
        assert_eq!(
            restrict(&f, &line).coefficients(),
            &[q(48, 1), q(-52, 1), q(12, 1)]
        );

        let LineOutcome::Stationary(points) = optimize_on_line(&f, &line).unwrap() else {
            panic!("expected stationary points");
        };
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].t, q(13, 6));
        assert_eq!(points[0].point, [q(13, 6), q(11, 6)]);
        assert_eq!(points[0].value, q(-25, 3));
        assert_eq!(points[0].classification, Classification::LocalMinimum);
    }

    #[test]
    fn vertical_line_uses_x2_as_parameter() {
        let f = parse("x1^2 - x2^2", &Variables::default());
        let line = Line::new(q(1, 1), q(0, 1), q(2, 1)).unwrap();

        let LineOutcome::Stationary(points) = optimize_on_line(&f, &line).unwrap() else {
            panic!("expected stationary points");
        };
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].point, [q(2, 1), q(0, 1)]);
        assert_eq!(points[0].classification, Classification::LocalMaximum);
    }

    #[test]
    fn constant_along_line() {
        // (x1 + x2)² is 9 on x1 + x2 = 3
        let f = parse("(x1 + x2)^2", &Variables::default());
        let line = Line::new(q(1, 1), q(1, 1), q(3, 1)).unwrap();

        assert_eq!(
            optimize_on_line(&f, &line),
            Ok(LineOutcome::Constant(q(9, 1)))
        );
    }

    #[test]
    fn monotonic_restriction_has_no_stationary_points() {
        let f = parse("x1 + 2*x2", &Variables::default());
        let line = Line::new(q(1, 1), q(-1, 1), q(0, 1)).unwrap();

        assert_eq!(
            optimize_on_line(&f, &line),
            Ok(LineOutcome::Stationary(vec![]))
        );
    }

    #[test]
    fn inflection_is_degenerate() {
        // r(t) = t³ along the x1 axis
        let f = parse("x1^3", &Variables::default());
        let line = Line::new(q(0, 1), q(1, 1), q(0, 1)).unwrap();

        let LineOutcome::Stationary(points) = optimize_on_line(&f, &line).unwrap() else {
            panic!("expected stationary points");
        };
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].classification, Classification::Degenerate);
    }

    #[test]
    fn irrational_stationary_points_are_an_error() {
        // r(t) = t³ - 6t on the x1 axis
        let f = parse("x1^3 - 6*x1", &Variables::default());
        let line = Line::new(q(0, 1), q(1, 1), q(0, 1)).unwrap();

        assert_eq!(optimize_on_line(&f, &line), Err(Error::IrrationalRoots));
    }
}
