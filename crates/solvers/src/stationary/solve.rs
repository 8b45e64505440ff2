use num_rational::BigRational;
use num_traits::{One, Zero};
use stationary_core::{Gradient, Line, Univariate, Var};

use crate::roots::{RootError, rational_roots};

use super::{StationaryPoint, StationarySet, UnsolvableSystem};

/// Solves `∇f = 0` exactly.
///
/// Two shapes of gradient have closed-form solution sets:
///
/// - **Linear** (every quadratic `f`): Cramer's rule when the coefficient
///   matrix is invertible. A singular system is reported as [`Lines`] or
///   [`Plane`] when consistent and as an empty [`Isolated`] set otherwise.
/// - **Separable** (`∂f/∂x1` depends only on `x1` and `∂f/∂x2` only on
///   `x2`): the rational roots of each component, combined pairwise. A
///   component that is identically zero leaves its variable free, giving
///   vertical or horizontal [`Lines`].
///
/// Points are returned in ascending `(x1, x2)` order.
///
/// # Errors
///
/// Returns [`UnsolvableSystem`] if the gradient has neither shape, or if a
/// separable component has real roots that cannot be found exactly.
///
/// [`Lines`]: StationarySet::Lines
/// [`Plane`]: StationarySet::Plane
/// [`Isolated`]: StationarySet::Isolated
pub fn solve_stationary(gradient: &Gradient) -> Result<StationarySet, UnsolvableSystem> {
    if gradient.is_linear() {
        log::trace!("gradient is linear");
        return Ok(solve_linear(gradient));
    }

    let separable = (
        gradient.component(Var::X1).as_univariate(Var::X1),
        gradient.component(Var::X2).as_univariate(Var::X2),
    );
    if let (Some(g1), Some(g2)) = separable {
        log::trace!("gradient is separable");
        return solve_separable(&g1, &g2);
    }

    Err(UnsolvableSystem::NonLinearCoupled)
}

/// One gradient component `a1·x1 + a2·x2 + b`.
struct LinearRow {
    a1: BigRational,
    a2: BigRational,
    b: BigRational,
}

impl LinearRow {
    fn of(gradient: &Gradient, var: Var) -> Self {
        let g = gradient.component(var);
        Self {
            a1: g.coefficient([1, 0]),
            a2: g.coefficient([0, 1]),
            b: g.coefficient([0, 0]),
        }
    }

    /// The line `a1·x1 + a2·x2 = -b`, if the row is not constant.
    fn line(&self) -> Option<Line> {
        Line::new(self.a1.clone(), self.a2.clone(), -self.b.clone()).ok()
    }

    /// Returns `true` if `self = 0` and `other = 0` describe the same set,
    /// given that the coefficient matrix is singular.
    fn agrees_with(&self, other: &Self) -> bool {
        &other.a1 * &self.b == &other.b * &self.a1 && &other.a2 * &self.b == &other.b * &self.a2
    }
}

fn solve_linear(gradient: &Gradient) -> StationarySet {
    let r1 = LinearRow::of(gradient, Var::X1);
    let r2 = LinearRow::of(gradient, Var::X2);

    let det = &r1.a1 * &r2.a2 - &r1.a2 * &r2.a1;
    if !det.is_zero() {
        let x1 = (&r1.a2 * &r2.b - &r2.a2 * &r1.b) / &det;
        let x2 = (&r2.a1 * &r1.b - &r1.a1 * &r2.b) / &det;
        return StationarySet::Isolated(vec![StationaryPoint::new(x1, x2)]);
    }

    // Rank one or zero: the first non-constant row fixes the candidate line.
    let candidate = r1
        .line()
        .map(|line| (line, &r1, &r2))
        .or_else(|| r2.line().map(|line| (line, &r2, &r1)));

    match candidate {
        Some((line, row, other)) if row.agrees_with(other) => StationarySet::Lines(vec![line]),
        Some(_) => StationarySet::Isolated(Vec::new()),
        None if r1.b.is_zero() && r2.b.is_zero() => StationarySet::Plane,
        None => StationarySet::Isolated(Vec::new()),
    }
}

/// The solutions of one separable gradient component.
enum Roots {
    /// The component is identically zero.
    Free,
    Finite(Vec<BigRational>),
}

fn component_roots(g: &Univariate, var: Var) -> Result<Roots, UnsolvableSystem> {
    if g.is_zero() {
        return Ok(Roots::Free);
    }
    rational_roots(g).map(Roots::Finite).map_err(|err| match err {
        RootError::Irrational => UnsolvableSystem::IrrationalRoots { var },
        RootError::TooLarge => UnsolvableSystem::RootSearchTooLarge { var },
    })
}

fn solve_separable(g1: &Univariate, g2: &Univariate) -> Result<StationarySet, UnsolvableSystem> {
    let fixed = |var: Var, value: &BigRational| {
        let (a, b) = match var {
            Var::X1 => (BigRational::one(), BigRational::zero()),
            Var::X2 => (BigRational::zero(), BigRational::one()),
        };
        Line::new(a, b, value.clone())
    };

    let set = match (
        component_roots(g1, Var::X1)?,
        component_roots(g2, Var::X2)?,
    ) {
        (Roots::Free, Roots::Free) => StationarySet::Plane,
        (Roots::Finite(xs), Roots::Free) if xs.is_empty() => StationarySet::Isolated(Vec::new()),
        (Roots::Free, Roots::Finite(ys)) if ys.is_empty() => StationarySet::Isolated(Vec::new()),
        (Roots::Finite(xs), Roots::Free) => {
            StationarySet::Lines(xs.iter().filter_map(|x| fixed(Var::X1, x).ok()).collect())
        }
        (Roots::Free, Roots::Finite(ys)) => {
            StationarySet::Lines(ys.iter().filter_map(|y| fixed(Var::X2, y).ok()).collect())
        }
        (Roots::Finite(xs), Roots::Finite(ys)) => StationarySet::Isolated(
            xs.iter()
                .flat_map(|x| ys.iter().map(|y| StationaryPoint::new(x.clone(), y.clone())))
                .collect(),
        ),
    };
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    use stationary_core::{Polynomial, Variables};

    fn r(n: i64, d: i64) -> BigRational {
        BigRational::new(n.into(), d.into())
    }

    fn solve(src: &str) -> Result<StationarySet, UnsolvableSystem> {
        let f = Polynomial::parse(src, &Variables::default()).unwrap();
        solve_stationary(&Gradient::of(&f))
    }

    fn point(x1: (i64, i64), x2: (i64, i64)) -> StationaryPoint {
        StationaryPoint::new(r(x1.0, x1.1), r(x2.0, x2.1))
    }

    #[test]
    fn invertible_linear_system_has_one_point() {
        // gradient (4x1 - 2x2 - 3, 2x2 - 2x1 - 2)
        let set = solve("2*x1^2 + x2^2 - 2*x1*x2 - 3*x1 - 2*x2").unwrap();
        assert_eq!(set, StationarySet::Isolated(vec![point((5, 2), (7, 2))]));
    }

    #[test]
    fn consistent_singular_system_is_a_line() {
        // gradient (2x1 + 2x2 - 2, 2x1 + 2x2 - 2)
        let set = solve("(x1 + x2 - 1)^2").unwrap();
        let line = Line::new(r(1, 1), r(1, 1), r(1, 1)).unwrap();
        assert_eq!(set, StationarySet::Lines(vec![line]));
        assert!(set.is_continuum());
    }

    #[test]
    fn inconsistent_singular_system_is_empty() {
        // gradient (2x1 + 2x2, 2x1 + 2x2 + 1)
        let set = solve("(x1 + x2)^2 + x2").unwrap();
        assert_eq!(set, StationarySet::Isolated(vec![]));
        assert!(set.is_empty());
    }

    #[test]
    fn linear_in_one_variable_only() {
        // gradient (1, 2x2): ∂f/∂x1 never vanishes
        assert_eq!(solve("x1 + x2^2").unwrap(), StationarySet::Isolated(vec![]));
        // gradient (0, 2x2 - 4): the line x2 = 2
        let line = Line::new(r(0, 1), r(1, 1), r(2, 1)).unwrap();
        assert_eq!(solve("x2^2 - 4*x2").unwrap(), StationarySet::Lines(vec![line]));
    }

    #[test]
    fn constant_function_is_stationary_everywhere() {
        assert_eq!(solve("7").unwrap(), StationarySet::Plane);
    }

    #[test]
    fn separable_cubic_points_in_lexicographic_order() {
        // gradient (3x1² - 3, 3x2² - 12)
        let set = solve("x1^3 - 3*x1 + x2^3 - 12*x2").unwrap();
        assert_eq!(
            set.points(),
            &[
                point((-1, 1), (-2, 1)),
                point((-1, 1), (2, 1)),
                point((1, 1), (-2, 1)),
                point((1, 1), (2, 1)),
            ]
        );
    }

    #[test]
    fn separable_with_free_variable_gives_lines() {
        // gradient (3x1² - 3, 0)
        let set = solve("x1^3 - 3*x1").unwrap();
        let lines = vec![
            Line::new(r(1, 1), r(0, 1), r(-1, 1)).unwrap(),
            Line::new(r(1, 1), r(0, 1), r(1, 1)).unwrap(),
        ];
        assert_eq!(set, StationarySet::Lines(lines));
    }

    #[test]
    fn rootless_component_with_free_variable_is_empty() {
        // f_x1 = 3x1² + 3 never vanishes; f_x2 is identically zero.
        assert_eq!(solve("x1^3 + 3*x1").unwrap(), StationarySet::Isolated(vec![]));
        assert_eq!(solve("x2^3 + x2").unwrap(), StationarySet::Isolated(vec![]));
    }

    #[test]
    fn irrational_roots_are_unsolvable() {
        // gradient (3x1² - 6, 2x2)
        assert_eq!(
            solve("x1^3 - 6*x1 + x2^2"),
            Err(UnsolvableSystem::IrrationalRoots { var: Var::X1 })
        );
    }

    #[test]
    fn coupled_non_linear_system_is_unsolvable() {
        assert_eq!(
            solve("x1^2*x2 + x2^3 - x1"),
            Err(UnsolvableSystem::NonLinearCoupled)
        );
    }
}
