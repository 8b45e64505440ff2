use std::fmt;

use num_rational::BigRational;
use num_traits::{One, Zero};
use thiserror::Error;

use crate::{Polynomial, Univariate, Var, Variables};

/// Errors that can occur when constructing a [`Line`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    #[error("at least one of the x1 and x2 coefficients must be non-zero")]
    Degenerate,

    #[error("line coefficients must be finite")]
    NonFinite,
}

/// The line `a·x1 + b·x2 = c` with exact coefficients.
///
/// Coefficients are normalized so the first non-zero of `a` and `b` is one;
/// two lines describing the same point set compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    a: BigRational,
    b: BigRational,
    c: BigRational,
}

impl Line {
    /// Creates the line `a·x1 + b·x2 = c`.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::Degenerate`] if `a` and `b` are both zero.
    pub fn new(a: BigRational, b: BigRational, c: BigRational) -> Result<Self, LineError> {
        let pivot = if a.is_zero() { b.clone() } else { a.clone() };
        if pivot.is_zero() {
            return Err(LineError::Degenerate);
        }
        Ok(Self {
            a: a / &pivot,
            b: b / &pivot,
            c: c / &pivot,
        })
    }

    /// Creates a line from floating-point coefficients, converted exactly.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::NonFinite`] for NaN or infinite coefficients and
    /// [`LineError::Degenerate`] as [`Self::new`].
    pub fn from_f64(a: f64, b: f64, c: f64) -> Result<Self, LineError> {
        let exact = |v: f64| BigRational::from_float(v).ok_or(LineError::NonFinite);
        Self::new(exact(a)?, exact(b)?, exact(c)?)
    }

    #[must_use]
    pub fn a(&self) -> &BigRational {
        &self.a
    }

    #[must_use]
    pub fn b(&self) -> &BigRational {
        &self.b
    }

    #[must_use]
    pub fn c(&self) -> &BigRational {
        &self.c
    }

    /// Returns `true` if `point` lies on the line.
    #[must_use]
    pub fn contains(&self, point: &[BigRational; 2]) -> bool {
        &self.a * &point[0] + &self.b * &point[1] == self.c
    }

    /// Returns `[x1(t), x2(t)]` tracing the line at unit speed in the free
    /// coordinate.
    ///
    /// When `b ≠ 0` the parameter is `x1` itself; otherwise the line is
    /// vertical and the parameter is `x2`.
    #[must_use]
    pub fn parametrize(&self) -> [Univariate; 2] {
        let one = BigRational::one();
        let zero = BigRational::zero();
        if self.b.is_zero() {
            // a is normalized to one
            [
                Univariate::constant(self.c.clone()),
                Univariate::new(vec![zero, one]),
            ]
        } else {
            [
                Univariate::new(vec![zero, one]),
                Univariate::new(vec![&self.c / &self.b, -(&self.a / &self.b)]),
            ]
        }
    }

    /// Returns the point at parameter `t` of [`Self::parametrize`].
    #[must_use]
    pub fn point_at(&self, t: &BigRational) -> [BigRational; 2] {
        let [p, q] = self.parametrize();
        [p.eval(t), q.eval(t)]
    }

    /// Formats the line in the names of `vars`, as `x - 2*y = 3`.
    #[must_use]
    pub fn display_with<'a>(&'a self, vars: &'a Variables) -> LineDisplay<'a> {
        LineDisplay { line: self, vars }
    }
}

/// Formats as `x1 + x2 = 4`.
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(&Variables::default()), f)
    }
}

/// A [`Line`] formatted in named variables; see [`Line::display_with`].
#[derive(Debug, Clone, Copy)]
pub struct LineDisplay<'a> {
    line: &'a Line,
    vars: &'a Variables,
}

impl fmt::Display for LineDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let term = |var: Var, coeff: &BigRational| {
            Polynomial::var(self.vars.clone(), var).scale(coeff)
        };
        let lhs = &term(Var::X1, &self.line.a) + &term(Var::X2, &self.line.b);
        write!(f, "{lhs} = {}", self.line.c)
    }
}
