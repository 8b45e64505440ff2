//! Exact first and second derivatives of a bivariate polynomial.

use std::convert::Infallible;

use num_rational::BigRational;
use num_traits::ToPrimitive;

use crate::{GradientProblem, Polynomial, Var};

/// The gradient `[∂f/∂x1, ∂f/∂x2]` as polynomials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    components: [Polynomial; 2],
}

impl Gradient {
    /// Differentiates `f` once in each variable.
    #[must_use]
    pub fn of(f: &Polynomial) -> Self {
        Self {
            components: [f.derivative(Var::X1), f.derivative(Var::X2)],
        }
    }

    /// Returns the partial derivative with respect to `var`.
    #[must_use]
    pub fn component(&self, var: Var) -> &Polynomial {
        &self.components[var.index()]
    }

    #[must_use]
    pub fn components(&self) -> &[Polynomial; 2] {
        &self.components
    }

    /// Returns `true` if both components are at most linear.
    #[must_use]
    pub fn is_linear(&self) -> bool {
        self.components.iter().all(|c| c.degree() <= 1)
    }

    /// Evaluates exactly at `point`.
    #[must_use]
    pub fn at(&self, point: &[BigRational; 2]) -> [BigRational; 2] {
        [self.components[0].eval(point), self.components[1].eval(point)]
    }

    /// Evaluates in floating point at `point`.
    #[must_use]
    pub fn at_f64(&self, point: [f64; 2]) -> [f64; 2] {
        [
            self.components[0].eval_f64(point),
            self.components[1].eval_f64(point),
        ]
    }
}

/// The symbolic Hessian, a 2×2 matrix of second partial derivatives.
///
/// The off-diagonal entries are differentiated independently
/// (`∂²f/∂x2∂x1` from the first gradient component, `∂²f/∂x1∂x2` from the
/// second) and always agree for polynomials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hessian {
    entries: [[Polynomial; 2]; 2],
}

impl Hessian {
    /// Differentiates each gradient component in each variable.
    #[must_use]
    pub fn of(gradient: &Gradient) -> Self {
        let row = |var: Var| {
            let g = gradient.component(var);
            [g.derivative(Var::X1), g.derivative(Var::X2)]
        };
        let hessian = Self {
            entries: [row(Var::X1), row(Var::X2)],
        };
        debug_assert!(hessian.is_symmetric());
        hessian
    }

    /// Returns the entry `∂²f / ∂row ∂col`.
    #[must_use]
    pub fn entry(&self, row: Var, col: Var) -> &Polynomial {
        &self.entries[row.index()][col.index()]
    }

    #[must_use]
    pub fn entries(&self) -> &[[Polynomial; 2]; 2] {
        &self.entries
    }

    /// Returns `true` if the mixed partials are identical.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.entries[0][1] == self.entries[1][0]
    }

    /// Returns the symbolic determinant `f_x1x1 * f_x2x2 - f_x1x2 * f_x2x1`.
    #[must_use]
    pub fn determinant(&self) -> Polynomial {
        let [[a, b], [c, d]] = &self.entries;
        &(a * d) - &(b * c)
    }

    /// Evaluates every entry exactly at `point`.
    #[must_use]
    pub fn at(&self, point: &[BigRational; 2]) -> HessianAt {
        let eval = |p: &Polynomial| p.eval(point);
        let [[a, b], [c, d]] = &self.entries;
        HessianAt {
            entries: [[eval(a), eval(b)], [eval(c), eval(d)]],
        }
    }

    /// Evaluates every entry in floating point at `point`.
    #[must_use]
    pub fn at_f64(&self, point: [f64; 2]) -> [[f64; 2]; 2] {
        let [[a, b], [c, d]] = &self.entries;
        [
            [a.eval_f64(point), b.eval_f64(point)],
            [c.eval_f64(point), d.eval_f64(point)],
        ]
    }
}

/// A Hessian evaluated at a point, with exact entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HessianAt {
    entries: [[BigRational; 2]; 2],
}

impl HessianAt {
    #[must_use]
    pub fn new(entries: [[BigRational; 2]; 2]) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[[BigRational; 2]; 2] {
        &self.entries
    }

    /// Returns `∂²f/∂x1²`.
    #[must_use]
    pub fn f_x1x1(&self) -> &BigRational {
        &self.entries[0][0]
    }

    #[must_use]
    pub fn determinant(&self) -> BigRational {
        let [[a, b], [c, d]] = &self.entries;
        a * d - b * c
    }

    /// Returns the entries converted to `f64`.
    #[must_use]
    pub fn to_f64(&self) -> [[f64; 2]; 2] {
        let f = |r: &BigRational| r.to_f64().unwrap_or(f64::NAN);
        let [[a, b], [c, d]] = &self.entries;
        [[f(a), f(b)], [f(c), f(d)]]
    }
}

/// The gradient and Hessian of a function, derived together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivatives {
    pub gradient: Gradient,
    pub hessian: Hessian,
}

impl Derivatives {
    /// Differentiates `f` exactly, twice.
    #[must_use]
    pub fn of(f: &Polynomial) -> Self {
        let gradient = Gradient::of(f);
        let hessian = Hessian::of(&gradient);
        Self { gradient, hessian }
    }
}

impl GradientProblem for Derivatives {
    type Error = Infallible;

    fn gradient(&self, x: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
        Ok(self.gradient.at_f64(*x))
    }

    fn hessian(&self, x: &[f64; 2]) -> Result<[[f64; 2]; 2], Self::Error> {
        Ok(self.hessian.at_f64(*x))
    }
}
