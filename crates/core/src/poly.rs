//! Exact bivariate polynomials.
//!
//! A [`Polynomial`] maps exponent pairs `[i, j]` (for `x1^i * x2^j`) to exact
//! rational coefficients. Zero coefficients are never stored, so two
//! polynomials are equal exactly when they have the same terms and variables.

mod display;
mod parse;

use std::collections::BTreeMap;
use std::ops::{Add, Mul, Neg, Sub};

use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use crate::{InputError, MAX_EXPONENT, Univariate, Var, Variables};

/// Exponents of `x1` and `x2` in a monomial.
pub type Exponents = [u32; 2];

/// A polynomial in two declared real variables with exact coefficients.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynomial {
    vars: Variables,
    terms: BTreeMap<Exponents, BigRational>,
}

impl Polynomial {
    /// The zero polynomial.
    #[must_use]
    pub fn zero(vars: Variables) -> Self {
        Self {
            vars,
            terms: BTreeMap::new(),
        }
    }

    /// A constant polynomial.
    #[must_use]
    pub fn constant(vars: Variables, value: BigRational) -> Self {
        let mut poly = Self::zero(vars);
        poly.add_term([0, 0], value);
        poly
    }

    /// The polynomial consisting of a single variable.
    #[must_use]
    pub fn var(vars: Variables, var: Var) -> Self {
        let mut exps = [0, 0];
        exps[var.index()] = 1;
        let mut poly = Self::zero(vars);
        poly.add_term(exps, BigRational::from_integer(1.into()));
        poly
    }

    /// Builds a polynomial from exact terms, summing repeated exponents.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::ExponentTooLarge`] if an exponent exceeds
    /// [`MAX_EXPONENT`]; `position` is the index of the offending term.
    pub fn from_terms<I>(vars: Variables, terms: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = (Exponents, BigRational)>,
    {
        let mut poly = Self::zero(vars);
        for (position, (exps, coeff)) in terms.into_iter().enumerate() {
            if exps.iter().any(|&e| e > MAX_EXPONENT) {
                return Err(InputError::ExponentTooLarge { position });
            }
            poly.add_term(exps, coeff);
        }
        Ok(poly)
    }

    /// Builds a polynomial from floating-point terms.
    ///
    /// Each coefficient is converted to the exact rational it represents.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NonFiniteCoefficient`] for NaN or infinite
    /// coefficients, and [`InputError::ExponentTooLarge`] as [`Self::from_terms`].
    pub fn from_f64_terms<I>(vars: Variables, terms: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = (Exponents, f64)>,
    {
        let exact = terms
            .into_iter()
            .map(|(exps, c)| {
                BigRational::from_float(c)
                    .map(|r| (exps, r))
                    .ok_or_else(|| InputError::NonFiniteCoefficient(c.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_terms(vars, exact)
    }

    /// Parses a polynomial written in the declared variables.
    ///
    /// The grammar accepts `+ - * /`, `^` or `**` with non-negative integer
    /// exponents, parentheses, and decimal or scientific literals, which are
    /// read as exact rationals. Division is only allowed by a non-zero
    /// constant.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the text is not a polynomial in `vars`.
    pub fn parse(source: &str, vars: &Variables) -> Result<Self, InputError> {
        parse::parse(source, vars)
    }

    /// Returns the declared variables.
    #[must_use]
    pub fn variables(&self) -> &Variables {
        &self.vars
    }

    /// Iterates over the non-zero terms in ascending exponent order.
    pub fn terms(&self) -> impl Iterator<Item = (&Exponents, &BigRational)> {
        self.terms.iter()
    }

    /// Returns the coefficient of `x1^i * x2^j`.
    #[must_use]
    pub fn coefficient(&self, exps: Exponents) -> BigRational {
        self.terms.get(&exps).cloned().unwrap_or_else(BigRational::zero)
    }

    /// Returns `true` if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the constant value if the polynomial has no variable terms.
    #[must_use]
    pub fn as_constant(&self) -> Option<BigRational> {
        match self.terms.len() {
            0 => Some(BigRational::zero()),
            1 => self.terms.get(&[0, 0]).cloned(),
            _ => None,
        }
    }

    /// Returns the total degree; the zero polynomial has degree 0.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.terms.keys().map(|[i, j]| i + j).max().unwrap_or(0)
    }

    /// Returns the highest power of `var` appearing in any term.
    #[must_use]
    pub fn degree_in(&self, var: Var) -> u32 {
        self.terms
            .keys()
            .map(|exps| exps[var.index()])
            .max()
            .unwrap_or(0)
    }

    /// Differentiates with respect to `var`.
    #[must_use]
    pub fn derivative(&self, var: Var) -> Self {
        let k = var.index();
        let mut result = Self::zero(self.vars.clone());
        for (exps, coeff) in &self.terms {
            let power = exps[k];
            if power == 0 {
                continue;
            }
            let mut lowered = *exps;
            lowered[k] -= 1;
            result.add_term(lowered, coeff * BigRational::from_integer(power.into()));
        }
        result
    }

    /// Evaluates exactly at `point`.
    #[must_use]
    pub fn eval(&self, point: &[BigRational; 2]) -> BigRational {
        self.terms
            .iter()
            .fold(BigRational::zero(), |acc, ([i, j], coeff)| {
                let x1 = num_traits::pow(point[0].clone(), *i as usize);
                let x2 = num_traits::pow(point[1].clone(), *j as usize);
                acc + coeff * x1 * x2
            })
    }

    /// Evaluates in floating point at `point`.
    #[must_use]
    pub fn eval_f64(&self, point: [f64; 2]) -> f64 {
        self.terms
            .iter()
            .map(|([i, j], coeff)| {
                let c = coeff.to_f64().unwrap_or(f64::NAN);
                c * powi(point[0], *i) * powi(point[1], *j)
            })
            .sum()
    }

    /// Returns the polynomial as univariate in `var` if the other variable
    /// does not appear. Constants are univariate in either variable.
    #[must_use]
    pub fn as_univariate(&self, var: Var) -> Option<Univariate> {
        let other = var.other().index();
        if self.terms.keys().any(|exps| exps[other] != 0) {
            return None;
        }
        let mut coeffs = vec![BigRational::zero(); self.degree_in(var) as usize + 1];
        for (exps, coeff) in &self.terms {
            coeffs[exps[var.index()] as usize] = coeff.clone();
        }
        Some(Univariate::new(coeffs))
    }

    /// Substitutes `x1 = p(t)` and `x2 = q(t)`, giving a polynomial in `t`.
    #[must_use]
    pub fn substitute(&self, p: &Univariate, q: &Univariate) -> Univariate {
        self.terms
            .iter()
            .fold(Univariate::zero(), |acc, ([i, j], coeff)| {
                let term = p.pow(*i).mul(&q.pow(*j)).scale(coeff);
                acc.add(&term)
            })
    }

    /// Raises to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        let one = Self::constant(self.vars.clone(), BigRational::from_integer(1.into()));
        (0..exp).fold(one, |acc, _| &acc * self)
    }

    /// Multiplies every coefficient by `factor`.
    #[must_use]
    pub fn scale(&self, factor: &BigRational) -> Self {
        let mut result = Self::zero(self.vars.clone());
        for (exps, coeff) in &self.terms {
            result.add_term(*exps, coeff * factor);
        }
        result
    }

    fn add_term(&mut self, exps: Exponents, coeff: BigRational) {
        if coeff.is_zero() {
            return;
        }
        let entry = self.terms.entry(exps).or_insert_with(BigRational::zero);
        *entry += coeff;
        if entry.is_zero() {
            self.terms.remove(&exps);
        }
    }
}

fn powi(x: f64, n: u32) -> f64 {
    i32::try_from(n).map_or_else(|_| x.powf(f64::from(n)), |n| x.powi(n))
}

// Binary operators keep the variables of the left operand.

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        debug_assert_eq!(self.vars, rhs.vars);
        let mut result = self.clone();
        for (exps, coeff) in &rhs.terms {
            result.add_term(*exps, coeff.clone());
        }
        result
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self + &(-rhs)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial {
            vars: self.vars.clone(),
            terms: self
                .terms
                .iter()
                .map(|(exps, coeff)| (*exps, -coeff))
                .collect(),
        }
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        debug_assert_eq!(self.vars, rhs.vars);
        let mut result = Polynomial::zero(self.vars.clone());
        for ([i1, j1], a) in &self.terms {
            for ([i2, j2], b) in &rhs.terms {
                result.add_term([i1 + i2, j1 + j2], a * b);
            }
        }
        result
    }
}
