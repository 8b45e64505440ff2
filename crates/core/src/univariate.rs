use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// A polynomial in one variable with exact coefficients.
///
/// Coefficients are stored lowest power first with trailing zeros trimmed, so
/// the zero polynomial has no coefficients.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Univariate {
    coeffs: Vec<BigRational>,
}

impl Univariate {
    /// Creates a polynomial from coefficients, lowest power first.
    #[must_use]
    pub fn new(mut coeffs: Vec<BigRational>) -> Self {
        while coeffs.last().is_some_and(Zero::is_zero) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// A constant polynomial.
    #[must_use]
    pub fn constant(value: BigRational) -> Self {
        Self::new(vec![value])
    }

    /// Returns the coefficients, lowest power first.
    #[must_use]
    pub fn coefficients(&self) -> &[BigRational] {
        &self.coeffs
    }

    /// Returns `true` for the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Returns the leading coefficient (zero for the zero polynomial).
    #[must_use]
    pub fn leading(&self) -> BigRational {
        self.coeffs.last().cloned().unwrap_or_else(BigRational::zero)
    }

    /// Evaluates exactly at `t` using Horner's scheme.
    #[must_use]
    pub fn eval(&self, t: &BigRational) -> BigRational {
        self.coeffs
            .iter()
            .rev()
            .fold(BigRational::zero(), |acc, c| acc * t + c)
    }

    /// Returns the derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(k, c)| c * BigRational::from_integer(k.into()))
                .collect(),
        )
    }

    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let zero = BigRational::zero();
        Self::new(
            (0..len)
                .map(|k| {
                    self.coeffs.get(k).unwrap_or(&zero) + rhs.coeffs.get(k).unwrap_or(&zero)
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![BigRational::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Self::new(coeffs)
    }

    #[must_use]
    pub fn scale(&self, factor: &BigRational) -> Self {
        Self::new(self.coeffs.iter().map(|c| c * factor).collect())
    }

    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        (0..exp).fold(Self::constant(BigRational::one()), |acc, _| acc.mul(self))
    }

    /// Polynomial long division, returning `(quotient, remainder)`.
    ///
    /// Returns `None` when dividing by the zero polynomial.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        let divisor_degree = divisor.degree()?;
        let lead = divisor.leading();

        let mut remainder = self.coeffs.clone();
        let Some(quotient_len) = remainder.len().checked_sub(divisor_degree) else {
            return Some((Self::zero(), self.clone()));
        };
        let mut quotient = vec![BigRational::zero(); quotient_len];

        for k in (0..quotient_len).rev() {
            let factor = &remainder[k + divisor_degree] / &lead;
            if factor.is_zero() {
                continue;
            }
            for (j, d) in divisor.coeffs.iter().enumerate() {
                remainder[k + j] -= &factor * d;
            }
            quotient[k] = factor;
        }

        remainder.truncate(divisor_degree);
        Some((Self::new(quotient), Self::new(remainder)))
    }

    /// Returns the sign of the polynomial as `t → +∞` (or `t → -∞` when
    /// `positive` is false).
    ///
    /// The sign is `0` for the zero polynomial.
    #[must_use]
    pub fn sign_at_infinity(&self, positive: bool) -> i8 {
        let Some(degree) = self.degree() else {
            return 0;
        };
        let lead = self.leading();
        let sign: i8 = if lead.is_positive() { 1 } else { -1 };
        if positive || degree % 2 == 0 {
            sign
        } else {
            -sign
        }
    }
}
