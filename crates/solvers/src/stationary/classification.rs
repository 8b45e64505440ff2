use std::cmp::Ordering;
use std::fmt;

use num_rational::BigRational;
use num_traits::Zero;
use stationary_core::HessianAt;

use super::Tolerance;

/// The result of the second-derivative test at a stationary point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    LocalMinimum,
    LocalMaximum,
    SaddlePoint,

    /// The test is inconclusive; higher-order terms would be needed.
    Degenerate,
}

impl Classification {
    /// Applies the second-derivative test to the signs of `det(H)` and
    /// `f_x1x1`.
    ///
    /// A positive determinant with `f_x1x1 = 0` cannot occur for a real
    /// symmetric matrix, but is reported as [`Self::Degenerate`] rather than
    /// guessed.
    #[must_use]
    pub fn from_signs(det: Ordering, f_x1x1: Ordering) -> Self {
        match (det, f_x1x1) {
            (Ordering::Greater, Ordering::Greater) => Self::LocalMinimum,
            (Ordering::Greater, Ordering::Less) => Self::LocalMaximum,
            (Ordering::Less, _) => Self::SaddlePoint,
            (Ordering::Greater, Ordering::Equal) | (Ordering::Equal, _) => Self::Degenerate,
        }
    }

    /// Returns `true` for a local minimum or maximum.
    #[must_use]
    pub fn is_extremum(self) -> bool {
        matches!(self, Self::LocalMinimum | Self::LocalMaximum)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LocalMinimum => "local minimum",
            Self::LocalMaximum => "local maximum",
            Self::SaddlePoint => "saddle point",
            Self::Degenerate => "degenerate (inconclusive)",
        })
    }
}

/// Classifies a stationary point exactly from its Hessian and `f_x1x1`.
///
/// `f_x1x1` is normally `hessian.f_x1x1()`; it is taken separately so callers
/// holding only the determinant's inputs can apply the same rule.
#[must_use]
pub fn classify(hessian: &HessianAt, f_x1x1: &BigRational) -> Classification {
    let zero = BigRational::zero();
    Classification::from_signs(hessian.determinant().cmp(&zero), f_x1x1.cmp(&zero))
}

/// Classifies a floating-point Hessian using `tolerance` for the zero tests.
///
/// A Hessian with non-finite entries is [`Classification::Degenerate`].
#[must_use]
pub fn classify_f64(hessian: &[[f64; 2]; 2], tolerance: &Tolerance) -> Classification {
    if !hessian.iter().flatten().all(|h| h.is_finite()) {
        return Classification::Degenerate;
    }

    let scale = Tolerance::scale(hessian);
    let [[a, b], [c, d]] = *hessian;
    let det = a * d - b * c;

    let sign = |value: f64, tol: f64| {
        if value.abs() <= tol {
            Ordering::Equal
        } else if value > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    };

    Classification::from_signs(
        sign(det, tolerance.det_rel() * scale * scale),
        sign(a, tolerance.det_rel() * scale),
    )
}
