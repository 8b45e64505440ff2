use thiserror::Error;

/// Tolerance for classifying a Hessian known only in floating point.
///
/// Entries are judged against the scale `s = max(1, max |H_ij|)`. The
/// determinant counts as zero when `|det| <= det_rel · s²` and `f_x1x1` when
/// `|f_x1x1| <= det_rel · s`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance {
    det_rel: f64,
}

/// Errors that can occur when validating a [`Tolerance`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ToleranceError {
    #[error("det_rel must be finite and non-negative, got {0}")]
    DetRel(f64),
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { det_rel: 1e-9 }
    }
}

impl Tolerance {
    /// Creates a tolerance relative to the Hessian's scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `det_rel` is negative or non-finite.
    pub fn new(det_rel: f64) -> Result<Self, ToleranceError> {
        if !det_rel.is_finite() || det_rel < 0.0 {
            return Err(ToleranceError::DetRel(det_rel));
        }
        Ok(Self { det_rel })
    }

    #[must_use]
    pub fn det_rel(&self) -> f64 {
        self.det_rel
    }

    /// Returns the scale `max(1, max |H_ij|)` of `hessian`.
    pub(super) fn scale(hessian: &[[f64; 2]; 2]) -> f64 {
        hessian.iter().flatten().fold(1.0, |acc: f64, h| acc.max(h.abs()))
    }
}
