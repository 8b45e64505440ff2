use stationary_core::{Derivatives, Polynomial};
use thiserror::Error;

use crate::newton;

use super::{Classification, Tolerance, classify_f64};

/// Configuration for [`analyze_numeric`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericConfig {
    newton: newton::Config,
    tolerance: Tolerance,
    merge_tol: f64,
}

/// Errors that can occur when validating a [`NumericConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum NumericConfigError {
    #[error("merge_tol must be finite and non-negative, got {0}")]
    MergeTol(f64),
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self {
            newton: newton::Config::default(),
            tolerance: Tolerance::default(),
            merge_tol: 1e-6,
        }
    }
}

impl NumericConfig {
    /// Creates a config; converged points closer than `merge_tol` are
    /// reported once.
    ///
    /// # Errors
    ///
    /// Returns an error if `merge_tol` is negative or non-finite.
    pub fn new(
        newton: newton::Config,
        tolerance: Tolerance,
        merge_tol: f64,
    ) -> Result<Self, NumericConfigError> {
        if !merge_tol.is_finite() || merge_tol < 0.0 {
            return Err(NumericConfigError::MergeTol(merge_tol));
        }
        Ok(Self {
            newton,
            tolerance,
            merge_tol,
        })
    }

    #[must_use]
    pub fn newton(&self) -> &newton::Config {
        &self.newton
    }

    #[must_use]
    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    #[must_use]
    pub fn merge_tol(&self) -> f64 {
        self.merge_tol
    }
}

/// A stationary point located numerically.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericRecord {
    pub x: [f64; 2],
    pub hessian: [[f64; 2]; 2],
    pub classification: Classification,
    pub value: f64,
}

/// The result of [`analyze_numeric`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericAnalysis {
    /// Distinct converged points in ascending `(x1, x2)` order.
    pub records: Vec<NumericRecord>,

    /// Seeds from which Newton's method did not converge.
    pub unconverged: Vec<[f64; 2]>,
}

/// Locates stationary points of `f` with Newton's method from each seed.
///
/// This is the fallback when [`solve_stationary`](super::solve_stationary)
/// reports an unsolvable system. Each seed either converges to a point, which
/// is classified with the configured [`Tolerance`], or is listed as
/// unconverged. Nothing is claimed about points no seed reaches.
#[must_use]
pub fn analyze_numeric(f: &Polynomial, seeds: &[[f64; 2]], config: &NumericConfig) -> NumericAnalysis {
    let derivatives = Derivatives::of(f);
    let mut analysis = NumericAnalysis::default();

    for &seed in seeds {
        let x = match newton::solve_unobserved(&derivatives, seed, config.newton()) {
            Ok(solution) if solution.status == newton::Status::Converged => solution.x,
            Ok(solution) => {
                log::debug!("seed {seed:?} did not converge after {} steps", solution.iters);
                analysis.unconverged.push(seed);
                continue;
            }
            Err(err) => {
                log::debug!("seed {seed:?} failed: {err}");
                analysis.unconverged.push(seed);
                continue;
            }
        };

        let is_known = analysis.records.iter().any(|record| {
            (record.x[0] - x[0]).hypot(record.x[1] - x[1]) <= config.merge_tol()
        });
        if is_known {
            continue;
        }

        let hessian = derivatives.hessian.at_f64(x);
        let classification = classify_f64(&hessian, config.tolerance());
        log::trace!("seed {seed:?} converged to {x:?}: {classification}");
        analysis.records.push(NumericRecord {
            x,
            hessian,
            classification,
            value: f.eval_f64(x),
        });
    }

    analysis
        .records
        .sort_by(|a, b| a.x[0].total_cmp(&b.x[0]).then(a.x[1].total_cmp(&b.x[1])));
    analysis
}
