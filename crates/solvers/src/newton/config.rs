use thiserror::Error;

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
    step_tol: f64,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and non-negative, got {0}")]
    ResidualTol(f64),

    #[error("step_tol must be finite and non-negative, got {0}")]
    StepTol(f64),
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(50, 1e-10, 1e-14).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// The solve converges once the gradient norm is at most `residual_tol`
    /// or the last Newton step was at most `step_tol` long.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(max_iters: usize, residual_tol: f64, step_tol: f64) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol(residual_tol));
        }
        if !step_tol.is_finite() || step_tol < 0.0 {
            return Err(ConfigError::StepTol(step_tol));
        }

        Ok(Self {
            max_iters,
            residual_tol,
            step_tol,
        })
    }

    /// Returns the maximum number of Newton steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    #[must_use]
    pub fn step_tol(&self) -> f64 {
        self.step_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(
            Config::new(10, f64::NAN, 0.0).map_err(|e| e.to_string()),
            Err("residual_tol must be finite and non-negative, got NaN".to_owned())
        );
        assert_eq!(Config::new(10, 0.0, -1e-3), Err(ConfigError::StepTol(-1e-3)));
    }

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 50);
        assert!(config.residual_tol() > 0.0);
    }
}
