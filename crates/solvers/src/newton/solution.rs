/// Indicates how the Newton solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The gradient norm or the step length fell within tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub status: Status,

    /// Final iterate.
    pub x: [f64; 2],

    /// Gradient at `x`.
    pub gradient: [f64; 2],

    /// Number of Newton steps taken.
    pub iters: usize,
}

impl Solution {
    /// Returns the Euclidean norm of the final gradient.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.gradient[0].hypot(self.gradient[1])
    }
}
