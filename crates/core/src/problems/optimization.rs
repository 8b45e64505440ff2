/// Defines a scalar objective over `N` solver variables.
///
/// Solvers search for the `x` that minimizes or maximizes the objective; the
/// direction is chosen by the solver entry point, not by the problem.
///
/// The const generic `N` is the number of solver variables.
/// For example, `N = 1` represents a search along a single parameter.
pub trait OptimizationProblem<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the objective value at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn objective(&self, x: &[f64; N]) -> Result<f64, Self::Error>;
}
