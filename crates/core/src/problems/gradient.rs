/// Defines a twice-differentiable function of two variables by its
/// derivatives.
///
/// Numeric stationary-point solvers drive [`gradient`](Self::gradient) to zero
/// using [`hessian`](Self::hessian) as its Jacobian.
pub trait GradientProblem {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes `[∂f/∂x1, ∂f/∂x2]` at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the gradient cannot be computed.
    fn gradient(&self, x: &[f64; 2]) -> Result<[f64; 2], Self::Error>;

    /// Computes the matrix of second partial derivatives at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the Hessian cannot be computed.
    fn hessian(&self, x: &[f64; 2]) -> Result<[[f64; 2]; 2], Self::Error>;
}
