use stationary_core::{InputError, Var};
use thiserror::Error;

/// Why the gradient system has no closed-form solution set.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UnsolvableSystem {
    /// The gradient is neither linear nor separable.
    #[error("gradient system is non-linear and couples both variables")]
    NonLinearCoupled,

    /// The gradient component for `var` has real roots that are not rational.
    #[error("∂f/∂{var:?} has irrational real roots")]
    IrrationalRoots { var: Var },

    /// The coefficients of the gradient component for `var` are too large to
    /// search for rational roots.
    #[error("∂f/∂{var:?} has coefficients too large for an exact root search")]
    RootSearchTooLarge { var: Var },
}

/// Errors that can occur during a stationary-point analysis.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("unsolvable system: {0}")]
    Unsolvable(#[from] UnsolvableSystem),
}
