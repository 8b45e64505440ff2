use stationary_core::GradientProblem;

/// Events emitted by the Newton solver, one per iterate.
pub enum Event<'a, P>
where
    P: GradientProblem,
{
    /// The gradient was computed at `x`.
    Evaluated {
        iter: usize,
        x: [f64; 2],
        gradient: [f64; 2],
    },

    /// The gradient or Hessian could not be computed at `x`.
    ProblemFailed {
        iter: usize,
        x: [f64; 2],
        error: &'a P::Error,
    },
}

impl<P> Event<'_, P>
where
    P: GradientProblem,
{
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Evaluated { iter, .. } | Self::ProblemFailed { iter, .. } => *iter,
        }
    }

    /// Returns the iterate this event refers to.
    #[must_use]
    pub fn x(&self) -> [f64; 2] {
        match self {
            Self::Evaluated { x, .. } | Self::ProblemFailed { x, .. } => *x,
        }
    }

    /// Returns the gradient norm, if the gradient was computed.
    #[must_use]
    pub fn residual(&self) -> Option<f64> {
        match self {
            Self::Evaluated { gradient, .. } => Some(gradient[0].hypot(gradient[1])),
            Self::ProblemFailed { .. } => None,
        }
    }
}

impl<P> std::fmt::Debug for Event<'_, P>
where
    P: GradientProblem,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Evaluated { iter, x, gradient } => f
                .debug_struct("Evaluated")
                .field("iter", iter)
                .field("x", x)
                .field("gradient", gradient)
                .finish(),
            Self::ProblemFailed { iter, x, error } => f
                .debug_struct("ProblemFailed")
                .field("iter", iter)
                .field("x", x)
                .field("error", &error.to_string())
                .finish(),
        }
    }
}
