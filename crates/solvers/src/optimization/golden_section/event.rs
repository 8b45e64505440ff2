use stationary_core::{Observer, OptimizationProblem};

use super::{Action, Point};

/// Events emitted by the golden section solver.
///
/// Each event carries the point just evaluated (or attempted) and the `other`
/// interior point kept alongside it. Observers can compare
/// against `other` to decide whether to stop early or to steer the search
/// with [`Action::AssumeWorse`].
pub enum Event<'a, P>
where
    P: OptimizationProblem<1>,
{
    /// Successful evaluation of an interior point.
    Evaluated { point: Point, other: Point },

    /// The objective could not be computed.
    ProblemFailed {
        x: f64,
        other: Point,
        error: &'a P::Error,
    },
}

impl<P> Event<'_, P>
where
    P: OptimizationProblem<1>,
{
    /// Returns the x value that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Evaluated { point, .. } => point.x,
            Self::ProblemFailed { x, .. } => *x,
        }
    }

    /// Returns the other interior point.
    #[must_use]
    pub fn other(&self) -> Point {
        match self {
            Self::Evaluated { other, .. } | Self::ProblemFailed { other, .. } => *other,
        }
    }

    pub(super) fn emit_failure<Obs>(
        x: f64,
        other: Point,
        error: &P::Error,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, P>, Action>,
    {
        observer.observe(&Event::ProblemFailed { x, other, error })
    }
}

impl<P> std::fmt::Debug for Event<'_, P>
where
    P: OptimizationProblem<1>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Evaluated { point, other } => f
                .debug_struct("Evaluated")
                .field("point", point)
                .field("other", other)
                .finish(),
            Self::ProblemFailed { x, other, error } => f
                .debug_struct("ProblemFailed")
                .field("x", x)
                .field("other", other)
                .field("error", &error.to_string())
                .finish(),
        }
    }
}
