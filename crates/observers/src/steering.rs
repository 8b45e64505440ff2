use stationary_core::Observer;

use crate::traits::{CanAssumeWorse, CanStopEarly, HasObjective, HasResidual};

/// Stops a solve once the residual falls to `tolerance`.
///
/// Useful for accepting a looser answer than the solver's own convergence
/// test, e.g. when seeding many Newton solves. Events without a residual are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAtResidual {
    tolerance: f64,
}

impl StopAtResidual {
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for StopAtResidual {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.residual().abs() <= self.tolerance).then(A::stop_early)
    }
}

/// Treats every failed evaluation as worse than the other point.
///
/// With golden section search this lets the bracket shrink away from regions
/// where the objective cannot be computed instead of ending the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipFailures {
    skipped: usize,
}

impl SkipFailures {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of failures skipped so far.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<E: HasObjective, A: CanAssumeWorse> Observer<E, A> for SkipFailures {
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.objective().is_nan() {
            self.skipped += 1;
            Some(A::assume_worse())
        } else {
            None
        }
    }
}

impl<E: HasObjective, A: CanAssumeWorse> Observer<E, A> for &mut SkipFailures {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
