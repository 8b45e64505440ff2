//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and handed to any solver whose types fit.
//!
//! # Event traits
//!
//! - [`HasResidual`] — events that carry a residual (Newton's gradient norm)
//! - [`HasObjective`] — events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//! - [`CanAssumeWorse`] — actions that can signal a worse-than-evaluated outcome
//!
//! # Example
//!
//! ```rust
//! use stationary_core::Observer;
//! use stationary_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct Patience {
//!     remaining: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for Patience {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.residual().is_nan() || self.remaining == 0 {
//!             return Some(A::stop_early());
//!         }
//!         self.remaining -= 1;
//!         None
//!     }
//! }
//! ```

use stationary_core::{GradientProblem, OptimizationProblem};

use stationary_solvers::{newton, optimization::golden_section};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no residual
    /// is available.
    fn residual(&self) -> f64;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no objective
    /// is available.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can signal a worse-than-evaluated outcome.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as worse than the other.
    fn assume_worse() -> Self;
}

impl<P: GradientProblem> HasResidual for newton::Event<'_, P> {
    fn residual(&self) -> f64 {
        newton::Event::residual(self).unwrap_or(f64::NAN)
    }
}

impl<P: OptimizationProblem<1>> HasObjective for golden_section::Event<'_, P> {
    fn objective(&self) -> f64 {
        match self {
            golden_section::Event::Evaluated { point, .. } => point.objective,
            golden_section::Event::ProblemFailed { .. } => f64::NAN,
        }
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for golden_section::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeWorse for golden_section::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}
