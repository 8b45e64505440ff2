//! Golden section search for single-parameter optimization.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum (or maximum) of a unimodal function
//! on a bounded interval. It keeps two interior points positioned by the
//! golden ratio, compares their objectives, and shrinks the bracket toward the
//! better one, reusing one interior evaluation per step.
//!
//! Constrained searches in this crate use it to refine an extremum once a
//! coarse sample has bracketed it, e.g. the angle of an extremum on a circle.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation after initialization:
//!
//! - [`Event::Evaluated`] — the objective was computed
//! - [`Event::ProblemFailed`] — the problem returned an error
//!
//! Each event includes `other`, the interior point that survives the step.
//! Initialization evaluates two points but emits only one event.
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::AssumeWorse`] to treat the point as worse than `other`.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod init;
mod point;
mod search;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};

use stationary_core::{Observer, OptimizationProblem};

use bracket::Goal;
use search::search;

/// Finds the minimum of the objective on `bounds`.
///
/// See the [module docs](self) for event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the problem fails during evaluation and the observer
/// does not return [`Action::AssumeWorse`] to recover.
pub fn minimize<P, Obs>(
    problem: &P,
    bounds: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    P: OptimizationProblem<1>,
    Obs: for<'a> Observer<Event<'a, P>, Action>,
{
    search(problem, bounds, config, Goal::Minimize, observer)
}

/// Finds the minimum of the objective without observer support.
///
/// # Errors
///
/// Returns an error if the problem fails during evaluation.
pub fn minimize_unobserved<P>(
    problem: &P,
    bounds: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    P: OptimizationProblem<1>,
{
    minimize(problem, bounds, config, ())
}

/// Finds the maximum of the objective on `bounds`.
///
/// # Errors
///
/// Returns an error if the problem fails during evaluation and the observer
/// does not return [`Action::AssumeWorse`] to recover.
pub fn maximize<P, Obs>(
    problem: &P,
    bounds: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    P: OptimizationProblem<1>,
    Obs: for<'a> Observer<Event<'a, P>, Action>,
{
    search(problem, bounds, config, Goal::Maximize, observer)
}

/// Finds the maximum of the objective without observer support.
///
/// # Errors
///
/// Returns an error if the problem fails during evaluation.
pub fn maximize_unobserved<P>(
    problem: &P,
    bounds: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    P: OptimizationProblem<1>,
{
    maximize(problem, bounds, config, ())
}
