//! Newton's method for stationary points.
//!
//! When the gradient system has no closed-form solution, a stationary point
//! can still be located numerically by driving the gradient to zero with the
//! Hessian as its Jacobian. Each step solves `H(x)·d = -∇f(x)` and moves to
//! `x + d`. Convergence is quadratic near a non-degenerate stationary point
//! and the method makes no distinction between minima, maxima, and saddles.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iterate, starting with `x0` at
//! iteration 0:
//!
//! - [`Event::Evaluated`] — the gradient was computed
//! - [`Event::ProblemFailed`] — the problem returned an error; the solve ends
//!   with [`Error::Problem`] after the observer has seen it
//!
//! Observers can return [`Action::StopEarly`] from an `Evaluated` event to
//! halt and return the current iterate.

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use stationary_core::{GradientProblem, Observer};

/// Runs Newton's method from `x0`.
///
/// See the [module docs](self) for event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the problem fails, if the Hessian is singular at an
/// iterate, or if an iterate becomes non-finite.
pub fn solve<P, Obs>(
    problem: &P,
    x0: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: GradientProblem,
    Obs: for<'a> Observer<Event<'a, P>, Action>,
{
    let mut x = x0;
    let mut last_step = f64::INFINITY;
    let mut iter = 0;

    loop {
        if !x.iter().all(|v| v.is_finite()) {
            return Err(Error::NonFinite { x });
        }

        let gradient = match problem.gradient(&x) {
            Ok(gradient) => gradient,
            Err(error) => return Err(report_failure(iter, x, error, &mut observer)),
        };

        let event: Event<'_, P> = Event::Evaluated { iter, x, gradient };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(Status::StoppedByObserver, x, gradient, iter));
        }

        let residual = gradient[0].hypot(gradient[1]);
        log::trace!("newton iter {iter}: x = {x:?}, |g| = {residual:e}");

        if residual <= config.residual_tol() || last_step <= config.step_tol() {
            return Ok(finish(Status::Converged, x, gradient, iter));
        }
        if iter == config.max_iters() {
            return Ok(finish(Status::MaxIters, x, gradient, iter));
        }

        let hessian = match problem.hessian(&x) {
            Ok(hessian) => hessian,
            Err(error) => return Err(report_failure(iter, x, error, &mut observer)),
        };

        let step = newton_step(&hessian, gradient).ok_or(Error::SingularHessian { x })?;
        x = [x[0] + step[0], x[1] + step[1]];
        last_step = step[0].hypot(step[1]);
        iter += 1;
    }
}

/// Runs Newton's method without an observer.
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_unobserved<P>(problem: &P, x0: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    P: GradientProblem,
{
    solve(problem, x0, config, ())
}

/// Solves `H·d = -g`, or returns `None` when `H` is numerically singular.
fn newton_step(h: &[[f64; 2]; 2], g: [f64; 2]) -> Option<[f64; 2]> {
    let [[a, b], [c, d]] = *h;
    let det = a * d - b * c;
    let scale = a.abs().max(b.abs()).max(c.abs()).max(d.abs());
    if !det.is_finite() || det.abs() <= f64::EPSILON * scale * scale {
        return None;
    }
    Some([(b * g[1] - d * g[0]) / det, (c * g[0] - a * g[1]) / det])
}

fn report_failure<P, Obs>(iter: usize, x: [f64; 2], error: P::Error, observer: &mut Obs) -> Error
where
    P: GradientProblem,
    Obs: for<'a> Observer<Event<'a, P>, Action>,
{
    // The solve cannot continue without derivatives, so any action is moot.
    let event: Event<'_, P> = Event::ProblemFailed {
        iter,
        x,
        error: &error,
    };
    let _ = observer.observe(&event);
    Error::problem(error)
}

fn finish(status: Status, x: [f64; 2], gradient: [f64; 2], iters: usize) -> Solution {
    Solution {
        status,
        x,
        gradient,
        iters,
    }
}
