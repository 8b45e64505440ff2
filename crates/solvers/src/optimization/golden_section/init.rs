use stationary_core::{Observer, OptimizationProblem};

use crate::optimization::evaluate;

use super::bracket::{Bracket, Goal, interior};
use super::solution::Status;
use super::{Action, Error, Event, Point, Solution};

pub(super) enum Start {
    Search(Bracket),
    Stopped(Solution),
}

/// Evaluates both interior points of `bounds` and builds the first bracket.
///
/// An event needs a valid `other` point, so only the right point (or a
/// failure) reaches the observer. When both evaluations fail the observer
/// hears about the left failure and the error is returned, since no action
/// can recover without one real evaluation.
pub(super) fn start<P, Obs>(
    problem: &P,
    bounds: [f64; 2],
    goal: Goal,
    observer: &mut Obs,
) -> Result<Start, Error>
where
    P: OptimizationProblem<1>,
    Obs: for<'a> Observer<Event<'a, P>, Action>,
{
    let [a, b] = interior(bounds[0], bounds[1]);
    let left = evaluate(problem, [a]).map(Point::from);
    let right = evaluate(problem, [b]).map(Point::from);

    let (left, right, best) = match (left, right) {
        (Ok(left), Ok(right)) => {
            let event: Event<'_, P> = Event::Evaluated {
                point: right,
                other: left,
            };
            match observer.observe(&event) {
                Some(Action::StopEarly) => return Ok(stopped(left)),
                Some(Action::AssumeWorse) => (left, Point::new(b, goal.worst()), left),
                None => {
                    let best = if goal.prefers(left, right) { left } else { right };
                    (left, right, best)
                }
            }
        }
        (Ok(left), Err(err)) => {
            match Event::<P>::emit_failure(b, left, &err, observer) {
                Some(Action::StopEarly) => return Ok(stopped(left)),
                Some(Action::AssumeWorse) => (left, Point::new(b, goal.worst()), left),
                None => return Err(Error::problem(err)),
            }
        }
        (Err(err), Ok(right)) => {
            match Event::<P>::emit_failure(a, right, &err, observer) {
                Some(Action::StopEarly) => return Ok(stopped(right)),
                Some(Action::AssumeWorse) => (Point::new(a, goal.worst()), right, right),
                None => return Err(Error::problem(err)),
            }
        }
        (Err(err), Err(_)) => {
            Event::<P>::emit_failure(a, Point::new(b, f64::NAN), &err, observer);
            return Err(Error::problem(err));
        }
    };

    Ok(Start::Search(Bracket::new(bounds, left, right, best, goal)))
}

fn stopped(point: Point) -> Start {
    Start::Stopped(Solution {
        status: Status::StoppedByObserver,
        x: point.x,
        objective: point.objective,
        iters: 0,
    })
}
