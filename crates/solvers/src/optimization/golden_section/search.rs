use stationary_core::{Observer, OptimizationProblem};

use crate::optimization::evaluate;

use super::bracket::Goal;
use super::init::{Start, start};
use super::solution::Status;
use super::{Action, Config, Error, Event, Point, Solution};

/// Runs golden section search on `bounds` toward `goal`.
pub(super) fn search<P, Obs>(
    problem: &P,
    bounds: [f64; 2],
    config: &Config,
    goal: Goal,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: OptimizationProblem<1>,
    Obs: for<'a> Observer<Event<'a, P>, Action>,
{
    let [a, b] = bounds;
    let bounds = if a <= b { [a, b] } else { [b, a] };

    let mut bracket = match start(problem, bounds, goal, &mut observer)? {
        Start::Search(bracket) => bracket,
        Start::Stopped(solution) => return Ok(solution),
    };

    let mut iters = 0;
    while iters < config.max_iters() {
        if bracket.is_converged(config) {
            return Ok(bracket.into_solution(Status::Converged, iters));
        }
        iters += 1;

        log::trace!(
            "golden section iter {iters}: interior [{}, {}]",
            bracket.left().x,
            bracket.right().x
        );
        let step = bracket.next_step();
        let other = bracket.survivor(step);
        match step_outcome(problem, step.x(), other, &mut observer)? {
            Outcome::Accept(point) => {
                bracket.take(step, point);
                bracket.record(point);
            }
            Outcome::Refuse => bracket.take(step, Point::new(step.x(), goal.worst())),
            Outcome::Stop => return Ok(bracket.into_solution(Status::StoppedByObserver, iters)),
        }
    }

    Ok(bracket.into_solution(Status::MaxIters, iters))
}

enum Outcome {
    Accept(Point),
    Refuse,
    Stop,
}

/// Evaluates `x` and lets the observer decide what to do with the result.
fn step_outcome<P, Obs>(
    problem: &P,
    x: f64,
    other: Point,
    observer: &mut Obs,
) -> Result<Outcome, Error>
where
    P: OptimizationProblem<1>,
    Obs: for<'a> Observer<Event<'a, P>, Action>,
{
    match evaluate(problem, [x]) {
        Ok(eval) => {
            let point = Point::from(eval);
            let event: Event<'_, P> = Event::Evaluated { point, other };
            let action = observer.observe(&event);
            Ok(action.map_or(Outcome::Accept(point), Outcome::from))
        }
        Err(err) => match Event::<P>::emit_failure(x, other, &err, observer) {
            Some(action) => Ok(Outcome::from(action)),
            None => Err(Error::problem(err)),
        },
    }
}

impl From<Action> for Outcome {
    fn from(action: Action) -> Self {
        match action {
            Action::StopEarly => Outcome::Stop,
            Action::AssumeWorse => Outcome::Refuse,
        }
    }
}
