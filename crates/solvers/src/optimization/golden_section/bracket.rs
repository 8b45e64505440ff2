use super::solution::Status;
use super::{Config, Point, Solution};

/// 1/φ, the fraction of the bracket kept by each step.
const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// 1/φ² = 1 - 1/φ.
const INV_PHI_SQ: f64 = 1.0 - INV_PHI;

/// Whether the search is after the smallest or largest objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Goal {
    Minimize,
    Maximize,
}

impl Goal {
    /// Ranks an objective value; smaller keys are better.
    pub(super) fn key(self, objective: f64) -> f64 {
        match self {
            Goal::Minimize => objective,
            Goal::Maximize => -objective,
        }
    }

    /// An objective that ranks behind every real evaluation.
    pub(super) fn worst(self) -> f64 {
        match self {
            Goal::Minimize => f64::INFINITY,
            Goal::Maximize => f64::NEG_INFINITY,
        }
    }

    pub(super) fn prefers(self, a: Point, b: Point) -> bool {
        self.key(a.objective) <= self.key(b.objective)
    }
}

/// The two interior positions of `[lo, hi]`, in ascending order.
pub(super) fn interior(lo: f64, hi: f64) -> [f64; 2] {
    let width = hi - lo;
    [lo + INV_PHI_SQ * width, lo + INV_PHI * width]
}

/// The next shrink of a [`Bracket`] and where it evaluates.
#[derive(Debug, Clone, Copy)]
pub(super) enum Step {
    /// Discard `[lo, left]`; `x` becomes the new right interior point.
    DropLow(f64),

    /// Discard `[right, hi]`; `x` becomes the new left interior point.
    DropHigh(f64),
}

impl Step {
    pub(super) fn x(self) -> f64 {
        match self {
            Step::DropLow(x) | Step::DropHigh(x) => x,
        }
    }
}

/// Outer bounds with the two evaluated interior points and the best real
/// evaluation so far.
///
/// `left.x < right.x` always holds, and both sit at golden-ratio positions
/// of `[lo, hi]`. Interior points may carry [`Goal::worst`] objectives when an
/// observer asked for them to be treated as worse; `best` never does.
#[derive(Debug, Clone, Copy)]
pub(super) struct Bracket {
    lo: f64,
    hi: f64,
    left: Point,
    right: Point,
    best: Point,
    goal: Goal,
}

impl Bracket {
    pub(super) fn new(bounds: [f64; 2], left: Point, right: Point, best: Point, goal: Goal) -> Self {
        let [lo, hi] = bounds;
        Self {
            lo,
            hi,
            left,
            right,
            best,
            goal,
        }
    }

    pub(super) fn left(&self) -> Point {
        self.left
    }

    pub(super) fn right(&self) -> Point {
        self.right
    }

    /// Keeps the side holding the preferred interior point.
    pub(super) fn next_step(&self) -> Step {
        if self.goal.prefers(self.left, self.right) {
            let [x, _] = interior(self.lo, self.right.x);
            Step::DropHigh(x)
        } else {
            let [_, x] = interior(self.left.x, self.hi);
            Step::DropLow(x)
        }
    }

    /// The interior point that survives `step`.
    pub(super) fn survivor(&self, step: Step) -> Point {
        match step {
            Step::DropLow(_) => self.right,
            Step::DropHigh(_) => self.left,
        }
    }

    /// Applies `step`, slotting in `point` evaluated at `step.x()`.
    pub(super) fn take(&mut self, step: Step, point: Point) {
        match step {
            Step::DropLow(_) => {
                self.lo = self.left.x;
                self.left = self.right;
                self.right = point;
            }
            Step::DropHigh(_) => {
                self.hi = self.right.x;
                self.right = self.left;
                self.left = point;
            }
        }
    }

    /// Only call with real evaluations, never with assumed-worse points.
    pub(super) fn record(&mut self, point: Point) {
        if self.goal.key(point.objective) < self.goal.key(self.best.objective) {
            self.best = point;
        }
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        let gap = self.right.x - self.left.x;
        let mid = 0.5 * (self.left.x + self.right.x);
        gap.abs() <= config.x_abs_tol() + config.x_rel_tol() * mid.abs()
    }

    pub(super) fn into_solution(self, status: Status, iters: usize) -> Solution {
        Solution {
            status,
            x: self.best.x,
            objective: self.best.objective,
            iters,
        }
    }
}
