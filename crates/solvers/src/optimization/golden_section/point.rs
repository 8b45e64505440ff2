use crate::optimization::Evaluation;

/// A parameter value with its evaluated objective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,

    pub objective: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, objective: f64) -> Self {
        Self { x, objective }
    }
}

impl From<Evaluation<1>> for Point {
    fn from(eval: Evaluation<1>) -> Self {
        Self::new(eval.x[0], eval.objective)
    }
}
