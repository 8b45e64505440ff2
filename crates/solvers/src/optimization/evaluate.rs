use stationary_core::OptimizationProblem;

/// The result of evaluating an optimization problem at a given `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation<const N: usize> {
    pub x: [f64; N],

    pub objective: f64,
}

/// Evaluates the objective of `problem` at `x`.
///
/// # Errors
///
/// Returns the problem's error if the objective cannot be computed.
pub fn evaluate<P, const N: usize>(problem: &P, x: [f64; N]) -> Result<Evaluation<N>, P::Error>
where
    P: OptimizationProblem<N>,
{
    let objective = problem.objective(&x)?;
    Ok(Evaluation { x, objective })
}
