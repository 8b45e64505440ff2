pub mod gradient;
pub mod optimization;

pub use gradient::GradientProblem;
pub use optimization::OptimizationProblem;
