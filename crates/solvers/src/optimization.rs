//! Solvers for scalar optimization problems.
//!
//! An [`OptimizationProblem`] maps solver variables `x: [f64; N]` to a scalar
//! objective. Solvers in this module search for the `x` that minimizes or
//! maximizes that objective.
//!
//! # Solvers
//!
//! - [`golden_section`] — derivative-free search over a bracketed interval for
//!   unimodal functions
//!
//! [`OptimizationProblem`]: stationary_core::OptimizationProblem

mod evaluate;

pub use evaluate::{Evaluation, evaluate};

pub mod golden_section;
