//! Solvers for stationary-point analysis of bivariate polynomials.
//!
//! # Modules
//!
//! - [`stationary`] — differentiate, solve the gradient system exactly, and
//!   classify every stationary point with the second-derivative test
//! - [`newton`] — numeric fallback that drives the gradient to zero
//! - [`optimization`] — single-parameter search ([`optimization::golden_section`])
//! - [`constrained`] — extrema of a function restricted to a line or a circle
//!
//! Exact results use `BigRational` throughout; only [`newton`],
//! [`optimization`], and the circle search work in floating point.

pub mod constrained;
pub mod newton;
pub mod optimization;
pub mod stationary;

mod roots;
