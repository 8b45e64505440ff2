//! Core types and traits for stationary-point analysis.
//!
//! This crate defines the exact algebra and the shared abstractions that the
//! solvers and observers build on:
//!
//! - [`Polynomial`] — a bivariate polynomial with exact rational coefficients,
//!   parsed from text in two declared [`Variables`]
//! - [`Gradient`], [`Hessian`], [`Derivatives`] — exact symbolic derivatives
//! - [`Line`] — a line `a·x1 + b·x2 = c`, used both for continua of
//!   stationary points and as an equality constraint
//! - [`Univariate`] — a one-variable polynomial, used for restrictions to
//!   constraint curves and for root isolation
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`OptimizationProblem`], [`GradientProblem`] — problem traits that numeric
//!   solvers are written against
//!
//! # Features
//!
//! - `serde` — derives `Serialize`/`Deserialize` for the data types.

mod derivatives;
mod error;
mod line;
mod observer;
mod poly;
mod problems;
mod univariate;
mod vars;

pub use derivatives::{Derivatives, Gradient, Hessian, HessianAt};
pub use error::{InputError, MAX_EXPONENT, MAX_NESTING};
pub use line::{Line, LineDisplay, LineError};
pub use observer::Observer;
pub use poly::{Exponents, Polynomial};
pub use problems::{GradientProblem, OptimizationProblem};
pub use univariate::Univariate;
pub use vars::{Var, Variables};
