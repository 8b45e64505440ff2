//! Stationary-point analysis of bivariate polynomials.
//!
//! The analysis is a pipeline of pure derivations:
//!
//! 1. [`differentiate`] — exact gradient and Hessian
//! 2. [`solve_stationary`] — the exact solution set of `∇f = 0`
//! 3. [`classify`] — the second-derivative test at each isolated point
//!
//! [`analyze`] runs all three and returns one [`Record`] per isolated point.
//!
//! # Second-derivative test
//!
//! With `D = det(H)` at the point:
//!
//! | `D`   | `f_x1x1` | classification                  |
//! |-------|----------|---------------------------------|
//! | `> 0` | `> 0`    | [`Classification::LocalMinimum`] |
//! | `> 0` | `< 0`    | [`Classification::LocalMaximum`] |
//! | `< 0` | any      | [`Classification::SaddlePoint`]  |
//! | `= 0` | any      | [`Classification::Degenerate`]   |
//!
//! Exact inputs are compared against exact zero. Floating-point Hessians,
//! from [`analyze_numeric`], use a [`Tolerance`] relative to the Hessian's
//! largest entry.
//!
//! # Continua
//!
//! A singular linear gradient system has a line (or the whole plane) of
//! stationary points. These are reported as [`StationarySet::Lines`] or
//! [`StationarySet::Plane`] rather than as points; the Hessian is singular
//! along them, so they classify as [`Classification::Degenerate`].
//!
//! # Unsolvable systems
//!
//! Gradients that are neither linear nor separable, or whose roots are
//! irrational, produce [`UnsolvableSystem`]. That is never reported as "no
//! stationary points"; callers can fall back to [`analyze_numeric`].

mod analysis;
mod classification;
mod error;
mod numeric;
mod point;
mod solve;
mod tolerance;

#[cfg(test)]
mod tests;

pub use analysis::{Analysis, Record, analyze, analyze_str, differentiate};
pub use classification::{Classification, classify, classify_f64};
pub use error::{Error, UnsolvableSystem};
pub use numeric::{NumericAnalysis, NumericConfig, NumericConfigError, NumericRecord, analyze_numeric};
pub use point::{StationaryPoint, StationarySet};
pub use solve::solve_stationary;
pub use tolerance::{Tolerance, ToleranceError};
