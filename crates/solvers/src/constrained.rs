//! Extrema of a function restricted to a constraint curve.
//!
//! - [`line`] — exact: the restriction to `a·x1 + b·x2 = c` is a univariate
//!   polynomial whose stationary points are found and classified exactly
//! - [`circle`] — numeric: the circle is sampled by angle and the best
//!   samples are refined with [`golden_section`] search
//!
//! [`golden_section`]: crate::optimization::golden_section

pub mod circle;
pub mod line;
