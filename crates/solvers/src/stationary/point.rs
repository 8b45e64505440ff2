use std::fmt;

use num_rational::BigRational;
use num_traits::ToPrimitive;
use stationary_core::Line;

/// A point where the gradient vanishes, with exact coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationaryPoint {
    pub x: [BigRational; 2],
}

impl StationaryPoint {
    #[must_use]
    pub fn new(x1: BigRational, x2: BigRational) -> Self {
        Self { x: [x1, x2] }
    }

    /// Returns the coordinates as `f64`.
    #[must_use]
    pub fn to_f64(&self) -> [f64; 2] {
        let f = |r: &BigRational| r.to_f64().unwrap_or(f64::NAN);
        [f(&self.x[0]), f(&self.x[1])]
    }
}

impl fmt::Display for StationaryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x[0], self.x[1])
    }
}

/// Every solution of `∇f = 0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StationarySet {
    /// Finitely many points in ascending `(x1, x2)` order, possibly none.
    Isolated(Vec<StationaryPoint>),

    /// Every point of each line is stationary.
    Lines(Vec<Line>),

    /// The gradient is identically zero.
    Plane,
}

impl StationarySet {
    /// Returns the isolated points, or an empty slice for a continuum.
    #[must_use]
    pub fn points(&self) -> &[StationaryPoint] {
        match self {
            Self::Isolated(points) => points,
            Self::Lines(_) | Self::Plane => &[],
        }
    }

    /// Returns `true` if infinitely many points are stationary.
    #[must_use]
    pub fn is_continuum(&self) -> bool {
        match self {
            Self::Isolated(_) => false,
            Self::Lines(lines) => !lines.is_empty(),
            Self::Plane => true,
        }
    }

    /// Returns `true` if no point is stationary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Isolated(points) => points.is_empty(),
            Self::Lines(lines) => lines.is_empty(),
            Self::Plane => false,
        }
    }
}
