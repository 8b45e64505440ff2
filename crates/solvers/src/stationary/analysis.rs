use num_rational::BigRational;
use stationary_core::{Derivatives, HessianAt, Polynomial, Variables};

use super::{Classification, Error, StationaryPoint, StationarySet, classify, solve_stationary};

/// One classified stationary point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub point: StationaryPoint,

    /// The Hessian evaluated at `point`.
    pub hessian: HessianAt,

    pub classification: Classification,

    /// The function value at `point`.
    pub value: BigRational,
}

/// The complete result of analysing one function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    function: Polynomial,
    derivatives: Derivatives,
    set: StationarySet,
    records: Vec<Record>,
}

impl Analysis {
    #[must_use]
    pub fn function(&self) -> &Polynomial {
        &self.function
    }

    #[must_use]
    pub fn derivatives(&self) -> &Derivatives {
        &self.derivatives
    }

    /// Returns the full solution set of `∇f = 0`, including any continuum.
    #[must_use]
    pub fn set(&self) -> &StationarySet {
        &self.set
    }

    /// Returns one record per isolated stationary point, in solver order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Classifies an arbitrary point with this function's Hessian.
    ///
    /// Points on a continuum of stationary points always have a singular
    /// Hessian and classify as [`Classification::Degenerate`].
    #[must_use]
    pub fn classify_at(&self, point: &[BigRational; 2]) -> Classification {
        let hessian = self.derivatives.hessian.at(point);
        classify(&hessian, hessian.f_x1x1())
    }

    /// Returns the records with the given classification.
    pub fn with_classification(
        &self,
        classification: Classification,
    ) -> impl Iterator<Item = &Record> {
        self.records
            .iter()
            .filter(move |record| record.classification == classification)
    }
}

/// Computes the exact gradient and Hessian of `f`.
#[must_use]
pub fn differentiate(f: &Polynomial) -> Derivatives {
    Derivatives::of(f)
}

/// Differentiates `f`, solves for its stationary points, and classifies each.
///
/// # Errors
///
/// Returns [`Error::Unsolvable`] if the stationary points have no closed
/// form; see [`solve_stationary`].
pub fn analyze(f: &Polynomial) -> Result<Analysis, Error> {
    log::debug!("analyzing f = {f}");
    let derivatives = differentiate(f);
    log::debug!(
        "gradient = ({}, {})",
        derivatives.gradient.components()[0],
        derivatives.gradient.components()[1]
    );

    let set = solve_stationary(&derivatives.gradient).inspect_err(|err| {
        log::warn!("no closed-form stationary points for f = {f}: {err}");
    })?;

    if set.is_continuum() {
        log::debug!("stationary set is a continuum: {set:?}");
    }

    let records = set
        .points()
        .iter()
        .map(|point| {
            let hessian = derivatives.hessian.at(&point.x);
            let classification = classify(&hessian, hessian.f_x1x1());
            log::trace!("{point}: det(H) = {}, {classification}", hessian.determinant());
            Record {
                point: point.clone(),
                value: f.eval(&point.x),
                hessian,
                classification,
            }
        })
        .collect();

    Ok(Analysis {
        function: f.clone(),
        derivatives,
        set,
        records,
    })
}

/// Parses `source` in `vars` and analyses it.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `source` is not a polynomial in `vars`,
/// before any differentiation happens, or any error from [`analyze`].
pub fn analyze_str(source: &str, vars: &Variables) -> Result<Analysis, Error> {
    let f = Polynomial::parse(source, vars)?;
    analyze(&f)
}
