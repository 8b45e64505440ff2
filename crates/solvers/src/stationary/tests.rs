use approx::assert_relative_eq;
use num_rational::BigRational;
use stationary_core::{InputError, Polynomial, Variables};

use super::{
    Classification, Error, NumericConfig, StationaryPoint, StationarySet, UnsolvableSystem,
    analyze, analyze_numeric, analyze_str,
};

fn r(n: i64) -> BigRational {
    BigRational::from_integer(n.into())
}

fn parse(src: &str) -> Polynomial {
    Polynomial::parse(src, &Variables::default()).unwrap()
}

#[test]
fn cubic_has_saddle_and_minimum() {
    let analysis = analyze(&parse("x1^3 - 3*x1 + x2^2")).unwrap();
    let records = analysis.records();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].point, StationaryPoint::new(r(-1), r(0)));
    assert_eq!(records[0].classification, Classification::SaddlePoint);
    assert_eq!(records[0].value, r(2));
    assert_eq!(records[1].point, StationaryPoint::new(r(1), r(0)));
    assert_eq!(records[1].classification, Classification::LocalMinimum);
    assert_eq!(records[1].value, r(-2));
}

#[test]
fn four_point_separable_function() {
    // Stationary at (±1, ±2) with H = diag(6x1, -6x2)
    let analysis = analyze(&parse("x1^3 - 3*x1 - x2^3 + 12*x2")).unwrap();
    let labels: Vec<_> = analysis.records().iter().map(|r| r.classification).collect();

    assert_eq!(
        labels,
        [
            Classification::SaddlePoint,
            Classification::LocalMaximum,
            Classification::LocalMinimum,
            Classification::SaddlePoint,
        ]
    );
    assert_eq!(
        analysis
            .with_classification(Classification::SaddlePoint)
            .count(),
        2
    );
}

#[test]
fn continuum_is_surfaced_and_degenerate() {
    let analysis = analyze(&parse("(x1 + x2)^2")).unwrap();

    assert!(analysis.records().is_empty());
    assert!(matches!(analysis.set(), StationarySet::Lines(lines) if lines.len() == 1));
    assert_eq!(
        analysis.classify_at(&[r(3), r(-3)]),
        Classification::Degenerate
    );
}

#[test]
fn unsolvable_system_is_an_error() {
    let result = analyze(&parse("x1^2*x2 + x2^3 - x1"));
    assert_eq!(
        result,
        Err(Error::Unsolvable(UnsolvableSystem::NonLinearCoupled))
    );
}

#[test]
fn invalid_input_is_rejected_before_analysis() {
    let result = analyze_str("x1^2 + z", &Variables::default());
    assert!(matches!(
        result,
        Err(Error::InvalidInput(InputError::UnknownVariable { .. }))
    ));
}

#[test]
fn custom_variable_names() {
    let vars = Variables::new("x", "y").unwrap();
    let analysis = analyze_str("-x^2 - y^2 + 2*x", &vars).unwrap();

    assert_eq!(analysis.records().len(), 1);
    assert_eq!(analysis.records()[0].point, StationaryPoint::new(r(1), r(0)));
    assert_eq!(analysis.records()[0].classification, Classification::LocalMaximum);
}

#[test]
fn numeric_fallback_merges_repeated_points() {
    let f = parse("x1^2 + x2^2");
    let seeds = [[1.0, 1.0], [-3.0, 2.0], [0.5, -0.25]];

    let analysis = analyze_numeric(&f, &seeds, &NumericConfig::default());

    assert!(analysis.unconverged.is_empty());
    assert_eq!(analysis.records.len(), 1);
    let record = analysis.records[0];
    assert_relative_eq!(record.x[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(record.x[1], 0.0, epsilon = 1e-12);
    assert_eq!(record.classification, Classification::LocalMinimum);
}

#[test]
fn numeric_fallback_finds_coupled_stationary_points() {
    // f = x1²·x2 + x2³ - 3x2 has no separable gradient. Its stationary points
    // are (0, ±1) and (±√3, 0).
    let f = parse("x1^2*x2 + x2^3 - 3*x2");
    assert!(analyze(&f).is_err());

    let seeds = [[0.1, 1.2], [0.1, -1.2], [1.5, 0.1], [-1.5, 0.1]];
    let analysis = analyze_numeric(&f, &seeds, &NumericConfig::default());

    assert_eq!(analysis.records.len(), 4);
    let find = |classification: Classification| {
        analysis
            .records
            .iter()
            .find(|r| r.classification == classification)
            .map(|r| r.x)
    };

    let min = find(Classification::LocalMinimum).unwrap();
    assert_relative_eq!(min[1], 1.0, epsilon = 1e-9);
    let max = find(Classification::LocalMaximum).unwrap();
    assert_relative_eq!(max[1], -1.0, epsilon = 1e-9);

    let saddles: Vec<_> = analysis
        .records
        .iter()
        .filter(|r| r.classification == Classification::SaddlePoint)
        .collect();
    assert_eq!(saddles.len(), 2);
    // Sorted by x1, so the negative root comes first.
    assert_relative_eq!(saddles[0].x[0], -(3.0_f64.sqrt()), epsilon = 1e-9);
    assert_relative_eq!(saddles[1].x[0], 3.0_f64.sqrt(), epsilon = 1e-9);
}

#[test]
fn singular_seed_is_unconverged() {
    let f = parse("(x1 + x2)^2");
    let analysis = analyze_numeric(&f, &[[1.0, 0.0]], &NumericConfig::default());

    assert!(analysis.records.is_empty());
    assert_eq!(analysis.unconverged, vec![[1.0, 0.0]]);
}
