//! End-to-end checks on the functions used in the optimization coursework.

use approx::assert_relative_eq;
use num_rational::BigRational;
use stationary_core::{InputError, Line, Polynomial, Var, Variables};
use stationary_solvers::constrained::{circle, line};
use stationary_solvers::stationary::{
    Classification, Error, StationaryPoint, StationarySet, analyze, analyze_str, classify,
    differentiate,
};

fn q(n: i64, d: i64) -> BigRational {
    BigRational::new(n.into(), d.into())
}

fn int(n: i64) -> BigRational {
    q(n, 1)
}

fn xy() -> Variables {
    Variables::new("x", "y").unwrap()
}

#[test]
fn positive_definite_quadratic_has_a_minimum() {
    let analysis = analyze_str("3*x1^2 + 2*x1*x2 + 2*x2^2 + 7", &Variables::default()).unwrap();

    assert_eq!(analysis.records().len(), 1);
    let record = &analysis.records()[0];
    assert_eq!(record.point, StationaryPoint::new(int(0), int(0)));
    assert_eq!(record.hessian.entries(), &[[int(6), int(2)], [int(2), int(4)]]);
    assert_eq!(record.hessian.determinant(), int(20));
    assert_eq!(record.classification, Classification::LocalMinimum);
    assert_eq!(record.value, int(7));
}

#[test]
fn indefinite_quadratic_has_a_saddle() {
    let analysis = analyze_str("x1^2 + 4*x1*x2 + x2^2 + 3", &Variables::default()).unwrap();

    let record = &analysis.records()[0];
    assert_eq!(record.point, StationaryPoint::new(int(0), int(0)));
    assert_eq!(record.hessian.entries(), &[[int(2), int(4)], [int(4), int(2)]]);
    assert_eq!(record.hessian.determinant(), int(-12));
    assert_eq!(record.classification, Classification::SaddlePoint);
}

#[test]
fn shifted_quadratic_minimum() {
    let f = Polynomial::parse("2*x^2 + y^2 - 2*x*y - 3*x - 2*y", &xy()).unwrap();

    let derivatives = differentiate(&f);
    assert_eq!(
        derivatives.gradient.component(Var::X1),
        &Polynomial::parse("4*x - 2*y - 3", &xy()).unwrap()
    );
    assert_eq!(
        derivatives.gradient.component(Var::X2),
        &Polynomial::parse("2*y - 2*x - 2", &xy()).unwrap()
    );

    let analysis = analyze(&f).unwrap();
    assert_eq!(analysis.records().len(), 1);
    let record = &analysis.records()[0];
    assert_eq!(record.point, StationaryPoint::new(q(5, 2), q(7, 2)));
    assert_eq!(record.hessian.entries(), &[[int(4), int(-2)], [int(-2), int(2)]]);
    assert_eq!(record.hessian.determinant(), int(4));
    assert_eq!(record.classification, Classification::LocalMinimum);
    // f(5/2, 7/2) = -29/4
    assert_eq!(record.value, q(-29, 4));
}

#[test]
fn analysis_is_idempotent() {
    let f = Polynomial::parse("x1^3 - 3*x1 + x2^2 - 2*x2", &Variables::default()).unwrap();

    let first = analyze(&f).unwrap();
    let second = analyze(&f).unwrap();

    assert_eq!(first, second);
}

#[test]
fn mixed_partials_are_symmetric() {
    for src in [
        "3*x1^2 + 2*x1*x2 + 2*x2^2 + 7",
        "x1^2 + 4*x1*x2 + x2^2 + 3",
        "2*x1^2 + x2^2 - 2*x1*x2 - 3*x1 - 2*x2",
        "x1^4*x2^3 - 7*x1*x2^5 + x1^2",
    ] {
        let f = Polynomial::parse(src, &Variables::default()).unwrap();
        let hessian = differentiate(&f).hessian;
        assert!(hessian.is_symmetric(), "{src}");
        assert_eq!(hessian.entry(Var::X1, Var::X2), hessian.entry(Var::X2, Var::X1));
    }
}

#[test]
fn perfect_square_is_degenerate_everywhere() {
    let analysis = analyze_str("(x + y)^2", &xy()).unwrap();

    let StationarySet::Lines(lines) = analysis.set() else {
        panic!("expected a line of stationary points, got {:?}", analysis.set());
    };
    assert_eq!(lines, &[Line::new(int(1), int(1), int(0)).unwrap()]);
    assert_eq!(
        differentiate(analysis.function()).hessian.determinant(),
        Polynomial::zero(xy())
    );

    for point in [[int(0), int(0)], [int(2), int(-2)], [q(-1, 3), q(1, 3)]] {
        assert!(lines[0].contains(&point));
        let hessian = analysis.derivatives().hessian.at(&point);
        assert_eq!(classify(&hessian, hessian.f_x1x1()), Classification::Degenerate);
    }
}

#[test]
fn unsupported_input_is_rejected() {
    let vars = Variables::default();
    let invalid = |src: &str| match analyze_str(src, &vars) {
        Err(Error::InvalidInput(err)) => err,
        other => panic!("{src}: expected invalid input, got {other:?}"),
    };

    assert!(matches!(invalid("sin(x1)"), InputError::UnsupportedFunction { .. }));
    assert!(matches!(invalid("x1 + x3"), InputError::UnknownVariable { .. }));
    assert!(matches!(invalid("x1^0.5"), InputError::InvalidExponent { .. }));
    assert!(matches!(invalid("x1/x2"), InputError::DivisionByNonConstant { .. }));
}

#[test]
fn constrained_minimum_on_a_line() {
    let f = Polynomial::parse("4*x^2 + 3*y^2 - 5*x*y - 8*x", &xy()).unwrap();
    let feasible = Line::new(int(1), int(1), int(4)).unwrap();

    let line::LineOutcome::Stationary(points) = line::optimize_on_line(&f, &feasible).unwrap()
    else {
        panic!("expected stationary points on the line");
    };

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].point, [q(13, 6), q(11, 6)]);
    assert_eq!(points[0].value, q(-25, 3));
    assert_eq!(points[0].classification, Classification::LocalMinimum);
}

#[test]
fn extrema_on_the_unit_circle() {
    let f = Polynomial::parse("x1 + x2", &Variables::default()).unwrap();

    let extrema =
        circle::extrema_on_circle(&f, &circle::Circle::unit(), &circle::Config::default()).unwrap();

    assert_relative_eq!(extrema.max.value, 2.0_f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(extrema.min.value, -(2.0_f64.sqrt()), epsilon = 1e-12);
    assert_relative_eq!(extrema.max.x[0], extrema.max.x[1], epsilon = 1e-6);
}
