//! Walks the coursework functions through every analysis in the crate.
//!
//! Run with `RUST_LOG=debug` to see the solver's intermediate steps.

use stationary_core::{Line, Polynomial, Var, Variables};
use stationary_solvers::constrained::{circle, line};
use stationary_solvers::stationary::{
    Error, NumericConfig, StationarySet, analyze_numeric, analyze_str,
};

const FUNCTIONS: [&str; 4] = [
    "3*x^2 + 2*x*y + 2*y^2 + 7",
    "x^2 + 4*x*y + y^2 + 3",
    "2*x^2 + y^2 - 2*x*y - 3*x - 2*y",
    "x^2*y + y^3 - 3*y",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let vars = Variables::new("x", "y")?;

    for source in FUNCTIONS {
        println!("f = {source}");
        match analyze_str(source, &vars) {
            Ok(analysis) => {
                let gradient = &analysis.derivatives().gradient;
                println!("  f_x = {}", gradient.component(Var::X1));
                println!("  f_y = {}", gradient.component(Var::X2));
                println!("  det H = {}", analysis.derivatives().hessian.determinant());
                for record in analysis.records() {
                    println!(
                        "  {}: {} with f = {}",
                        record.point, record.classification, record.value
                    );
                }
                match analysis.set() {
                    StationarySet::Lines(lines) => {
                        for line in lines {
                            println!("  degenerate along {}", line.display_with(&vars));
                        }
                    }
                    StationarySet::Plane => println!("  every point is stationary"),
                    StationarySet::Isolated(_) => {}
                }
            }
            Err(Error::Unsolvable(reason)) => {
                println!("  no exact solution ({reason}), trying Newton from a grid of seeds");
                let f = Polynomial::parse(source, &vars)?;
                let seeds: Vec<[f64; 2]> = (-2..=2)
                    .flat_map(|i| (-2..=2).map(move |j| [f64::from(i) + 0.1, f64::from(j) + 0.1]))
                    .collect();
                let numeric = analyze_numeric(&f, &seeds, &NumericConfig::default());
                for record in &numeric.records {
                    println!(
                        "  ({:.6}, {:.6}): {} with f = {:.6}",
                        record.x[0], record.x[1], record.classification, record.value
                    );
                }
                if !numeric.unconverged.is_empty() {
                    println!("  {} seeds did not converge", numeric.unconverged.len());
                }
            }
            Err(err) => return Err(err.into()),
        }
        println!();
    }

    let f = Polynomial::parse("4*x^2 + 3*y^2 - 5*x*y - 8*x", &vars)?;
    let feasible = Line::from_f64(1.0, 1.0, 4.0)?;
    println!("f = {f} on {}", feasible.display_with(&vars));
    match line::optimize_on_line(&f, &feasible)? {
        line::LineOutcome::Constant(value) => println!("  constant at {value}"),
        line::LineOutcome::Stationary(points) => {
            for p in points {
                println!(
                    "  ({}, {}): {} with f = {}",
                    p.point[0], p.point[1], p.classification, p.value
                );
            }
        }
    }
    println!();

    let f = Polynomial::parse("x + y", &vars)?;
    let extrema = circle::extrema_on_circle(&f, &circle::Circle::unit(), &circle::Config::default())?;
    println!("f = {f} on the unit circle");
    println!(
        "  min f = {:.9} at ({:.6}, {:.6})",
        extrema.min.value, extrema.min.x[0], extrema.min.x[1]
    );
    println!(
        "  max f = {:.9} at ({:.6}, {:.6})",
        extrema.max.value, extrema.max.x[0], extrema.max.x[1]
    );

    let f = Polynomial::parse("2*x^2 + y^2 - 2*x*y - 3*x - 2*y", &vars)?;
    let below = circle::HalfPlane::new(-1.0, 1.0, 0.0)?;
    let arc = circle::Arc::within(circle::Circle::unit(), &below)?;
    let extrema = circle::extrema_on_arc(&f, &arc, &circle::Config::default())?;
    println!("f = {f} on the unit circle with y <= x");
    println!(
        "  min f = {:.9} at ({:.6}, {:.6})",
        extrema.min.value, extrema.min.x[0], extrema.min.x[1]
    );
    println!(
        "  max f = {:.9} at ({:.6}, {:.6})",
        extrema.max.value, extrema.max.x[0], extrema.max.x[1]
    );

    Ok(())
}
