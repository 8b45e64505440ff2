use std::fmt;

use num_rational::BigRational;
use num_traits::{One, Signed};

use crate::Var;

use super::{Exponents, Polynomial};

/// Formats as `3*x1^2 + 2*x1*x2 - 1/2*x2 + 7`, highest degree first.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }

        let mut ordered: Vec<_> = self.terms.iter().collect();
        ordered.sort_by(|([a1, a2], _), ([b1, b2], _)| {
            (b1 + b2).cmp(&(a1 + a2)).then(b1.cmp(a1))
        });

        for (n, (exps, coeff)) in ordered.into_iter().enumerate() {
            let magnitude = coeff.abs();
            match (n, coeff.is_negative()) {
                (0, true) => f.write_str("-")?,
                (0, false) => {}
                (_, true) => f.write_str(" - ")?,
                (_, false) => f.write_str(" + ")?,
            }
            self.write_term(f, exps, &magnitude)?;
        }
        Ok(())
    }
}

impl Polynomial {
    fn write_term(
        &self,
        f: &mut fmt::Formatter<'_>,
        exps: &Exponents,
        magnitude: &BigRational,
    ) -> fmt::Result {
        let mut factors = Vec::new();
        let is_constant = exps == &[0, 0];
        if is_constant || !magnitude.is_one() {
            factors.push(magnitude.to_string());
        }
        for var in Var::ALL {
            let name = self.vars.name(var);
            match exps[var.index()] {
                0 => {}
                1 => factors.push(name.to_owned()),
                p => factors.push(format!("{name}^{p}")),
            }
        }
        f.write_str(&factors.join("*"))
    }
}

#[cfg(test)]
mod tests {
    use crate::Variables;

    use super::*;

    #[test]
    fn orders_by_degree_then_x1() {
        let vars = Variables::default();
        let f = Polynomial::parse("7 + 2*x2^2 + 2*x1*x2 + 3*x1^2", &vars).unwrap();
        assert_eq!(f.to_string(), "3*x1^2 + 2*x1*x2 + 2*x2^2 + 7");
    }

    #[test]
    fn signs_and_unit_coefficients() {
        let vars = Variables::new("x", "y").unwrap();
        let f = Polynomial::parse("-x^2 + y - 1/2", &vars).unwrap();
        assert_eq!(f.to_string(), "-x^2 + y - 1/2");
    }

    #[test]
    fn zero_polynomial() {
        let f = Polynomial::zero(Variables::default());
        assert_eq!(f.to_string(), "0");
    }

    #[test]
    fn display_round_trips_through_parse() {
        let vars = Variables::default();
        let f = Polynomial::parse("(x1 - 2*x2)^3 / 4 + 3", &vars).unwrap();
        let again = Polynomial::parse(&f.to_string(), &vars).unwrap();
        assert_eq!(f, again);
    }
}
