//! Exact real roots of univariate polynomials with rational coefficients.
//!
//! Candidates come from the rational root theorem. Whatever is left after
//! dividing out the rational roots is checked with a Sturm sequence: if it
//! still has real roots they are irrational and cannot be reported exactly.

use std::collections::BTreeSet;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use stationary_core::Univariate;

/// Largest integer whose divisors are enumerated by trial division.
const DIVISOR_LIMIT: u64 = 1_000_000_000_000;

/// Largest number of `±p/q` candidates tested against one polynomial.
const CANDIDATE_LIMIT: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RootError {
    /// Some real roots are irrational.
    Irrational,

    /// The coefficients are too large to enumerate candidates.
    TooLarge,
}

/// Returns every real root of `p` in ascending order, without repetition.
///
/// The zero polynomial has no isolated roots; callers must treat it
/// separately.
pub(crate) fn rational_roots(p: &Univariate) -> Result<Vec<BigRational>, RootError> {
    if p.degree().unwrap_or(0) == 0 {
        return Ok(Vec::new());
    }

    let mut ints = integer_coefficients(p);
    let mut roots = BTreeSet::new();

    let leading_zeros = ints.iter().take_while(|c| c.is_zero()).count();
    if leading_zeros > 0 {
        roots.insert(BigRational::zero());
        ints.drain(..leading_zeros);
    }

    let mut remaining = Univariate::new(ints.iter().cloned().map(BigRational::from_integer).collect());

    if remaining.degree().unwrap_or(0) > 0 {
        let (Some(constant), Some(leading)) = (ints.first(), ints.last()) else {
            return Ok(roots.into_iter().collect());
        };
        for candidate in candidates(constant, leading)? {
            if remaining.eval(&candidate).is_zero() {
                remaining = deflate(remaining, &candidate);
                roots.insert(candidate);
            }
            if remaining.degree().unwrap_or(0) == 0 {
                break;
            }
        }
    }

    if count_real_roots(&remaining) > 0 {
        return Err(RootError::Irrational);
    }
    Ok(roots.into_iter().collect())
}

/// Counts the distinct real roots of `p` with Sturm's theorem.
pub(crate) fn count_real_roots(p: &Univariate) -> usize {
    if p.degree().unwrap_or(0) == 0 {
        return 0;
    }

    let sequence = sturm_sequence(p);
    let at = |positive: bool| {
        variations(sequence.iter().map(|q| q.sign_at_infinity(positive)))
    };
    at(false).saturating_sub(at(true))
}

fn sturm_sequence(p: &Univariate) -> Vec<Univariate> {
    let mut sequence = vec![p.clone(), p.derivative()];
    loop {
        let [.., prev, last] = sequence.as_slice() else {
            break;
        };
        let Some((_, rem)) = prev.div_rem(last) else {
            break;
        };
        if rem.is_zero() {
            break;
        }
        sequence.push(rem.scale(&-BigRational::one()));
    }
    sequence
}

fn variations(signs: impl Iterator<Item = i8>) -> usize {
    let nonzero: Vec<i8> = signs.filter(|&s| s != 0).collect();
    nonzero.windows(2).filter(|w| w[0] != w[1]).count()
}

/// Scales `p` by the lcm of its denominators, giving integer coefficients.
fn integer_coefficients(p: &Univariate) -> Vec<BigInt> {
    let lcm = p
        .coefficients()
        .iter()
        .fold(BigInt::one(), |acc, c| acc.lcm(c.denom()));
    p.coefficients()
        .iter()
        .map(|c| (c * BigRational::from_integer(lcm.clone())).to_integer())
        .collect()
}

/// Builds the sorted set of `±p/q` with `p | constant` and `q | leading`.
fn candidates(constant: &BigInt, leading: &BigInt) -> Result<BTreeSet<BigRational>, RootError> {
    let numerators = divisors(constant)?;
    let denominators = divisors(leading)?;
    if numerators.len().saturating_mul(denominators.len()) > CANDIDATE_LIMIT {
        return Err(RootError::TooLarge);
    }

    let mut set = BTreeSet::new();
    for p in &numerators {
        for q in &denominators {
            let r = BigRational::new(BigInt::from(*p), BigInt::from(*q));
            set.insert(-r.clone());
            set.insert(r);
        }
    }
    Ok(set)
}

fn divisors(n: &BigInt) -> Result<Vec<u64>, RootError> {
    let n = n
        .abs()
        .to_u64()
        .filter(|&n| n <= DIVISOR_LIMIT)
        .ok_or(RootError::TooLarge)?;

    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = 1;
    while d * d <= n {
        if n % d == 0 {
            small.push(d);
            if d != n / d {
                large.push(n / d);
            }
        }
        d += 1;
    }
    small.extend(large.into_iter().rev());
    Ok(small)
}

/// Divides out every factor `(t - root)`.
fn deflate(mut p: Univariate, root: &BigRational) -> Univariate {
    let factor = Univariate::new(vec![-root.clone(), BigRational::one()]);
    while p.degree().unwrap_or(0) > 0 && p.eval(root).is_zero() {
        match p.div_rem(&factor) {
            Some((quotient, _)) => p = quotient,
            None => break,
        }
    }
    p
}
