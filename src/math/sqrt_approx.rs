use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::error::{ConsistencyError, Result};

use super::{to_f64, Rational};

/// Largest value a scaled edge length may take before the seed denominator
/// is halved, keeping the integer seed representable.
const MAX_SCALED: i64 = 1 << 62;

/// Cap on Newton refinement steps. Convergence doubles the correct digits
/// per step, so hitting the cap means the inputs are inconsistent.
const MAX_REFINEMENTS: u32 = 100;

/// A certified rational approximation of an edge length.
#[derive(Debug, Clone)]
pub struct CertifiedSqrt {
    /// Rational approximation of `√sqr_d`, strictly larger than both
    /// `|Δx|` and `|Δy|`.
    pub value: Rational,
    /// `sqr_d − value²`. Zero exactly when the length is rational and was
    /// hit exactly; otherwise bounded by the certified error bound.
    pub residual: Rational,
}

/// Approximates the square root of the exact squared edge length `sqr_d`.
///
/// The returned value `v` satisfies `|sqr_d − v²| ≤ 2·d·eps·|(d − Δy)/Δx|`
/// (with `d = √sqr_d`) and exceeds both `|Δx|` and `|Δy|`, which keeps the
/// tangent-half-angle quotients built from it well-posed.
///
/// `seed_denom` is the denominator granularity `⌊1/√eps⌋` precomputed by
/// the caller; it is halved as needed so the scaled length stays
/// representable, and never drops below 1.
///
/// # Errors
///
/// - `ConsistencyError::NonFiniteApproximation` if the floating bound does
///   not lift into the rational field (degenerate input).
/// - `ConsistencyError::SqrtNonConvergence` if refinement exhausts its
///   iteration cap, which a positive `eps` and a genuine edge never cause.
pub fn certified_sqrt(
    sqr_d: &Rational,
    delta_x: &Rational,
    delta_y: &Rational,
    eps: f64,
    seed_denom: i64,
) -> Result<CertifiedSqrt> {
    let abs_dx = delta_x.abs();
    let abs_dy = delta_y.abs();

    // err_bound = 2·d·eps·|(d − Δy)/Δx|, evaluated in floating point and
    // lifted exactly into the rational field.
    let dd = to_f64(sqr_d).sqrt();
    let bound = 2.0 * dd * eps * ((dd - to_f64(delta_y)) / to_f64(delta_x)).abs();
    let err_bound =
        Rational::from_float(bound).ok_or(ConsistencyError::NonFiniteApproximation)?;

    // Largest denominator not exceeding the seed granularity that keeps
    // denom·d within the integer range.
    let mut denom = seed_denom.max(1);
    while denom > 1 && (MAX_SCALED as f64) / (denom as f64) < dd {
        denom /= 2;
    }

    let scaled = (dd * denom as f64 + 0.5) as i64;
    let mut value = Rational::new(BigInt::from(scaled), BigInt::from(denom));
    if value.is_zero() {
        // An edge far shorter than the denominator granularity seeds at
        // zero, which would poison the first Newton update.
        value = Rational::one();
    }
    let mut residual = sqr_d - &value * &value;

    let half = Rational::new(BigInt::from(1), BigInt::from(2));
    let mut refinements = 0u32;
    while residual.abs() > err_bound || value <= abs_dx || value <= abs_dy {
        if refinements == MAX_REFINEMENTS {
            return Err(ConsistencyError::SqrtNonConvergence {
                iterations: MAX_REFINEMENTS,
            }
            .into());
        }
        value = (&value + sqr_d / &value) * &half;
        residual = sqr_d - &value * &value;
        refinements += 1;
    }

    Ok(CertifiedSqrt { value, residual })
}
