//! Exact Lagrange interpolation at `x = 0`.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// A single share, i.e. one evaluation point of the hidden polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePoint {
    /// The evaluation point.
    pub x: BigInt,
    /// The polynomial value at `x`, already decoded.
    pub y: BigInt,
}

/// The error type for [`interpolate_at_zero`].
#[derive(Debug, thiserror::Error)]
pub enum InterpolateError {
    /// The point set was empty.
    #[error("cannot interpolate an empty point set")]
    NoPoints,
    /// Two points share an x-coordinate, so no polynomial passes through both.
    #[error("duplicate x-coordinate {0} in point set")]
    DuplicateX(BigInt),
    /// The Lagrange sum did not collapse to an integer.
    #[error("reconstructed value {0} is not an integer")]
    NonIntegerSecret(BigRational),
}

/// Evaluates the unique polynomial of degree `k - 1` through the `k` given
/// points at `x = 0` and returns its constant term.
///
/// For each point `j` the Lagrange basis value at zero is accumulated as
/// `num_j = ∏_{i≠j} x_i` over `den_j = ∏_{i≠j} (x_i - x_j)`, both exact
/// big-integer products. The terms `y_j * num_j / den_j` are summed as exact
/// rationals: a single term can be non-integral even when the sum is an
/// integer, so dividing per term would silently lose the remainder. The sum
/// itself must be an integer for shares produced by an integer-coefficient
/// sharing; anything else is reported as [`InterpolateError::NonIntegerSecret`].
pub fn interpolate_at_zero(points: &[SharePoint]) -> Result<BigInt, InterpolateError> {
    if points.is_empty() {
        return Err(InterpolateError::NoPoints);
    }
    let mut secret = BigRational::zero();
    for (j, point) in points.iter().enumerate() {
        let mut num = BigInt::one();
        let mut den = BigInt::one();
        for (i, other) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            if other.x == point.x {
                return Err(InterpolateError::DuplicateX(point.x.clone()));
            }
            num *= &other.x;
            den *= &other.x - &point.x;
        }
        secret += BigRational::new(&point.y * num, den);
    }
    if !secret.is_integer() {
        return Err(InterpolateError::NonIntegerSecret(secret));
    }
    Ok(secret.to_integer())
}
