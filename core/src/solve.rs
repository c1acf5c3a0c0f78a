use math::prelude::*;
use num_bigint::BigInt;
use num_traits::FromPrimitive;
use tracing::{debug, instrument, trace};

use crate::{
    decode::decode_points,
    error::{MalformedInput, SecretError, SecretResult},
    input::InputDocument,
    params::SolverConfig,
    points::PointRecord,
};

/// Recover the constant term of the polynomial through the first `k` points.
pub fn find_constant(document: &InputDocument) -> SecretResult<BigInt> {
    find_constant_with(document, &SolverConfig::default())
}

/// [`find_constant`] with an explicit solver configuration.
#[instrument(skip_all, fields(k = document.keys().k))]
pub fn find_constant_with(
    document: &InputDocument,
    config: &SolverConfig,
) -> SecretResult<BigInt> {
    let decoded = decode_points(document)?;
    let k = decoded.k;
    if decoded.points.len() < k {
        return Err(SecretError::InsufficientPoints {
            required: k,
            available: decoded.points.len(),
        });
    }

    let coefficients = interpolate(&decoded.points[..k], config)?;
    let constant = coefficients[k - 1];
    if !constant.is_finite() {
        return Err(SecretError::NonFiniteCoefficient(constant));
    }

    let rounded = constant.round();
    debug!(constant, rounded, "recovered constant term");
    BigInt::from_f64(rounded).ok_or(SecretError::NonFiniteCoefficient(constant))
}

/// Fit the polynomial of degree `points.len() - 1` through `points`.
///
/// Coefficients are ordered from the highest-degree term down to the
/// constant term, which is therefore the last entry.
pub fn interpolate(
    points: &[PointRecord],
    config: &SolverConfig,
) -> SecretResult<Vec<f64>> {
    let xs: Vec<f64> = points.iter().map(|p| p.x as f64).collect();
    let ys = points
        .iter()
        .map(|p| {
            p.y_f64()
                .ok_or(MalformedInput::ValueOutOfRange { x: p.x })
        })
        .collect::<Result<Vec<_>, _>>()?;
    trace!(?xs, ?ys, "interpolating");

    let vandermonde = vandermonde(&xs)?;
    let inverse = vandermonde.try_inverse(config.pivot_epsilon())?;
    let coefficients = inverse.try_mul_vector(&ys)?;
    debug!(?coefficients, "solved coefficients");
    Ok(coefficients)
}
