//! Standard normal distribution: density, cumulative, quantile.
//!
//! Only the standard normal is modeled; callers apply any shift/scale
//! before calling in.

use std::f64::consts::SQRT_2;

use crate::math;
use crate::quantile;

/// `1/√(2π)`, precomputed.
const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Half-width of the quantile bracket.
const PPF_BRACKET: f64 = 10.0;

/// Density of the standard normal at `x`: `(1/√(2π)) · e^(−x²/2)`.
pub fn pdf(x: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Cumulative distribution `Φ(x) = 0.5 · (1 + erf(x/√2))`, clamped to [0, 1].
///
/// Closed form via the error function; no integration.
pub fn cdf(x: f64) -> f64 {
    (0.5 * (1.0 + math::erf(x / SQRT_2))).clamp(0.0, 1.0)
}

/// Quantile: the `x` with `Φ(x) ≈ p`.
///
/// `p <= 0` and `p >= 1` map to the bracket edges ∓10.
pub fn ppf(p: f64) -> f64 {
    if p <= 0.0 {
        return -PPF_BRACKET;
    }
    if p >= 1.0 {
        return PPF_BRACKET;
    }
    quantile::bisect(cdf, -PPF_BRACKET, PPF_BRACKET, p)
}
