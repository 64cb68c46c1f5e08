//! Standard normal distribution helpers built on the error function.
//!
//! `Φ(x) = 0.5·(1 + erf(x/√2))`. The equivalent form `0.5·erfc(-x/√2)` is used for
//! evaluation: for large negative `x` the `1 + erf` sum cancels to zero long before
//! the true probability underflows, while `erfc` keeps full relative precision.

use std::f64::consts::SQRT_2;

/// Error function.
pub fn erf(x: f64) -> f64 {
    libm::erf(x)
}

/// Complementary error function, `1 - erf(x)`.
pub fn erfc(x: f64) -> f64 {
    libm::erfc(x)
}

/// Standard normal cumulative distribution function Φ(x).
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}
