//! Beta function and log-beta via lgamma.

use crate::primitive::{exp, floor, is_odd};
use super::gamma_fn::lgamma;

/// Beta function B(a, b) = Γ(a)·Γ(b) / Γ(a+b).
///
/// Computed as `±exp(lbeta(a, b))` to avoid overflow for large arguments,
/// with the sign taken from the three gamma factors (Γ is negative on
/// (−1, 0), (−3, −2), …).
///
/// # Example
///
/// ```
/// use constmath::special::beta;
///
/// // B(1, 1) = 1
/// assert!((beta(1.0, 1.0) - 1.0).abs() < 1e-14);
///
/// // B(2, 3) = 1/12
/// assert!((beta(2.0, 3.0) - 1.0 / 12.0).abs() < 1e-14);
///
/// // B(−0.5, 1) = Γ(−0.5)/Γ(0.5) = −2
/// assert!((beta(-0.5, 1.0) + 2.0).abs() < 1e-14);
/// ```
pub const fn beta(a: f64, b: f64) -> f64 {
    gamma_sign(a) * gamma_sign(b) * gamma_sign(a + b) * exp(lbeta(a, b))
}

/// Natural logarithm of the absolute value of the beta function,
/// ln |B(a, b)|.
///
/// Computed as `lgamma(a) + lgamma(b) − lgamma(a+b)`.
pub const fn lbeta(a: f64, b: f64) -> f64 {
    lgamma(a) + lgamma(b) - lgamma(a + b)
}

/// Sign of Γ(x); +1 at the poles.
const fn gamma_sign(x: f64) -> f64 {
    if x < 0.0 && is_odd(floor(x) as i64) {
        -1.0
    } else {
        1.0
    }
}
