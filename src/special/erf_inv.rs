//! Inverse error function.

use crate::policy::INVERSE;
use crate::primitive::{abs, copysign, log, sqrt};
use crate::root::{invert, Monotone};

/// Upper end of the search bracket; erf(6) rounds to 1.
const BRACKET_HI: f64 = 6.0;

/// Inverse error function: the x with erf(x) = y, for −1 ≤ y ≤ 1.
///
/// Seeded by Giles' single-precision rational approximation and refined with
/// Newton steps inside the bracket [0, 6]. Returns ±∞ at ±1 and NaN for
/// |y| > 1.
///
/// # Example
///
/// ```
/// use constmath::special::{erf, erf_inv};
///
/// let x = erf_inv(0.5);
/// assert!((x - 0.4769362762044699).abs() < 1e-15);
/// assert!((erf(erf_inv(-0.9)) + 0.9).abs() < 1e-15);
/// assert!(erf_inv(1.5).is_nan());
/// ```
pub const fn erf_inv(y: f64) -> f64 {
    if y.is_nan() || y == 0.0 {
        return y;
    }
    let ay = abs(y);
    if ay > 1.0 {
        return f64::NAN;
    }
    if ay == 1.0 {
        return copysign(f64::INFINITY, y);
    }
    let x = invert(&Monotone::Erf, ay, seed(ay), 0.0, BRACKET_HI, INVERSE);
    copysign(x, y)
}

/// Giles (2010), "Approximating the erfinv function", single precision.
const fn seed(y: f64) -> f64 {
    let w = -log((1.0 - y) * (1.0 + y));
    let p = if w < 5.0 {
        let w = w - 2.5;
        let p = 2.81022636e-08;
        let p = 3.43273939e-07 + p * w;
        let p = -3.5233877e-06 + p * w;
        let p = -4.39150654e-06 + p * w;
        let p = 0.00021858087 + p * w;
        let p = -0.00125372503 + p * w;
        let p = -0.00417768164 + p * w;
        let p = 0.246640727 + p * w;
        1.50140941 + p * w
    } else {
        let w = sqrt(w) - 3.0;
        let p = -0.000200214257;
        let p = 0.000100950558 + p * w;
        let p = 0.00134934322 + p * w;
        let p = -0.00367342844 + p * w;
        let p = 0.00573950773 + p * w;
        let p = -0.0076224613 + p * w;
        let p = 0.00943887047 + p * w;
        let p = 1.00167406 + p * w;
        2.83297682 + p * w
    };
    p * y
}
