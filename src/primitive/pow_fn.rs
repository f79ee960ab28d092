//! Powers.

use crate::consts::TWO_52;
use super::abs::abs;
use super::exp_fn::exp;
use super::log_fn::log;
use super::round::{is_integral, trunc};

/// Largest |n| raised by repeated squaring.
const MAX_SQUARING: f64 = 32.0;

/// `base` raised to `exponent`.
///
/// Small integral exponents (|n| ≤ 32) use exponentiation by squaring
/// ([`powi`]), whose rounding error grows with `n`; every other exponent
/// uses `exp(exponent · ln |base|)`, with the sign of an odd power of a
/// negative base restored afterwards. A negative base with a non-integral
/// exponent gives NaN.
///
/// # Example
///
/// ```
/// use constmath::primitive::pow;
///
/// const P: f64 = pow(2.0, 10.0);
/// assert_eq!(P, 1024.0);
/// assert!((pow(2.0, 0.5) - core::f64::consts::SQRT_2).abs() < 1e-15);
/// assert!(pow(-8.0, 1.0 / 3.0).is_nan());
/// ```
pub const fn pow(base: f64, exponent: f64) -> f64 {
    if exponent == 0.0 || base == 1.0 {
        return 1.0;
    }
    if base.is_nan() || exponent.is_nan() {
        return f64::NAN;
    }
    if exponent.is_infinite() {
        let b = abs(base);
        return if b == 1.0 {
            1.0
        } else if (b < 1.0) == (exponent > 0.0) {
            0.0
        } else {
            f64::INFINITY
        };
    }
    if is_integral(exponent) {
        if abs(exponent) <= MAX_SQUARING {
            let p = powi(base, abs(exponent) as u64);
            return if exponent < 0.0 { 1.0 / p } else { p };
        }
        let p = pow_nonnegative(abs(base), exponent);
        return if base < 0.0 && is_odd_integer(exponent) { -p } else { p };
    }
    if base < 0.0 {
        return f64::NAN;
    }
    pow_nonnegative(base, exponent)
}

/// Oddness of an integral `n`; beyond 2^53 every float is even.
const fn is_odd_integer(n: f64) -> bool {
    abs(n) < 2.0 * TWO_52 && trunc(0.5 * n) * 2.0 != n
}

const fn pow_nonnegative(base: f64, exponent: f64) -> f64 {
    if base == 0.0 {
        return if exponent > 0.0 { 0.0 } else { f64::INFINITY };
    }
    if base == f64::INFINITY {
        return if exponent > 0.0 { f64::INFINITY } else { 0.0 };
    }
    exp(exponent * log(base))
}

/// `base^n` by recursive squaring; depth is ⌈log2 n⌉.
pub const fn powi(base: f64, n: u64) -> f64 {
    if n == 0 {
        return 1.0;
    }
    let half = powi(base * base, n / 2);
    if n & 1 == 1 {
        base * half
    } else {
        half
    }
}
