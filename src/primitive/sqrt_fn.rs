//! Square root by a fixed number of Newton steps.

use crate::consts::TWO_54;
use crate::policy::SQRT;
use super::abs::{abs, max, min};

/// Added to half the bit pattern of `x` to approximately halve its exponent.
const SEED_BIAS: u64 = 0x1FF8_0000_0000_0000;

/// Square root √x.
///
/// Seeds Newton's method on `y² − x` by halving the exponent in the bit
/// representation (within ~6% of the root), then applies a fixed number of
/// refinements. Returns NaN for `x < 0`; `±0`, `+∞` and NaN pass through.
///
/// # Example
///
/// ```
/// const ROOT2: f64 = constmath::primitive::sqrt(2.0);
/// assert!((ROOT2 - core::f64::consts::SQRT_2).abs() < 1e-15);
/// assert!(constmath::primitive::sqrt(-1.0).is_nan());
/// ```
pub const fn sqrt(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 || x == f64::INFINITY {
        return x;
    }
    if x < f64::MIN_POSITIVE {
        // √(x·2^108) = √x·2^54
        return sqrt(x * TWO_54 * TWO_54) / TWO_54;
    }
    let seed = f64::from_bits((x.to_bits() >> 1) + SEED_BIAS);
    newton(x, seed, SQRT.max_depth)
}

const fn newton(x: f64, y: f64, steps: u32) -> f64 {
    if steps == 0 {
        y
    } else {
        newton(x, 0.5 * (y + x / y), steps - 1)
    }
}

/// Reciprocal square root 1/√x.
#[inline]
pub const fn inv_sqrt(x: f64) -> f64 {
    1.0 / sqrt(x)
}

/// √(x² + y²) without intermediate overflow or underflow.
///
/// Infinite if either argument is infinite, even when the other is NaN.
pub const fn hypot(x: f64, y: f64) -> f64 {
    if x.is_infinite() || y.is_infinite() {
        return f64::INFINITY;
    }
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    let big = max(abs(x), abs(y));
    let small = min(abs(x), abs(y));
    if big == 0.0 {
        return 0.0;
    }
    let r = small / big;
    big * sqrt(1.0 + r * r)
}
