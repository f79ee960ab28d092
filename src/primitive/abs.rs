//! Absolute value, sign manipulation, min/max.

const SIGN_MASK: u64 = 1 << 63;

/// Absolute value |x|. Exact; maps −0 to +0 and keeps NaN.
///
/// # Example
///
/// ```
/// const A: f64 = constmath::primitive::abs(-2.5);
/// assert_eq!(A, 2.5);
/// ```
#[inline]
pub const fn abs(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & !SIGN_MASK)
}

/// `true` if the sign bit of `x` is set (including −0 and negative NaN).
#[inline]
pub const fn signbit(x: f64) -> bool {
    x.to_bits() & SIGN_MASK != 0
}

/// Magnitude of `x` with the sign of `y`.
#[inline]
pub const fn copysign(x: f64, y: f64) -> f64 {
    f64::from_bits((x.to_bits() & !SIGN_MASK) | (y.to_bits() & SIGN_MASK))
}

/// Sign function: −1 for negative, +1 for positive. Zeros and NaN pass through.
#[inline]
pub const fn sgn(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

/// Smaller of `x` and `y`; a NaN argument is ignored.
#[inline]
pub const fn min(x: f64, y: f64) -> f64 {
    if x.is_nan() {
        y
    } else if y.is_nan() || x < y {
        x
    } else {
        y
    }
}

/// Larger of `x` and `y`; a NaN argument is ignored.
#[inline]
pub const fn max(x: f64, y: f64) -> f64 {
    if x.is_nan() {
        y
    } else if y.is_nan() || x > y {
        x
    } else {
        y
    }
}
