//! Rounding to integers and floating-point remainder.

use crate::consts::TWO_52;
use super::abs::{abs, copysign};
use super::exp_fn::scalbn;

/// Round toward zero.
pub const fn trunc(x: f64) -> f64 {
    // NaN, infinities and anything >= 2^52 in magnitude are already integral
    if x.is_nan() || abs(x) >= TWO_52 {
        return x;
    }
    copysign((x as i64) as f64, x)
}

/// Round toward −∞.
pub const fn floor(x: f64) -> f64 {
    let t = trunc(x);
    if x < t {
        t - 1.0
    } else {
        t
    }
}

/// Round toward +∞.
pub const fn ceil(x: f64) -> f64 {
    let t = trunc(x);
    if x > t {
        t + 1.0
    } else {
        t
    }
}

/// Round to nearest, ties away from zero.
pub const fn round(x: f64) -> f64 {
    let t = trunc(x);
    // x - t is exact
    if abs(x - t) >= 0.5 {
        t + copysign(1.0, x)
    } else {
        t
    }
}

/// Floating-point remainder `x − trunc(x/y)·y`, with the sign of `x`.
///
/// Exact for all finite arguments: with `|x| = mx·2^ex` and `|y| = my·2^ey`
/// the remainder is `(mx·2^(ex−ey) mod my)·2^ey`, reduced in integers.
/// NaN when `y` is zero or `x` is infinite; `x` when `y` is infinite.
///
/// # Example
///
/// ```
/// use constmath::primitive::fmod;
///
/// // 10^17 = 3·33333333333333333 + 1; x/y rounds to an integer in f64
/// assert_eq!(fmod(1e17, 3.0), 1.0);
/// assert_eq!(fmod(-7.5, 2.0), -1.5);
/// ```
pub const fn fmod(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() || x.is_infinite() || y == 0.0 {
        return f64::NAN;
    }
    if y.is_infinite() || abs(x) < abs(y) {
        return x;
    }
    let (mx, ex) = decompose(abs(x));
    let (my, ey) = decompose(abs(y));
    // |x| ≥ |y| implies ex ≥ ey
    let r = ((mx % my) as u128 * pow2_mod((ex - ey) as u32, my) as u128) % my as u128;
    copysign(scalbn(r as f64, ey), x)
}

/// `(m, e)` with `x = m·2^e` for a positive finite `x`.
const fn decompose(x: f64) -> (u64, i32) {
    let bits = x.to_bits();
    let biased = (bits >> 52) as i32;
    let fraction = bits & ((1 << 52) - 1);
    if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased - 1075)
    }
}

/// `2^k mod m` by repeated squaring.
const fn pow2_mod(k: u32, m: u64) -> u64 {
    if k == 0 {
        return 1 % m;
    }
    let h = pow2_mod(k / 2, m) as u128;
    let sq = h * h % m as u128;
    let r = if k % 2 == 1 { sq * 2 % m as u128 } else { sq };
    r as u64
}

/// `true` if `x` is finite and has no fractional part.
#[inline]
pub(crate) const fn is_integral(x: f64) -> bool {
    x.is_finite() && trunc(x) == x
}
