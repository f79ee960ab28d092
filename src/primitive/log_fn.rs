//! Logarithms.
//!
//! `x = m · 2^e` with `m ∈ [1/√2, √2)`, then `ln m = 2·atanh(s)` with
//! `s = (m − 1)/(m + 1)`, `|s| ≤ 0.1716`, summed as a fixed-depth nested
//! series in `s²`.

use crate::consts::{LN_2_HI, LN_2_LO, LOG10_E, LOG2_E, SQRT_2, TWO_54};
use crate::policy::LOG;

const MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;
const ONE_EXPONENT: u64 = 0x3FF0_0000_0000_0000;

/// Natural logarithm ln x.
///
/// NaN for `x < 0`, −∞ at zero, +∞ at +∞.
///
/// # Example
///
/// ```
/// use constmath::primitive::log;
///
/// assert!((log(20.085536923187668) - 3.0).abs() < 1e-15);
/// assert!(log(-1.0).is_nan());
/// assert_eq!(log(0.0), f64::NEG_INFINITY);
/// ```
pub const fn log(x: f64) -> f64 {
    match special_case(x) {
        Some(v) => v,
        None => {
            let (e, lm) = log_parts(x);
            e * LN_2_HI + (e * LN_2_LO + lm)
        }
    }
}

/// Base-2 logarithm. Exact for powers of two.
pub const fn log2(x: f64) -> f64 {
    match special_case(x) {
        Some(v) => v,
        None => {
            let (e, lm) = log_parts(x);
            e + lm * LOG2_E
        }
    }
}

/// Base-10 logarithm.
pub const fn log10(x: f64) -> f64 {
    log(x) * LOG10_E
}

/// ln(1 + x), accurate for x near zero.
pub const fn log1p(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    let u = 1.0 + x;
    if u == 1.0 {
        x
    } else if u == f64::INFINITY {
        u
    } else {
        // the rounding error of 1 + x cancels in x / (u - 1)
        log(u) * (x / (u - 1.0))
    }
}

const fn special_case(x: f64) -> Option<f64> {
    if x.is_nan() {
        Some(x)
    } else if x < 0.0 {
        Some(f64::NAN)
    } else if x == 0.0 {
        Some(f64::NEG_INFINITY)
    } else if x == f64::INFINITY {
        Some(x)
    } else {
        None
    }
}

/// `(e, ln m)` for a positive finite `x = m · 2^e`.
const fn log_parts(x: f64) -> (f64, f64) {
    let (m, e) = split(x);
    let s = (m - 1.0) / (m + 1.0);
    (e as f64, 2.0 * s * nested(s * s, 0, LOG.max_depth))
}

/// `1/(2k+1) + s²·(1/(2k+3) + s²·(…))`, innermost term first.
const fn nested(s2: f64, k: u32, depth: u32) -> f64 {
    let inv = 1.0 / (2 * k + 1) as f64;
    if k >= depth {
        inv
    } else {
        inv + s2 * nested(s2, k + 1, depth)
    }
}

/// Split a positive finite `x` into `(m, e)` with `m ∈ [1/√2, √2)`.
const fn split(x: f64) -> (f64, i32) {
    if x < f64::MIN_POSITIVE {
        let (m, e) = split(x * TWO_54);
        return (m, e - 54);
    }
    let bits = x.to_bits();
    let e = ((bits >> 52) & 0x7FF) as i32 - 1023;
    let m = f64::from_bits((bits & MANTISSA_MASK) | ONE_EXPONENT);
    if m > SQRT_2 {
        (0.5 * m, e + 1)
    } else {
        (m, e)
    }
}
