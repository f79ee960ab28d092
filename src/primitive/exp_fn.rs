//! Natural exponential.
//!
//! `e^x = 2^n · e^r` with `n = round(x / ln 2)` and `|r| ≤ ln2 / 2`. The
//! reduced argument is taken with a two-part ln 2 so that `x − n·ln2` is
//! exact to ~2^-80, `e^r` is a fixed-depth nested Taylor expansion, and the
//! result is rebuilt by exact scaling with `2^n`.

use crate::consts::{LN_2, LN_2_HI, LN_2_LO, LOG2_E};
use crate::policy::EXP;
use super::abs::abs;
use super::round::round;

/// Largest x with finite e^x.
const OVERFLOW: f64 = 709.782712893384;
/// Below this e^x rounds to zero.
const UNDERFLOW: f64 = -745.1332191019412;

const TWO_1023: f64 = f64::from_bits(0x7FE0_0000_0000_0000);
const TWO_M969: f64 = f64::from_bits(54 << 52);

/// Exponential e^x.
///
/// # Example
///
/// ```
/// const E3: f64 = constmath::primitive::exp(3.0);
/// assert!((E3 - 20.085536923187668).abs() < 1e-13);
/// ```
pub const fn exp(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x > OVERFLOW {
        return f64::INFINITY;
    }
    if x < UNDERFLOW {
        return 0.0;
    }
    let n = round(x * LOG2_E);
    let r = (x - n * LN_2_HI) - n * LN_2_LO;
    scalbn(1.0 + r * nested(r, 1, EXP.max_depth), n as i32)
}

/// e^x − 1, accurate for x near zero.
pub const fn expm1(x: f64) -> f64 {
    if x.is_nan() || x == 0.0 {
        return x;
    }
    if abs(x) < 0.5 * LN_2 {
        x * nested(x, 1, EXP.max_depth)
    } else {
        exp(x) - 1.0
    }
}

/// `1 + r/(k+1)·(1 + r/(k+2)·(…))`, innermost term first.
///
/// With `k = 1` this is `(e^r − 1)/r` truncated after `depth` terms.
const fn nested(r: f64, k: u32, depth: u32) -> f64 {
    if k > depth {
        1.0
    } else {
        1.0 + r / (k + 1) as f64 * nested(r, k + 1, depth)
    }
}

/// `y · 2^n`, exact unless the result is subnormal.
pub(crate) const fn scalbn(y: f64, n: i32) -> f64 {
    if n > 1023 {
        scalbn(y * TWO_1023, n - 1023)
    } else if n < -1022 {
        // step by 2^-969 so a subnormal result is rounded only once
        scalbn(y * TWO_M969, n + 969)
    } else {
        y * f64::from_bits(((n + 1023) as u64) << 52)
    }
}
