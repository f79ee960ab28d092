//! Inverse trigonometric functions.
//!
//! atan reduces its argument to |t| ≤ tan(π/8) with
//! `atan x = π/2 − atan(1/x)` and `atan x = π/4 + atan((x−1)/(x+1))`, then
//! evaluates Gauss's continued fraction to a fixed depth. asin, acos and
//! atan2 are expressed through atan with cancellation-free arguments.

use crate::consts::{HALF_PI, PI, QUARTER_PI, TAN_3PI_8, TAN_PI_8};
use crate::expansion::{evaluate_backward, Fraction};
use crate::policy::ATAN;
use crate::primitive::{abs, copysign, signbit, sqrt};

/// Arctangent, in `[−π/2, π/2]`.
///
/// # Example
///
/// ```
/// use constmath::trig::atan;
///
/// const A: f64 = atan(1.0);
/// assert!((A - core::f64::consts::FRAC_PI_4).abs() < 1e-16);
/// ```
pub const fn atan(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    let ax = abs(x);
    let r = if ax > TAN_3PI_8 {
        HALF_PI - kernel(1.0 / ax)
    } else if ax > TAN_PI_8 {
        QUARTER_PI + kernel((ax - 1.0) / (ax + 1.0))
    } else {
        kernel(ax)
    };
    copysign(r, x)
}

/// atan t for |t| ≤ tan(π/8).
const fn kernel(t: f64) -> f64 {
    if t == 0.0 {
        return t;
    }
    t / evaluate_backward(&Fraction::Atan { x2: t * t }, ATAN)
}

/// Arcsine, in `[−π/2, π/2]`. NaN for |x| > 1.
pub const fn asin(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    let ax = abs(x);
    if ax > 1.0 {
        return f64::NAN;
    }
    if ax == 1.0 {
        return copysign(HALF_PI, x);
    }
    // (1 − x)(1 + x) keeps full precision near |x| = 1
    atan(x / sqrt((1.0 - x) * (1.0 + x)))
}

/// Arccosine, in `[0, π]`. NaN for |x| > 1.
pub const fn acos(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if abs(x) > 1.0 {
        return f64::NAN;
    }
    if x == -1.0 {
        return PI;
    }
    2.0 * atan(sqrt((1.0 - x) / (1.0 + x)))
}

/// Four-quadrant arctangent of `y/x`, in `[−π, π]`.
///
/// Follows IEEE conventions for zeros and infinities:
/// `atan2(±0, −0) = ±π`, `atan2(±0, +0) = ±0`.
pub const fn atan2(y: f64, x: f64) -> f64 {
    if y.is_nan() || x.is_nan() {
        return f64::NAN;
    }
    if x.is_infinite() {
        let angle = if y.is_infinite() {
            if x > 0.0 {
                QUARTER_PI
            } else {
                3.0 * QUARTER_PI
            }
        } else if x > 0.0 {
            0.0
        } else {
            PI
        };
        return copysign(angle, y);
    }
    if y.is_infinite() {
        return copysign(HALF_PI, y);
    }
    if x == 0.0 {
        if y != 0.0 {
            return copysign(HALF_PI, y);
        }
        return if signbit(x) { copysign(PI, y) } else { y };
    }
    let a = atan(y / x);
    if x > 0.0 {
        a
    } else {
        a + copysign(PI, y)
    }
}
