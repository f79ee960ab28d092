use crate::consts::LN_2;
use crate::primitive::{abs, copysign, log, log1p, sqrt};

/// Beyond 2^28 the `1/x` corrections vanish next to `ln 2x`.
const HUGE: f64 = 268435456.0;

/// Inverse hyperbolic sine.
pub const fn asinh(x: f64) -> f64 {
    if x.is_nan() || x == 0.0 || x.is_infinite() {
        return x;
    }
    let ax = abs(x);
    let r = if ax > HUGE {
        log(ax) + LN_2
    } else {
        // ln(ax + √(1+ax²)) = log1p(ax + ax²/(1 + √(1+ax²)))
        let x2 = ax * ax;
        log1p(ax + x2 / (1.0 + sqrt(1.0 + x2)))
    };
    copysign(r, x)
}

/// Inverse hyperbolic cosine. NaN for x < 1.
pub const fn acosh(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x < 1.0 {
        return f64::NAN;
    }
    if x.is_infinite() {
        return x;
    }
    if x > HUGE {
        return log(x) + LN_2;
    }
    let t = x - 1.0;
    log1p(t + sqrt(2.0 * t + t * t))
}

/// Inverse hyperbolic tangent. NaN for |x| > 1, ±∞ at ±1.
pub const fn atanh(x: f64) -> f64 {
    if x.is_nan() || x == 0.0 {
        return x;
    }
    let ax = abs(x);
    if ax > 1.0 {
        return f64::NAN;
    }
    if ax == 1.0 {
        return copysign(f64::INFINITY, x);
    }
    copysign(0.5 * log1p(2.0 * ax / (1.0 - ax)), x)
}
