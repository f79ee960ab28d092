use crate::consts::LN_2;
use crate::primitive::{abs, copysign, exp, expm1};

/// Above this |x|, e^{−|x|} no longer affects sinh, cosh or tanh.
const LARGE: f64 = 22.0;

/// Largest |x| for which e^|x| itself is finite.
const EXP_OVERFLOW: f64 = 709.782712893384;

/// e^|x| / 2 without overflowing before the result does.
const fn half_exp(ax: f64) -> f64 {
    if ax < EXP_OVERFLOW {
        0.5 * exp(ax)
    } else {
        exp(ax - LN_2)
    }
}

/// Hyperbolic sine.
pub const fn sinh(x: f64) -> f64 {
    if x.is_nan() || x == 0.0 {
        return x;
    }
    let ax = abs(x);
    let r = if ax < LARGE {
        // (e − e^{−1})/2 with e = e^x − 1 written to avoid cancellation
        let e = expm1(ax);
        0.5 * (e + e / (e + 1.0))
    } else {
        half_exp(ax)
    };
    copysign(r, x)
}

/// Hyperbolic cosine.
pub const fn cosh(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    let ax = abs(x);
    if ax < LARGE {
        let e = exp(ax);
        0.5 * (e + 1.0 / e)
    } else {
        half_exp(ax)
    }
}

/// Hyperbolic tangent.
pub const fn tanh(x: f64) -> f64 {
    if x.is_nan() || x == 0.0 {
        return x;
    }
    let ax = abs(x);
    let r = if ax > LARGE {
        1.0
    } else {
        let e = expm1(2.0 * ax);
        e / (e + 2.0)
    };
    copysign(r, x)
}
