//! Tangent.

use super::sincos::{kernel_cos, kernel_sin, reduce};

/// Tangent of `x` radians, `sin/cos` on the reduced argument.
///
/// Near odd multiples of π/2 the quotient grows without bound, as with the
/// standard library. NaN for infinite or NaN `x`.
pub const fn tan(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    if x == 0.0 {
        return x;
    }
    let (quadrant, r) = reduce(x);
    let s = kernel_sin(r);
    let c = kernel_cos(r);
    if quadrant & 1 == 0 {
        s / c
    } else {
        -c / s
    }
}
