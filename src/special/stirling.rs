//! Stirling-series helpers for the large-parameter prefactors.
//!
//! For large shapes `x^a e^{−x} / Γ(a)` and `x^a (1−x)^b / B(a, b)` lose
//! every digit to cancellation when formed from `lgamma`. Writing Γ(a) as
//! `√(2π/a)·a^a·e^{−a}·e^{μ(a)}` leaves only `log1pmx` of the relative
//! deviation from the mode, which is small exactly where the functions are
//! not.

use crate::consts::PI;
use crate::primitive::{abs, exp, log1p, sqrt};

/// Smallest shape for which [`stirling_correction`] is accurate to an ulp.
pub(crate) const STIRLING_MIN: f64 = 10.0;

/// Depth of the nested `atanh` tail in [`log1pmx`].
const LOG1PMX_DEPTH: u32 = 18;

/// μ(a) = ln Γ(a) − (a − ½) ln a + a − ln √(2π), for a ≥ 10.
pub(crate) const fn stirling_correction(a: f64) -> f64 {
    let r = 1.0 / (a * a);
    (1.0 / 12.0
        - r * (1.0 / 360.0
            - r * (1.0 / 1260.0
                - r * (1.0 / 1680.0 - r * (1.0 / 1188.0 - r * (691.0 / 360360.0 - r / 156.0))))))
        / a
}

/// ln(1 + x) − x, accurate near zero.
pub(crate) const fn log1pmx(x: f64) -> f64 {
    if abs(x) > 0.5 {
        return log1p(x) - x;
    }
    // ln(1 + x) = 2·atanh(s) with s = x / (2 + x), and 2s − x = −x·s
    let s = x / (2.0 + x);
    -x * s + 2.0 * s * s * s * nested(s * s, 0)
}

/// `1/(2k+3) + s²·(1/(2k+5) + …)`
const fn nested(s2: f64, k: u32) -> f64 {
    let inv = 1.0 / (2 * k + 3) as f64;
    if k >= LOG1PMX_DEPTH {
        inv
    } else {
        inv + s2 * nested(s2, k + 1)
    }
}

/// x^a e^{−x} / Γ(a) for a ≥ 10.
pub(crate) const fn gamma_prefactor(a: f64, x: f64) -> f64 {
    sqrt(a / (2.0 * PI)) * exp(a * log1pmx((x - a) / a) - stirling_correction(a))
}

/// x^a (1−x)^b / B(a, b) for a, b ≥ 10.
///
/// With `x0 = a/(a+b)` and `y0 = b/(a+b)`, the powers are taken relative to
/// the mode so both exponents stay moderate.
pub(crate) const fn beta_prefactor(a: f64, b: f64, x: f64) -> f64 {
    let c = a + b;
    let x0 = a / c;
    let y0 = b / c;
    let delta = x - x0;
    let e = a * log1pmx(delta / x0) + b * log1pmx(-delta / y0);
    let mu = stirling_correction(c) - stirling_correction(a) - stirling_correction(b);
    sqrt(a * b / (2.0 * PI * c)) * exp(e + mu)
}
