//! Error function and complementary error function.
//!
//! erf sums its positive-term Taylor series for |x| < 2.5 and takes the
//! complement of the Laplace continued fraction for erfc above that. erfc
//! evaluates the same fraction directly for x ≥ 1 so that its small values
//! keep full relative precision.

use crate::consts::{FRAC_2_SQRT_PI, SQRT_PI};
use crate::expansion::{evaluate_backward, lentz, or_nan, sum_series, Fraction, Series};
use crate::policy::{ERFC_LENTZ, ERFC_TAIL, ERF_SERIES};
use crate::primitive::{abs, copysign, exp};

/// Regime switch between the erf series and the erfc fraction.
const SERIES_LIMIT: f64 = 2.5;

/// erf(x) rounds to ±1 beyond this.
const SATURATION: f64 = 6.0;

/// erfc(x) underflows to zero beyond this.
const ERFC_UNDERFLOW: f64 = 27.3;

/// Error function erf(x).
///
/// erf(x) = (2/√π) ∫₀ˣ e^{−t²} dt
///
/// # Example
///
/// ```
/// use constmath::special::erf;
///
/// const E: f64 = erf(1.2);
/// assert!((E - 0.9103139782296354).abs() < 1e-15);
/// assert_eq!(erf(0.0), 0.0);
/// assert_eq!(erf(-7.0), -1.0);
/// ```
pub const fn erf(x: f64) -> f64 {
    if x.is_nan() || x == 0.0 {
        return x;
    }
    let ax = abs(x);
    let r = if ax >= SATURATION {
        1.0
    } else if ax < SERIES_LIMIT {
        // e^{−x²} · (2/√π) · Σ 2^k x^{2k+1} / (2k+1)!!
        let x2 = ax * ax;
        FRAC_2_SQRT_PI * exp(-x2) * or_nan(sum_series(&Series::Erf { x2 }, ax, ERF_SERIES))
    } else {
        1.0 - exp(-ax * ax) / SQRT_PI / evaluate_backward(&Fraction::Erfc { x: ax }, ERFC_TAIL)
    };
    copysign(r, x)
}

/// Complementary error function erfc(x) = 1 − erf(x).
///
/// # Example
///
/// ```
/// use constmath::special::erfc;
///
/// assert_eq!(erfc(0.0), 1.0);
/// // erfc(10) ≈ 2.088e-45: far below what 1 − erf(10) can represent
/// assert!((erfc(10.0) / 2.088487583762545e-45 - 1.0).abs() < 1e-13);
/// ```
pub const fn erfc(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x < 0.0 {
        return 2.0 - erfc(-x);
    }
    if x < 1.0 {
        return 1.0 - erf(x);
    }
    if x > ERFC_UNDERFLOW {
        return 0.0;
    }
    exp(-x * x) / SQRT_PI / or_nan(lentz(&Fraction::Erfc { x }, ERFC_LENTZ))
}
