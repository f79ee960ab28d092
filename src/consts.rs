//! Numeric constants.
//!
//! [`PI`] and [`HALF_PI`] are public; the remaining values are split or
//! derived constants used by argument reduction and the special functions.

/// Archimedes' constant π.
pub const PI: f64 = core::f64::consts::PI;

/// π/2.
pub const HALF_PI: f64 = core::f64::consts::FRAC_PI_2;

pub(crate) const QUARTER_PI: f64 = core::f64::consts::FRAC_PI_4;
pub(crate) const FRAC_2_PI: f64 = core::f64::consts::FRAC_2_PI;

pub(crate) const LN_2: f64 = core::f64::consts::LN_2;
pub(crate) const LOG2_E: f64 = core::f64::consts::LOG2_E;
pub(crate) const LOG10_E: f64 = core::f64::consts::LOG10_E;
pub(crate) const SQRT_2: f64 = core::f64::consts::SQRT_2;

/// ln 2 split so that `n * LN_2_HI` is exact for |n| < 2^20.
pub(crate) const LN_2_HI: f64 = 6.93147180369123816490e-01;
pub(crate) const LN_2_LO: f64 = 1.90821492927058770002e-10;

/// π/2 in three parts, each with enough trailing zeros that `n * PIO2_k` is
/// exact for |n| < 2^20.
pub(crate) const PIO2_1: f64 = 1.57079632673412561417e+00;
pub(crate) const PIO2_2: f64 = 6.07710050630396597660e-11;
pub(crate) const PIO2_3: f64 = 2.02226624871116645580e-21;

/// tan(π/8) and tan(3π/8), the atan reduction breakpoints.
pub(crate) const TAN_PI_8: f64 = 0.41421356237309503;
pub(crate) const TAN_3PI_8: f64 = 2.414213562373095;

pub(crate) const SQRT_PI: f64 = 1.7724538509055160273;
pub(crate) const FRAC_2_SQRT_PI: f64 = core::f64::consts::FRAC_2_SQRT_PI;
pub(crate) const LN_PI: f64 = 1.1447298858494001741;
pub(crate) const SQRT_2PI: f64 = 2.5066282746310005024;
pub(crate) const LN_SQRT_2PI: f64 = 0.91893853320467274178;

/// 2^54, used to lift subnormals into the normal range.
pub(crate) const TWO_54: f64 = 18014398509481984.0;

/// 2^52: every f64 of at least this magnitude is an integer.
pub(crate) const TWO_52: f64 = 4503599627370496.0;
