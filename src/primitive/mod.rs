//! Primitive evaluators.
//!
//! Closed-form or minimally recursive building blocks that everything else
//! in the crate is assembled from. Every function is a `const fn` over
//! `f64` and can be evaluated in `const` items as well as at runtime.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`abs`], [`sgn`], [`signbit`], [`copysign`] | Sign handling (bit-exact) |
//! | [`min`], [`max`] | NaN-ignoring minimum / maximum |
//! | [`trunc`], [`floor`], [`ceil`], [`round`], [`fmod`] | Rounding, remainder |
//! | [`sqrt`], [`inv_sqrt`], [`hypot`] | Newton square root and derived |
//! | [`exp`], [`expm1`] | Exponential by ln2 reduction + nested series |
//! | [`log`], [`log1p`], [`log2`], [`log10`] | Logarithms by mantissa reduction |
//! | [`pow`], [`powi`] | Powers (squaring for integral exponents) |
//! | [`gcd`], [`lcm`] | Integer helpers |
//! | [`is_nan`], [`is_inf`], [`is_finite`], [`is_odd`], [`is_even`] | Classification |
//!
//! # Example
//!
//! ```
//! use constmath::primitive::{exp, log, sqrt};
//!
//! const X: f64 = log(exp(2.0));
//! assert!((X - 2.0).abs() < 1e-15);
//! assert!(sqrt(-4.0).is_nan());
//! ```

mod abs;
mod classify;
mod exp_fn;
mod int;
mod log_fn;
mod pow_fn;
mod round;
mod sqrt_fn;

#[cfg(test)]
mod tests;

pub use abs::{abs, copysign, max, min, sgn, signbit};
pub use classify::{is_even, is_finite, is_inf, is_nan, is_odd};
pub use exp_fn::{exp, expm1};
pub use int::{gcd, lcm};
pub use log_fn::{log, log10, log1p, log2};
pub use pow_fn::{pow, powi};
pub use round::{ceil, floor, fmod, round, trunc};
pub use sqrt_fn::{hypot, inv_sqrt, sqrt};

pub(crate) use round::is_integral;
