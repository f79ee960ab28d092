//! Trigonometric functions and their inverses.
//!
//! | Function | Method |
//! |----------|--------|
//! | [`sin`], [`cos`] | π/2 reduction (three-part constant), Taylor series on [−π/4, π/4] |
//! | [`tan`] | sin/cos on the shared reduced argument |
//! | [`atan`] | reduction to |t| ≤ tan(π/8), Gauss continued fraction |
//! | [`asin`], [`acos`], [`atan2`] | via atan |
//!
//! All functions are `const fn` over `f64`; out-of-domain arguments give NaN.

mod inverse;
mod sincos;
mod tan_fn;


pub use inverse::{acos, asin, atan, atan2};
pub use sincos::{cos, sin};
pub use tan_fn::tan;
