//! # constmath
//!
//! Elementary, trigonometric, hyperbolic and special functions that can be
//! evaluated at compile time. no-std compatible, no heap allocation.
//!
//! ## Quick start
//!
//! ```
//! use constmath::special::incomplete_beta;
//! use constmath::trig::sin;
//!
//! // evaluated by the compiler
//! const S: f64 = sin(constmath::HALF_PI);
//! const I: f64 = incomplete_beta(2.0, 3.0, 0.4);
//! assert!((S - 1.0).abs() < 1e-16);
//! assert!((I - 0.5248).abs() < 1e-13);
//!
//! // generic entry points promote integers to f64 and keep f32 as f32
//! let e: f64 = constmath::exp(3);
//! let g: f32 = constmath::tgamma(4.5_f32);
//! assert!((e - 20.085536923187668).abs() < 1e-13);
//! assert!((g - 11.631728).abs() < 1e-5);
//! ```
//!
//! ## Modules
//!
//! - [`primitive`] — Absolute value, rounding, `sqrt` (Newton), `exp`/`log`
//!   (range reduction + fixed-depth series), `pow`, classification and
//!   integer `gcd`/`lcm`.
//!
//! - [`expansion`] — Step-bounded evaluators for power series and continued
//!   fractions. The `const` evaluators back every family below; the public
//!   runtime versions accept closures.
//!
//! - [`trig`] / [`hyperbolic`] — sin, cos, tan and their inverses (including
//!   `atan2`); sinh, cosh, tanh and their inverses.
//!
//! - [`special`] — Factorial and binomial coefficients, gamma / log-gamma /
//!   log multivariate gamma, beta, erf / erfc / erf⁻¹, regularized incomplete
//!   gamma and beta with inverses.
//!
//! - [`root`] — Newton/bisection hybrid. Used internally by the inverse
//!   special functions; [`root::newton_bisect`] is the public runtime form.
//!
//! - [`policy`] — Per-family recursion depth and tolerance.
//!
//! - [`traits`] — [`FloatScalar`] and the type promotion traits
//!   ([`Promote`], [`Promote2`], [`Promote3`]).
//!
//! Every function in `primitive`, `trig`, `hyperbolic` and `special` is a
//! `const fn` over `f64`. The crate root re-exports one generic function per
//! operation (`constmath::sin`, `constmath::incomplete_gamma`, …) that
//! accepts any integer or float type and returns the promoted type.
//!
//! Out-of-domain arguments return NaN rather than an error.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Links `std`; hardware float ops for the `Float` bound |
//! | `libm`    | baseline | Pure-Rust software float fallback for `num-traits`; always on for the dependency so `no_std` builds keep the `Float` bound |
//! | `tracing` | no       | Diagnostics from [`root::newton_bisect`] via `tracing` |

#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
mod iterate;

mod api;
mod consts;
pub mod expansion;
pub mod hyperbolic;
pub mod policy;
pub mod primitive;
pub mod root;
pub mod special;
pub mod traits;
pub mod trig;

pub use api::*;
pub use consts::{HALF_PI, PI};
pub use primitive::{gcd, lcm};
pub use special::{checked_binomial_coef, checked_factorial, SpecialError};
pub use traits::{Common, Common3, FloatScalar, Promote, Promote2, Promote3, Promoted, Widen};
