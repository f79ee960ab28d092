//! Hyperbolic functions and their inverses.
//!
//! The direct functions are built on [`expm1`](crate::primitive::expm1) so
//! that small arguments keep full relative precision; the inverses are built
//! on [`log1p`](crate::primitive::log1p) for the same reason.
//!
//! # Example
//!
//! ```
//! use constmath::hyperbolic::{asinh, cosh, sinh, tanh};
//!
//! const S: f64 = sinh(1.0);
//! assert!((S - 1.0_f64.sinh()).abs() < 1e-15);
//! assert!((asinh(S) - 1.0).abs() < 1e-15);
//! assert_eq!(tanh(40.0), 1.0);
//! assert!(cosh(800.0).is_infinite());
//! ```

mod direct;
mod inverse;


pub use direct::{cosh, sinh, tanh};
pub use inverse::{acosh, asinh, atanh};
