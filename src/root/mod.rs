//! Root finding for inverting monotone functions.
//!
//! The inverse special functions ([`erf_inv`](crate::special::erf_inv),
//! [`incomplete_gamma_inv`](crate::special::incomplete_gamma_inv),
//! [`incomplete_beta_inv`](crate::special::incomplete_beta_inv)) use a
//! crate-internal `const` Newton/bisection hybrid over a closed set of
//! forward functions. [`newton_bisect`] is the same method over arbitrary
//! closures, for use at runtime.
//!
//! # Example
//!
//! ```
//! use constmath::root::{newton_bisect, RootSettings};
//!
//! // x with x³ = 10
//! let r = newton_bisect(
//!     |x: f64| x * x * x,
//!     |x| 3.0 * x * x,
//!     10.0,
//!     2.0,
//!     0.0,
//!     10.0,
//!     &RootSettings::default(),
//! )
//! .unwrap();
//! assert!((r.x - 10.0_f64.cbrt()).abs() < 1e-10);
//! ```

mod hybrid;
mod monotone;

#[cfg(test)]
mod tests;

pub use hybrid::newton_bisect;
pub(crate) use monotone::{invert, Monotone};

/// Settings for the runtime root finder.
#[derive(Debug, Clone, Copy)]
pub struct RootSettings<T> {
    /// Convergence tolerance on the bracket width and on the step size.
    pub x_tol: T,
    /// Convergence tolerance on the residual `|f(x) − target|`.
    pub f_tol: T,
    /// Maximum number of iterations.
    pub max_iter: usize,
}

impl Default for RootSettings<f64> {
    fn default() -> Self {
        Self {
            x_tol: 1e-12,
            f_tol: 1e-12,
            max_iter: 100,
        }
    }
}

impl Default for RootSettings<f32> {
    fn default() -> Self {
        Self {
            x_tol: 1e-6,
            f_tol: 1e-6,
            max_iter: 100,
        }
    }
}

/// Result of a scalar root-finding algorithm.
#[derive(Debug, Clone, Copy)]
pub struct RootResult<T> {
    /// Approximate solution.
    pub x: T,
    /// Residual at the solution: `f(x) − target`.
    pub fx: T,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Number of function evaluations.
    pub evals: usize,
}

/// Errors from the runtime root finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootError {
    /// `f(lo) − target` and `f(hi) − target` have the same sign.
    BracketInvalid,
    /// A function or derivative evaluation returned NaN or infinity.
    NotFinite,
    /// Maximum number of iterations exceeded.
    MaxIterations,
}

impl core::fmt::Display for RootError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RootError::BracketInvalid => write!(f, "bracket endpoints must have opposite signs"),
            RootError::NotFinite => write!(f, "computed value is NaN or infinity"),
            RootError::MaxIterations => write!(f, "maximum iterations exceeded"),
        }
    }
}

impl core::error::Error for RootError {}
