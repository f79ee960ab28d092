//! `const` Newton/bisection over the crate's increasing forward functions.

use crate::consts::FRAC_2_SQRT_PI;
use crate::policy::Policy;
use crate::primitive::{abs, exp, log, log1p};
use crate::special::{erf, incomplete_beta, incomplete_gamma};

/// Increasing function to invert, with the constants its derivative needs.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Monotone {
    /// erf(x).
    Erf,
    /// P(a, x) in x.
    LowerGamma { a: f64, lgamma_a: f64 },
    /// I_x(a, b) in x.
    Beta { a: f64, b: f64, lbeta_ab: f64 },
}

impl Monotone {
    pub(crate) const fn value(&self, x: f64) -> f64 {
        match *self {
            Monotone::Erf => erf(x),
            Monotone::LowerGamma { a, .. } => incomplete_gamma(a, x),
            Monotone::Beta { a, b, .. } => incomplete_beta(a, b, x),
        }
    }

    /// Derivative; zero where it is singular so that the caller bisects.
    pub(crate) const fn slope(&self, x: f64) -> f64 {
        match *self {
            Monotone::Erf => FRAC_2_SQRT_PI * exp(-x * x),
            Monotone::LowerGamma { a, lgamma_a } => {
                if x <= 0.0 {
                    return 0.0;
                }
                exp((a - 1.0) * log(x) - x - lgamma_a)
            }
            Monotone::Beta { a, b, lbeta_ab } => {
                if x <= 0.0 || x >= 1.0 {
                    return 0.0;
                }
                exp((a - 1.0) * log(x) + (b - 1.0) * log1p(-x) - lbeta_ab)
            }
        }
    }
}

#[derive(Clone, Copy)]
struct Search {
    f: Monotone,
    target: f64,
    x: f64,
    lo: f64,
    hi: f64,
    /// Residuals at `lo` and `hi`.
    lo_err: f64,
    hi_err: f64,
    tol: f64,
    done: bool,
}

const fn search_step(s: Search) -> Search {
    let err = s.f.value(s.x) - s.target;
    if err == 0.0 || err.is_nan() || abs(err) <= s.tol * abs(s.target) {
        return Search { done: true, ..s };
    }
    let s = if err > 0.0 {
        Search { hi: s.x, hi_err: err, ..s }
    } else {
        Search { lo: s.x, lo_err: err, ..s }
    };
    let slope = s.f.slope(s.x);
    let newton = s.x - err / slope;
    if slope > f64::MIN_POSITIVE && newton > s.lo && newton < s.hi {
        let done = abs(newton - s.x) <= f64::EPSILON * abs(newton);
        return Search { x: newton, done, ..s };
    }
    let mid = midpoint(s.lo, s.hi);
    if mid <= s.lo || mid >= s.hi {
        // adjacent floats: keep the endpoint with the smaller residual
        let x = if abs(s.lo_err) <= abs(s.hi_err) { s.lo } else { s.hi };
        return Search { x, done: true, ..s };
    }
    Search { x: mid, ..s }
}

iterate! {
    fn run_search(Search) => search_step;
}

/// Bisection point of `[lo, hi]`. For a non-negative bracket this halves
/// the bit patterns, so a bracket spanning many binades shrinks to adjacent
/// floats in at most 64 steps.
pub(crate) const fn midpoint(lo: f64, hi: f64) -> f64 {
    if lo >= 0.0 {
        f64::from_bits((abs(lo).to_bits() + hi.to_bits()) / 2)
    } else {
        0.5 * (lo + hi)
    }
}

/// Solve `f(x) = target` on `[lo, hi]` starting from `guess`.
///
/// Each step shrinks the bracket by the sign of the residual, then takes a
/// Newton step if the slope is usable and the step lands strictly inside the
/// bracket, or bisects otherwise. A guess outside the open bracket (or NaN)
/// starts from the bisection point. Stops when the residual is within
/// `policy.tol` of `target`, when a Newton step moves less than an ulp, when
/// the bracket has closed to adjacent floats, or after `policy.max_depth`
/// steps.
pub(crate) const fn invert(f: &Monotone, target: f64, guess: f64, lo: f64, hi: f64, policy: Policy) -> f64 {
    let x = if guess > lo && guess < hi { guess } else { midpoint(lo, hi) };
    let start = Search {
        f: *f,
        target,
        x,
        lo,
        hi,
        lo_err: f.value(lo) - target,
        hi_err: f.value(hi) - target,
        tol: policy.tol,
        done: false,
    };
    run_search(start, policy.max_depth).x
}
