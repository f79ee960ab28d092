//! Recursive expansion engine.
//!
//! Power series and continued fractions evaluated by step-bounded
//! recursion. Each step maps an immutable state (index, partial sum or
//! Lentz convergents, current term) to the next one, and the driver halves
//! the step budget at every level, so a policy of `n` steps nests only
//! about log2 n calls deep. The same code runs in `const` contexts and at
//! runtime.
//!
//! The `const` evaluators that stop on a tolerance return `None` when the
//! budget runs out first; callers turn that into NaN rather than returning
//! a truncated value.
//!
//! The crate's own families go through the `const` evaluators over the
//! closed recurrences in `recurrence`. [`series`] and [`continued_fraction`]
//! are the same algorithms over caller-supplied closures, usable at runtime
//! with any [`FloatScalar`].
//!
//! # Example
//!
//! ```
//! use constmath::expansion::{continued_fraction, series};
//! use constmath::policy::Policy;
//!
//! let policy = Policy::new(60, 1e-16);
//!
//! // e = Σ 1/k!
//! let e = series(1.0_f64, |k| 1.0 / k as f64, &policy);
//! assert!((e - core::f64::consts::E).abs() < 1e-15);
//!
//! // √2 = 1 + 1/(2 + 1/(2 + …))
//! let r = continued_fraction(|n| (1.0_f64, if n == 0 { 1.0 } else { 2.0 }), &policy);
//! assert!((r - core::f64::consts::SQRT_2).abs() < 1e-15);
//! ```

mod recurrence;

#[cfg(test)]
mod tests;

pub(crate) use recurrence::{Fraction, Series};

use crate::policy::Policy;
use crate::primitive::abs;
use crate::FloatScalar;

/// Lentz guard against zero denominators.
const TINY: f64 = 1e-30;

// ---------------------------------------------------------------------------
// const engine
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
struct SeriesState {
    series: Series,
    k: u32,
    term: f64,
    sum: f64,
    tol: f64,
    done: bool,
}

const fn series_step(s: SeriesState) -> SeriesState {
    let term = s.term * s.series.ratio(s.k);
    let sum = s.sum + term;
    SeriesState { k: s.k + 1, term, sum, done: abs(term) <= s.tol * abs(sum), ..s }
}

iterate! {
    fn run_series(SeriesState) => series_step;
}

/// Sum a series from its first term, forward, until the last term is below
/// `policy.tol` relative to the sum. `None` if `policy.max_depth` terms do
/// not get there.
pub(crate) const fn sum_series(series: &Series, first: f64, policy: Policy) -> Option<f64> {
    let start = SeriesState { series: *series, k: 1, term: first, sum: first, tol: policy.tol, done: false };
    let end = run_series(start, policy.max_depth);
    if end.done {
        Some(end.sum)
    } else {
        None
    }
}

#[derive(Clone, Copy)]
struct LentzState {
    fraction: Fraction,
    n: u32,
    f: f64,
    c: f64,
    d: f64,
    tol: f64,
    done: bool,
}

const fn lentz_step(s: LentzState) -> LentzState {
    let (a, b) = s.fraction.term(s.n);
    let d = 1.0 / guard(b + a * s.d);
    let c = guard(b + a / s.c);
    let delta = c * d;
    LentzState { n: s.n + 1, f: s.f * delta, c, d, done: abs(delta - 1.0) <= s.tol, ..s }
}

iterate! {
    fn run_lentz(LentzState) => lentz_step;
}

/// Evaluate a continued fraction top-down with the modified Lentz method
/// (Thompson & Barnett), stopping when a convergent ratio is within
/// `policy.tol` of one. `None` if that takes more than `policy.max_depth`
/// levels.
pub(crate) const fn lentz(fraction: &Fraction, policy: Policy) -> Option<f64> {
    let f = guard(fraction.term(0).1);
    let start = LentzState { fraction: *fraction, n: 1, f, c: f, d: 0.0, tol: policy.tol, done: false };
    let end = run_lentz(start, policy.max_depth);
    if end.done {
        Some(end.f)
    } else {
        None
    }
}

#[derive(Clone, Copy)]
struct TailState {
    fraction: Fraction,
    n: u32,
    value: f64,
    done: bool,
}

/// `b_{n−1} + a_n / value`, one level further out.
const fn tail_step(s: TailState) -> TailState {
    let (a, _) = s.fraction.term(s.n);
    let (_, b) = s.fraction.term(s.n - 1);
    TailState { n: s.n - 1, value: b + a / s.value, done: s.n == 1, ..s }
}

iterate! {
    fn run_tail(TailState) => tail_step;
}

/// Evaluate a continued fraction truncated at exactly `policy.max_depth`
/// levels, innermost level first.
pub(crate) const fn evaluate_backward(fraction: &Fraction, policy: Policy) -> f64 {
    let depth = policy.max_depth;
    let start = TailState { fraction: *fraction, n: depth, value: fraction.term(depth).1, done: depth == 0 };
    run_tail(start, depth).value
}

/// NaN for an expansion that did not converge.
#[inline]
pub(crate) const fn or_nan(value: Option<f64>) -> f64 {
    match value {
        Some(v) => v,
        None => f64::NAN,
    }
}

#[inline]
const fn guard(v: f64) -> f64 {
    if abs(v) < TINY {
        TINY
    } else {
        v
    }
}

// ---------------------------------------------------------------------------
// runtime engine
// ---------------------------------------------------------------------------

/// Apply `step` to `state` at most `steps` times, stopping once `done`
/// holds. Same halving scheme as the const driver.
fn drive<S: Copy>(state: S, steps: u32, step: &mut impl FnMut(S) -> S, done: fn(&S) -> bool) -> S {
    if done(&state) || steps == 0 {
        state
    } else if steps == 1 {
        step(state)
    } else {
        let half = steps / 2;
        let mid = drive(state, half, step, done);
        drive(mid, steps - half, step, done)
    }
}

/// Sum `first + t_1 + t_2 + …` where `t_k = t_{k-1} · ratio(k)`.
///
/// Stops once `|t_k| ≤ tol·|sum|` or after `max_depth` terms.
pub fn series<T: FloatScalar>(first: T, mut ratio: impl FnMut(u32) -> T, policy: &Policy) -> T {
    let tol = T::from_eval(policy.tol);
    // (k, term, sum, done)
    let mut step = |(k, term, sum, _): (u32, T, T, bool)| {
        let next = term * ratio(k);
        let total = sum + next;
        (k + 1, next, total, next.abs() <= tol * total.abs())
    };
    drive((1, first, first, false), policy.max_depth, &mut step, |s| s.3).2
}

/// Evaluate `b0 + a1/(b1 + a2/(b2 + …))` by the modified Lentz method.
///
/// `coeffs(n)` returns `(a_n, b_n)`; only `b_0` is read from `coeffs(0)`.
pub fn continued_fraction<T: FloatScalar>(
    mut coeffs: impl FnMut(u32) -> (T, T),
    policy: &Policy,
) -> T {
    let tiny = T::from_eval(TINY);
    let tol = T::from_eval(policy.tol);
    let guard = |v: T| if v.abs() < tiny { tiny } else { v };
    let f = guard(coeffs(0).1);
    // (n, f, c, d, done)
    let mut step = |(n, f, c, d, _): (u32, T, T, T, bool)| {
        let (a, b) = coeffs(n);
        let d = T::one() / guard(b + a * d);
        let c = guard(b + a / c);
        let delta = c * d;
        (n + 1, f * delta, c, d, (delta - T::one()).abs() <= tol)
    };
    drive((1, f, f, T::zero(), false), policy.max_depth, &mut step, |s| s.4).1
}
