use crate::traits::FloatScalar;

use super::{RootError, RootResult, RootSettings};

/// Newton's method safeguarded by bisection.
///
/// Solves `f(x) = target` for `x` in `[lo, hi]`. The residual must change
/// sign over the bracket; `f` may be increasing or decreasing. Each
/// iteration shrinks the bracket around the root and takes the Newton step
/// `x − (f(x) − target) / f'(x)` when it stays strictly inside, bisecting
/// otherwise, so the method never leaves the bracket and converges even
/// where the derivative vanishes.
///
/// # Arguments
///
/// * `f` — forward function
/// * `df` — derivative of `f`
/// * `target` — value to solve for
/// * `x0` — initial guess; the bracket midpoint is used if it lies outside
/// * `lo`, `hi` — bracket endpoints
/// * `settings` — convergence tolerances and iteration limit
///
/// # Errors
///
/// Returns [`RootError::BracketInvalid`] if the residual has the same sign at
/// both ends, [`RootError::NotFinite`] if `f` returns NaN or infinity, and
/// [`RootError::MaxIterations`] if convergence is not achieved.
///
/// # Example
///
/// ```
/// use constmath::root::{newton_bisect, RootSettings};
/// use constmath::special::erf;
///
/// // erf⁻¹(0.5) by inverting erf
/// let r = newton_bisect(
///     |x: f64| erf(x),
///     |x| 2.0 / core::f64::consts::PI.sqrt() * (-x * x).exp(),
///     0.5,
///     0.0,
///     0.0,
///     3.0,
///     &RootSettings::default(),
/// )
/// .unwrap();
/// assert!((r.x - 0.4769362762044699).abs() < 1e-10);
/// ```
pub fn newton_bisect<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    mut df: impl FnMut(T) -> T,
    target: T,
    x0: T,
    lo: T,
    hi: T,
    settings: &RootSettings<T>,
) -> Result<RootResult<T>, RootError> {
    let (mut lo, mut hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let f_lo = f(lo) - target;
    let f_hi = f(hi) - target;
    let mut evals = 2usize;

    if !f_lo.is_finite() || !f_hi.is_finite() {
        #[cfg(feature = "tracing")]
        tracing::warn!(?lo, ?hi, "non-finite residual at bracket endpoint");
        return Err(RootError::NotFinite);
    }
    if f_lo == T::zero() {
        return Ok(RootResult { x: lo, fx: f_lo, iterations: 0, evals });
    }
    if f_hi == T::zero() {
        return Ok(RootResult { x: hi, fx: f_hi, iterations: 0, evals });
    }
    if (f_lo > T::zero()) == (f_hi > T::zero()) {
        return Err(RootError::BracketInvalid);
    }

    // true if the residual is negative at the low end
    let increasing = f_lo < T::zero();
    let two = T::one() + T::one();
    let mut x = if x0 > lo && x0 < hi { x0 } else { (lo + hi) / two };

    for iter in 0..settings.max_iter {
        let fx = f(x) - target;
        evals += 1;

        if !fx.is_finite() {
            #[cfg(feature = "tracing")]
            tracing::warn!(?x, iter, "non-finite residual");
            return Err(RootError::NotFinite);
        }
        if fx.abs() < settings.f_tol {
            return Ok(RootResult { x, fx, iterations: iter, evals });
        }

        if (fx < T::zero()) == increasing {
            lo = x;
        } else {
            hi = x;
        }

        let dfx = df(x);
        evals += 1;
        let step = fx / dfx;
        let x_new = if dfx.is_finite() && dfx.abs() > T::epsilon() && x - step > lo && x - step < hi {
            x - step
        } else {
            (lo + hi) / two
        };

        if (x_new - x).abs() < settings.x_tol || hi - lo < settings.x_tol {
            let fx = f(x_new) - target;
            evals += 1;
            return Ok(RootResult { x: x_new, fx, iterations: iter + 1, evals });
        }
        x = x_new;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(?lo, ?hi, max_iter = settings.max_iter, "root finder exhausted its iterations");
    Err(RootError::MaxIterations)
}
