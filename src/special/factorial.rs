//! Factorials and binomial coefficients.
//!
//! The float functions saturate to +∞ on overflow. The `checked_` variants
//! compute exactly in `u64` and report overflow as an error.

use crate::policy::BINOMIAL;
use crate::primitive::{exp, floor, is_integral, min};
use super::gamma_fn::{lgamma, tgamma};
use super::SpecialError;

/// Factorial lookup table for small non-negative integers: FACTORIAL[n] = n!
/// Valid for n = 0..=20 (20! < 2^64; every entry is exact in f64).
pub(crate) const FACTORIAL: [f64; 21] = [
    1.0,
    1.0,
    2.0,
    6.0,
    24.0,
    120.0,
    720.0,
    5040.0,
    40320.0,
    362880.0,
    3628800.0,
    39916800.0,
    479001600.0,
    6227020800.0,
    87178291200.0,
    1307674368000.0,
    20922789888000.0,
    355687428096000.0,
    6402373705728000.0,
    121645100408832000.0,
    2432902008176640000.0,
];

/// Largest n with finite n! in f64.
const MAX_FACTORIAL: f64 = 170.0;

/// Factorial n!.
///
/// Integral `n` uses a table up to 20! and a pairwise product of the
/// remaining factors beyond; the result is +∞ for n > 170. Non-integral `n` gives Γ(n + 1). Negative
/// integers give NaN.
///
/// # Example
///
/// ```
/// use constmath::special::factorial;
///
/// assert_eq!(factorial(5.0), 120.0);
/// assert!(factorial(171.0).is_infinite());
/// // 0.5! = Γ(1.5) = √π/2
/// assert!((factorial(0.5) - 0.886226925452758).abs() < 1e-14);
/// ```
pub const fn factorial(n: f64) -> f64 {
    if n.is_nan() {
        return n;
    }
    if !is_integral(n) {
        return tgamma(n + 1.0);
    }
    if n < 0.0 {
        return f64::NAN;
    }
    if n > MAX_FACTORIAL {
        return f64::INFINITY;
    }
    if n < FACTORIAL.len() as f64 {
        return FACTORIAL[n as usize];
    }
    FACTORIAL[FACTORIAL.len() - 1] * range_product(FACTORIAL.len() as f64, n)
}

/// k · (k+1) · … · n for integral `k ≤ n`, split in halves.
const fn range_product(k: f64, n: f64) -> f64 {
    if k == n {
        k
    } else {
        let mid = floor(0.5 * (k + n));
        range_product(k, mid) * range_product(mid + 1.0, n)
    }
}

/// Exact factorial n! in `u64`.
///
/// # Errors
///
/// [`SpecialError::Overflow`] for n > 20.
///
/// # Example
///
/// ```
/// use constmath::special::{checked_factorial, SpecialError};
///
/// assert_eq!(checked_factorial(20), Ok(2_432_902_008_176_640_000));
/// assert_eq!(checked_factorial(21), Err(SpecialError::Overflow));
/// ```
pub const fn checked_factorial(n: u64) -> Result<u64, SpecialError> {
    checked_product(1, n, 1)
}

const fn checked_product(k: u64, n: u64, acc: u64) -> Result<u64, SpecialError> {
    if k > n {
        return Ok(acc);
    }
    match acc.checked_mul(k) {
        Some(next) => checked_product(k + 1, n, next),
        None => Err(SpecialError::Overflow),
    }
}

/// Binomial coefficient C(n, k).
///
/// For integral `0 ≤ k ≤ n` the multiplicative recurrence
/// `C_i = C_{i−1}·(n − k + i)/i` over `k ← min(k, n − k)` is exact while the
/// result stays below 2^53; spans wider than the `BINOMIAL` step budget use
/// `exp(log_binomial_coef)`. Integral `k` outside `[0, n]` gives 0, a
/// negative integral `n` gives NaN, and non-integral arguments use the gamma
/// function.
///
/// # Example
///
/// ```
/// use constmath::special::binomial_coef;
///
/// assert_eq!(binomial_coef(5.0, 2.0), 10.0);
/// assert_eq!(binomial_coef(5.0, 7.0), 0.0);
/// ```
pub const fn binomial_coef(n: f64, k: f64) -> f64 {
    if n.is_nan() || k.is_nan() {
        return f64::NAN;
    }
    if !is_integral(n) || !is_integral(k) {
        return tgamma(n + 1.0) / (tgamma(k + 1.0) * tgamma(n - k + 1.0));
    }
    if n < 0.0 {
        return f64::NAN;
    }
    if k < 0.0 || k > n {
        return 0.0;
    }
    let k = min(k, n - k);
    if k > BINOMIAL.max_depth as f64 {
        return exp(log_binomial_coef(n, k));
    }
    let start = Binomial { base: n - k, i: 1.0, k, acc: 1.0, done: k == 0.0 };
    run_binomial(start, k as u32).acc
}

/// `acc = C(base + i − 1, i − 1)`, advanced one `i` per step.
#[derive(Clone, Copy)]
struct Binomial {
    base: f64,
    i: f64,
    k: f64,
    acc: f64,
    done: bool,
}

const fn binomial_step(s: Binomial) -> Binomial {
    let acc = s.acc * (s.base + s.i) / s.i;
    Binomial { i: s.i + 1.0, acc, done: s.i >= s.k, ..s }
}

iterate! {
    fn run_binomial(Binomial) => binomial_step;
}

/// Natural logarithm of the binomial coefficient, ln C(n, k).
///
/// `−∞` for integral `k` outside `[0, n]`.
pub const fn log_binomial_coef(n: f64, k: f64) -> f64 {
    if n.is_nan() || k.is_nan() {
        return f64::NAN;
    }
    if is_integral(n) && is_integral(k) {
        if n < 0.0 {
            return f64::NAN;
        }
        if k < 0.0 || k > n {
            return f64::NEG_INFINITY;
        }
        if k == 0.0 || k == n {
            return 0.0;
        }
    }
    lgamma(n + 1.0) - lgamma(k + 1.0) - lgamma(n - k + 1.0)
}

/// Exact binomial coefficient C(n, k) in `u64`; 0 for k > n.
///
/// # Errors
///
/// [`SpecialError::Overflow`] when C(n, k) exceeds `u64::MAX`.
///
/// # Example
///
/// ```
/// use constmath::special::{checked_binomial_coef, SpecialError};
///
/// assert_eq!(checked_binomial_coef(5, 2), Ok(10));
/// assert_eq!(checked_binomial_coef(67, 33), Ok(14_226_520_737_620_288_370));
/// assert_eq!(checked_binomial_coef(68, 34), Err(SpecialError::Overflow));
/// ```
pub const fn checked_binomial_coef(n: u64, k: u64) -> Result<u64, SpecialError> {
    if k > n {
        return Ok(0);
    }
    let k = if k > n - k { n - k } else { k };
    checked_binomial_step((n - k) as u128, 1, k as u128, 1)
}

// C_i = C(base + i, i) grows with i, so overflow of any step means the
// result overflows too. C_{i−1}·(base + i) fits u128 since both are < 2^64.
const fn checked_binomial_step(base: u128, i: u128, k: u128, acc: u128) -> Result<u64, SpecialError> {
    if i > k {
        return Ok(acc as u64);
    }
    let next = acc * (base + i) / i;
    if next > u64::MAX as u128 {
        return Err(SpecialError::Overflow);
    }
    checked_binomial_step(base, i + 1, k, next)
}
