//! Classification predicates.

/// `true` if `x` is NaN.
#[inline]
pub const fn is_nan(x: f64) -> bool {
    x.is_nan()
}

/// `true` if `x` is positive or negative infinity.
#[inline]
pub const fn is_inf(x: f64) -> bool {
    x.is_infinite()
}

/// `true` if `x` is neither NaN nor infinite.
#[inline]
pub const fn is_finite(x: f64) -> bool {
    x.is_finite()
}

/// `true` if `n` is odd. Correct for negative `n`.
#[inline]
pub const fn is_odd(n: i64) -> bool {
    n & 1 == 1
}

/// `true` if `n` is even.
#[inline]
pub const fn is_even(n: i64) -> bool {
    !is_odd(n)
}
