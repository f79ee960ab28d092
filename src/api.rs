//! Generic entry points.
//!
//! Each function promotes its arguments ([`Promote`]), evaluates the matching
//! `const fn` of the core in `f64` and narrows the result to the promoted
//! output type. Integral inputs therefore return `f64`, `f32` inputs return
//! `f32`, and mixed arguments return the wider of their promoted types.

use crate::traits::{Common, Common3, FloatScalar, Promote, Promote2, Promote3, Promoted};
use crate::{hyperbolic, primitive, special, trig};

#[inline]
fn eval<T: Promote>(x: T) -> f64 {
    x.promote().to_eval()
}

#[inline]
fn lift<R: FloatScalar>(v: f64) -> R {
    R::from_eval(v)
}

macro_rules! unary {
    ($($(#[$doc:meta])* $name:ident => $core:path;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<T: Promote>(x: T) -> Promoted<T> {
                lift($core(eval(x)))
            }
        )*
    };
}

macro_rules! binary {
    ($($(#[$doc:meta])* $name:ident($a:ident, $b:ident) => $core:path;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<A, B>($a: A, $b: B) -> Common<A, B>
            where
                A: Promote2<B>,
                B: Promote,
            {
                lift($core(eval($a), eval($b)))
            }
        )*
    };
}

macro_rules! ternary {
    ($($(#[$doc:meta])* $name:ident($a:ident, $b:ident, $c:ident) => $core:path;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<A, B, C>($a: A, $b: B, $c: C) -> Common3<A, B, C>
            where
                A: Promote3<B, C>,
                B: Promote,
                C: Promote,
            {
                lift($core(eval($a), eval($b), eval($c)))
            }
        )*
    };
}

// ---------------------------------------------------------------------------
// primitives
// ---------------------------------------------------------------------------

unary! {
    /// Absolute value.
    abs => primitive::abs;
    /// Sign: −1, 0 or +1 (NaN passes through).
    sgn => primitive::sgn;
    /// Round toward −∞.
    floor => primitive::floor;
    /// Round toward +∞.
    ceil => primitive::ceil;
    /// Round toward zero.
    trunc => primitive::trunc;
    /// Round to nearest, ties away from zero.
    round => primitive::round;
    /// Square root; NaN for negative arguments.
    ///
    /// ```
    /// assert_eq!(constmath::sqrt(16_u8), 4.0_f64);
    /// assert!(constmath::sqrt(-1.0_f32).is_nan());
    /// ```
    sqrt => primitive::sqrt;
    /// 1/√x.
    inv_sqrt => primitive::inv_sqrt;
    /// Exponential e^x.
    ///
    /// ```
    /// let e: f64 = constmath::exp(3);
    /// assert!((e - 20.085536923187668).abs() < 1e-13);
    /// let f: f32 = constmath::exp(1.0_f32);
    /// assert!((f - core::f32::consts::E).abs() < 1e-6);
    /// ```
    exp => primitive::exp;
    /// e^x − 1, accurate near zero.
    expm1 => primitive::expm1;
    /// Natural logarithm; NaN for negative arguments, −∞ at zero.
    log => primitive::log;
    /// ln(1 + x), accurate near zero.
    log1p => primitive::log1p;
    /// Base-2 logarithm.
    log2 => primitive::log2;
    /// Base-10 logarithm.
    log10 => primitive::log10;
}

/// `true` if the sign bit of the promoted value is set.
#[inline]
pub fn signbit<T: Promote>(x: T) -> bool {
    primitive::signbit(eval(x))
}

binary! {
    /// Magnitude of `x` with the sign of `y`.
    copysign(x, y) => primitive::copysign;
    /// Smaller argument, ignoring NaN.
    min(x, y) => primitive::min;
    /// Larger argument, ignoring NaN.
    max(x, y) => primitive::max;
    /// Remainder of `x / y` with the sign of `x`.
    fmod(x, y) => primitive::fmod;
    /// √(x² + y²) without intermediate overflow.
    hypot(x, y) => primitive::hypot;
    /// `base` raised to `exponent`.
    ///
    /// ```
    /// let p: f64 = constmath::pow(2_u8, 0.5_f32);
    /// assert!((p - core::f64::consts::SQRT_2).abs() < 1e-15);
    /// ```
    pow(base, exponent) => primitive::pow;
}

// ---------------------------------------------------------------------------
// trigonometric and hyperbolic
// ---------------------------------------------------------------------------

unary! {
    /// Sine.
    sin => trig::sin;
    /// Cosine.
    cos => trig::cos;
    /// Tangent.
    tan => trig::tan;
    /// Arcsine; NaN for |x| > 1.
    asin => trig::asin;
    /// Arccosine; NaN for |x| > 1.
    acos => trig::acos;
    /// Arctangent.
    atan => trig::atan;
    /// Hyperbolic sine.
    sinh => hyperbolic::sinh;
    /// Hyperbolic cosine.
    cosh => hyperbolic::cosh;
    /// Hyperbolic tangent.
    tanh => hyperbolic::tanh;
    /// Inverse hyperbolic sine.
    asinh => hyperbolic::asinh;
    /// Inverse hyperbolic cosine; NaN for x < 1.
    acosh => hyperbolic::acosh;
    /// Inverse hyperbolic tangent; NaN for |x| > 1.
    atanh => hyperbolic::atanh;
}

binary! {
    /// Four-quadrant arctangent of `y / x`.
    atan2(y, x) => trig::atan2;
}

// ---------------------------------------------------------------------------
// special functions
// ---------------------------------------------------------------------------

unary! {
    /// Factorial; Γ(x + 1) for non-integral `x`.
    ///
    /// ```
    /// assert_eq!(constmath::factorial(5), 120.0);
    /// ```
    factorial => special::factorial;
    /// Gamma function; alias of [`tgamma`].
    gamma => special::gamma;
    /// Gamma function Γ(x).
    tgamma => special::tgamma;
    /// ln |Γ(x)|.
    lgamma => special::lgamma;
    /// Error function.
    ///
    /// ```
    /// assert!((constmath::erf(1.2_f64) - 0.9103139782296354).abs() < 1e-15);
    /// ```
    erf => special::erf;
    /// Complementary error function.
    erfc => special::erfc;
    /// Inverse error function.
    erf_inv => special::erf_inv;
}

binary! {
    /// Binomial coefficient C(n, k).
    ///
    /// ```
    /// assert_eq!(constmath::binomial_coef(5, 2), 10.0);
    /// ```
    binomial_coef(n, k) => special::binomial_coef;
    /// ln C(n, k).
    log_binomial_coef(n, k) => special::log_binomial_coef;
    /// Log multivariate gamma ln Γ_p(a).
    lmgamma(a, p) => special::lmgamma;
    /// Beta function B(a, b).
    beta(a, b) => special::beta;
    /// ln B(a, b).
    lbeta(a, b) => special::lbeta;
    /// Regularized lower incomplete gamma P(a, x).
    ///
    /// ```
    /// assert!((constmath::incomplete_gamma(3_i32, 4_i32) - 0.7618966944464556).abs() < 1e-14);
    /// ```
    incomplete_gamma(a, x) => special::incomplete_gamma;
    /// Regularized upper incomplete gamma Q(a, x).
    incomplete_gamma_upper(a, x) => special::incomplete_gamma_upper;
    /// Inverse of P(a, ·).
    incomplete_gamma_inv(a, p) => special::incomplete_gamma_inv;
}

ternary! {
    /// Regularized incomplete beta I_x(a, b).
    incomplete_beta(a, b, x) => special::incomplete_beta;
    /// Inverse of I_·(a, b).
    incomplete_beta_inv(a, b, p) => special::incomplete_beta_inv;
}
