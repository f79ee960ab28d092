use super::*;

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "approx_eq failed: {a} vs {b}, diff = {}, tol = {tol}",
        (a - b).abs()
    );
}

fn rel_eq(a: f64, b: f64, tol: f64) {
    let rel = ((a - b) / b).abs();
    assert!(rel < tol, "rel_eq failed: {a} vs {b}, rel = {rel}, tol = {tol}");
}

// =====================================================================
// sign, rounding
// =====================================================================

#[test]
fn abs_and_sign() {
    assert_eq!(abs(-3.5), 3.5);
    assert_eq!(abs(2.0), 2.0);
    assert!(!signbit(abs(-0.0)));
    assert!(abs(f64::NAN).is_nan());
    assert_eq!(sgn(-7.0), -1.0);
    assert_eq!(sgn(7.0), 1.0);
    assert_eq!(sgn(0.0), 0.0);
    assert!(signbit(-0.0));
    assert!(!signbit(0.0));
    assert_eq!(copysign(3.0, -1.0), -3.0);
    assert_eq!(copysign(-3.0, 0.0), 3.0);
}

#[test]
fn min_max_ignore_nan() {
    assert_eq!(min(1.0, 2.0), 1.0);
    assert_eq!(max(1.0, 2.0), 2.0);
    assert_eq!(min(f64::NAN, 2.0), 2.0);
    assert_eq!(max(3.0, f64::NAN), 3.0);
}

#[test]
fn rounding_matches_std() {
    for &x in &[-2.5, -1.5, -0.5, -0.49999999999999994, 0.3, 0.5, 1.5, 2.5, 1e15 + 0.5, -7.99] {
        assert_eq!(trunc(x), x.trunc(), "trunc({x})");
        assert_eq!(floor(x), x.floor(), "floor({x})");
        assert_eq!(ceil(x), x.ceil(), "ceil({x})");
        assert_eq!(round(x), x.round(), "round({x})");
    }
    assert!(signbit(trunc(-0.5)));
    assert_eq!(floor(1e300), 1e300);
    assert!(floor(f64::NAN).is_nan());
}

#[test]
fn fmod_cases() {
    approx_eq(fmod(5.3, 2.0), 1.3, 1e-15);
    approx_eq(fmod(-5.3, 2.0), -1.3, 1e-15);
    assert!(fmod(1.0, 0.0).is_nan());
    assert!(fmod(f64::INFINITY, 2.0).is_nan());
    assert_eq!(fmod(1.5, f64::INFINITY), 1.5);
}

#[test]
fn fmod_is_exact_when_the_quotient_is_huge() {
    // 10^17 / 3 rounds to an integer, so x − trunc(x/y)·y would give 0
    assert_eq!(fmod(1e17, 3.0), 1.0);
    assert_eq!(fmod(1e300, 7.0), 1.0);
    assert_eq!(fmod(2.0_f64.powi(1000), 3.0), 1.0);
    assert_eq!(fmod(-1e22, 0.1), -0.08768742176060307);
    // subnormal operands
    let tiny = f64::from_bits(1);
    assert_eq!(fmod(9.0 * tiny, 4.0 * tiny), tiny);
    // zero keeps the sign of x
    assert!(signbit(fmod(-6.0, 3.0)));
}

#[test]
fn fmod_matches_std_remainder() {
    for &x in &[0.0, 1e-310, 0.3, 5.3, -17.25, 123456.789, -9.87e15, 3.3e200] {
        for &y in &[1e-300, 0.1, -0.7, 2.0, 1e3, 6.02e23] {
            assert_eq!(fmod(x, y), x % y, "fmod({x}, {y})");
        }
    }
}

#[test]
fn classification() {
    assert!(is_nan(f64::NAN));
    assert!(is_inf(f64::NEG_INFINITY));
    assert!(is_finite(1.0));
    assert!(!is_finite(f64::INFINITY));
    assert!(is_odd(-3));
    assert!(is_even(-4));
    assert!(round::is_integral(4.0));
    assert!(!round::is_integral(4.5));
    assert!(!round::is_integral(f64::INFINITY));
}

// =====================================================================
// sqrt
// =====================================================================

#[test]
fn sqrt_matches_std() {
    for &x in &[1e-310, 1e-300, 0.01, 0.5, 1.0, 2.0, 3.0, 10.0, 12345.678, 1e200, f64::MAX] {
        rel_eq(sqrt(x), x.sqrt(), 4e-16);
    }
}

#[test]
fn sqrt_domain() {
    assert!(sqrt(-1.0).is_nan());
    assert!(sqrt(f64::NAN).is_nan());
    assert_eq!(sqrt(0.0), 0.0);
    assert!(signbit(sqrt(-0.0)));
    assert_eq!(sqrt(f64::INFINITY), f64::INFINITY);
    assert_eq!(sqrt(4.0), 2.0);
}

#[test]
fn inv_sqrt_and_hypot() {
    rel_eq(inv_sqrt(4.0), 0.5, 1e-15);
    rel_eq(hypot(3.0, 4.0), 5.0, 1e-15);
    rel_eq(hypot(3e300, 4e300), 5e300, 1e-15);
    rel_eq(hypot(3e-300, 4e-300), 5e-300, 1e-15);
    assert_eq!(hypot(f64::INFINITY, f64::NAN), f64::INFINITY);
    assert!(hypot(1.0, f64::NAN).is_nan());
}

// =====================================================================
// exp / log
// =====================================================================

#[test]
fn exp_matches_std() {
    for &x in &[-700.0, -30.5, -1.0, -1e-10, 0.0, 1e-10, 0.5, 1.0, 3.0, 10.25, 100.0, 709.0] {
        rel_eq(exp(x), x.exp(), 1e-15);
    }
    approx_eq(exp(3.0), 20.085536923187668, 1e-13);
}

#[test]
fn exp_limits() {
    assert_eq!(exp(710.0), f64::INFINITY);
    assert_eq!(exp(-746.0), 0.0);
    assert_eq!(exp(f64::NEG_INFINITY), 0.0);
    assert!(exp(f64::NAN).is_nan());
    // subnormal result
    rel_eq(exp(-740.0), (-740.0_f64).exp(), 1e-9);
}

#[test]
fn expm1_small() {
    for &x in &[-0.3, -1e-8, 1e-12, 1e-5, 0.2, 0.34, 1.0, 5.0] {
        rel_eq(expm1(x), x.exp_m1(), 2e-15);
    }
    assert_eq!(expm1(0.0), 0.0);
}

#[test]
fn log_matches_std() {
    for &x in &[5e-320, 1e-300, 1e-5, 0.5, 0.9, 1.1, 2.0, 10.0, 1e10, 1e300] {
        rel_eq(log(x), x.ln(), 1e-15);
    }
    assert_eq!(log(1.0), 0.0);
}

#[test]
fn log_domain() {
    assert!(log(-1.0).is_nan());
    assert_eq!(log(0.0), f64::NEG_INFINITY);
    assert_eq!(log(f64::INFINITY), f64::INFINITY);
    assert!(log(f64::NAN).is_nan());
}

#[test]
fn log_variants() {
    assert_eq!(log2(8.0), 3.0);
    assert_eq!(log2(0.125), -3.0);
    rel_eq(log2(10.0), 10.0_f64.log2(), 1e-15);
    rel_eq(log10(1000.0), 3.0, 1e-15);
    rel_eq(log10(0.02), 0.02_f64.log10(), 1e-15);
    for &x in &[-0.5, -1e-9, 1e-15, 1e-6, 0.3, 2.0, 1e6] {
        rel_eq(log1p(x), x.ln_1p(), 1e-15);
    }
    assert_eq!(log1p(-1.0), f64::NEG_INFINITY);
    assert!(log1p(-2.0).is_nan());
}

// =====================================================================
// pow
// =====================================================================

#[test]
fn pow_integral_exponents() {
    assert_eq!(pow(2.0, 10.0), 1024.0);
    assert_eq!(pow(-2.0, 3.0), -8.0);
    assert_eq!(pow(2.0, -2.0), 0.25);
    assert_eq!(powi(3.0, 4), 81.0);
    assert_eq!(powi(5.0, 0), 1.0);
    rel_eq(pow(1.0001, 1000.0), 1.1051653926032206, 1e-14);
}

#[test]
fn pow_large_integral_exponents() {
    // squaring 10^6 times would accumulate about 2e-11 of rounding error
    rel_eq(pow(1.0001, 1e6), 2.6747109931126854e43, 1e-13);
    rel_eq(pow(-1.5, 41.0), -16585998.48141002, 1e-14);
    rel_eq(pow(-0.999, 99999.0), -3.542069758101229e-44, 1e-12);
    assert!(pow(-2.0, 1e20) > 0.0);
    assert_eq!(pow(-2.0, 1e20), f64::INFINITY);
    assert_eq!(pow(-0.5, 1e20), 0.0);
}

#[test]
fn pow_fractional_exponents() {
    for &(b, e) in &[(2.0, 0.5), (10.0, 1.5), (0.3, 2.7), (7.0, -0.25), (1e-3, 0.1)] {
        rel_eq(pow(b, e), f64::powf(b, e), 1e-14);
    }
    assert!(pow(-8.0, 1.0 / 3.0).is_nan());
}

#[test]
fn pow_special_values() {
    assert_eq!(pow(f64::NAN, 0.0), 1.0);
    assert_eq!(pow(1.0, f64::NAN), 1.0);
    assert_eq!(pow(0.0, -1.0), f64::INFINITY);
    assert_eq!(pow(0.0, 0.5), 0.0);
    assert_eq!(pow(0.5, f64::INFINITY), 0.0);
    assert_eq!(pow(2.0, f64::INFINITY), f64::INFINITY);
    assert_eq!(pow(2.0, f64::NEG_INFINITY), 0.0);
    assert_eq!(pow(-1.0, f64::INFINITY), 1.0);
}

#[test]
fn integer_helpers() {
    assert_eq!(gcd(84, 36), 12);
    assert_eq!(gcd(0, 5), 5);
    assert_eq!(lcm(4, 6), Some(12));
    assert_eq!(lcm(0, 6), Some(0));
    assert_eq!(lcm(u64::MAX, 2), None);
}

#[test]
fn usable_in_const_items() {
    const S: f64 = sqrt(16.0);
    const E: f64 = exp(0.0);
    const L: f64 = log(1.0);
    assert_eq!(S, 4.0);
    assert_eq!(E, 1.0);
    assert_eq!(L, 0.0);
}
