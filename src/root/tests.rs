use super::*;
use super::monotone::midpoint;
use crate::policy::{Policy, INVERSE};
use crate::special::{erf, incomplete_beta, incomplete_gamma, lbeta, lgamma};

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{msg}: {a} vs {b}, diff = {}, tol = {tol}",
        (a - b).abs()
    );
}

// =====================================================================
// const helper
// =====================================================================

#[test]
fn invert_erf() {
    for &y in &[1e-10, 0.1, 0.5, 0.9, 0.999, 0.999999] {
        let x = invert(&Monotone::Erf, y, 1.0, 0.0, 6.0, INVERSE);
        assert_near(erf(x), y, 1e-15, "erf residual");
    }
}

#[test]
fn invert_bad_guess_still_converges() {
    // guess outside the bracket and NaN guess both start from the bisection point
    let a = invert(&Monotone::Erf, 0.5, 42.0, 0.0, 6.0, INVERSE);
    let b = invert(&Monotone::Erf, 0.5, f64::NAN, 0.0, 6.0, INVERSE);
    assert_near(a, 0.4769362762044699, 2e-15, "outside guess");
    assert_near(b, 0.4769362762044699, 2e-15, "NaN guess");
}

#[test]
fn invert_lower_gamma() {
    for &(a, x) in &[(0.5, 0.01), (1.0, 1.0), (3.0, 4.0), (10.0, 7.5), (50.0, 60.0)] {
        let p = incomplete_gamma(a, x);
        let f = Monotone::LowerGamma { a, lgamma_a: lgamma(a) };
        let r = invert(&f, p, 1.0, 0.0, 100.0 * a.max(1.0) + 100.0, INVERSE);
        assert_near(r, x, 1e-11 * x.max(1.0), "P(a, ·) inverse");
    }
}

#[test]
fn invert_beta() {
    for &(a, b, x) in &[(2.0, 3.0, 0.4), (0.5, 0.5, 0.1), (6.0, 5.0, 0.7), (1.0, 20.0, 0.02)] {
        let p = incomplete_beta(a, b, x);
        let f = Monotone::Beta { a, b, lbeta_ab: lbeta(a, b) };
        let r = invert(&f, p, 0.5, 0.0, 1.0, INVERSE);
        assert_near(r, x, 1e-12, "I_·(a, b) inverse");
    }
}

#[test]
fn invert_depth_bound() {
    // stops after two steps, still inside the bracket
    let p = Policy::new(2, 0.0);
    let x = invert(&Monotone::LowerGamma { a: 1.0, lgamma_a: 0.0 }, 0.999, -1.0, 0.0, 4.0, p);
    assert!(x > 0.0 && x <= 4.0);
}

#[test]
fn invert_root_below_every_positive_float() {
    // P(0.5, x) > 1e-300 for every x ≥ 5e-324, so the bracket closes on zero
    let f = Monotone::LowerGamma { a: 0.5, lgamma_a: lgamma(0.5) };
    assert_eq!(invert(&f, 1e-300, f64::NAN, 0.0, 200.0, INVERSE), 0.0);
}

#[test]
fn invert_bracket_spanning_many_binades() {
    // root ≈ 1.1e-75, far below the arithmetic midpoints of [0, 200]
    let f = Monotone::LowerGamma { a: 2.0, lgamma_a: 0.0 };
    let target = 6e-151;
    let x = invert(&f, target, 100.0, 0.0, 200.0, INVERSE);
    assert!(x > 0.0);
    assert_near(f.value(x) / target, 1.0, 1e-13, "tail root");
}

#[test]
fn midpoint_halves_bit_patterns() {
    assert_eq!(midpoint(1.0, 4.0), 2.0);
    assert_eq!(midpoint(-0.0, 0.0), 0.0);
    let tiny = f64::from_bits(1);
    assert_eq!(midpoint(0.0, tiny), 0.0);
    assert_eq!(midpoint(-2.0, 4.0), 1.0);
}

#[test]
fn slope_matches_finite_difference() {
    let f = Monotone::LowerGamma { a: 2.5, lgamma_a: lgamma(2.5) };
    let h = 1e-6;
    let fd = (f.value(3.0 + h) - f.value(3.0 - h)) / (2.0 * h);
    assert_near(f.slope(3.0), fd, 1e-8, "gamma slope");

    let g = Monotone::Beta { a: 2.0, b: 3.0, lbeta_ab: lbeta(2.0, 3.0) };
    let fd = (g.value(0.3 + h) - g.value(0.3 - h)) / (2.0 * h);
    assert_near(g.slope(0.3), fd, 1e-8, "beta slope");
    assert_eq!(g.slope(0.0), 0.0);
}

// =====================================================================
// runtime helper
// =====================================================================

#[test]
fn newton_bisect_sqrt2() {
    let r = newton_bisect(|x| x * x, |x| 2.0 * x, 2.0, 1.0, 0.0, 2.0, &RootSettings::default()).unwrap();
    assert_near(r.x, core::f64::consts::SQRT_2, 1e-12, "√2");
    assert!(r.fx.abs() < 1e-11);
    assert!(r.evals >= 2);
}

#[test]
fn newton_bisect_decreasing() {
    // e^{−x} = 0.25 at x = ln 4
    let r = newton_bisect(
        |x: f64| (-x).exp(),
        |x: f64| -(-x).exp(),
        0.25,
        0.5,
        0.0,
        5.0,
        &RootSettings::default(),
    )
    .unwrap();
    assert_near(r.x, 4.0_f64.ln(), 1e-11, "ln 4");
}

#[test]
fn newton_bisect_zero_derivative_bisects() {
    // f'(0) = 0 at the starting point; Newton alone would divide by zero
    let r = newton_bisect(
        |x: f64| x * x * x,
        |x| 3.0 * x * x,
        1.0,
        0.0,
        -2.0,
        3.0,
        &RootSettings::default(),
    )
    .unwrap();
    assert_near(r.x, 1.0, 1e-10, "cube root of 1");
}

#[test]
fn newton_bisect_swapped_bracket() {
    let r = newton_bisect(|x| x * x, |x| 2.0 * x, 9.0, 1.0, 10.0, 0.0, &RootSettings::default()).unwrap();
    assert_near(r.x, 3.0, 1e-12, "√9");
}

#[test]
fn newton_bisect_root_at_endpoint() {
    let r = newton_bisect(|x| x * x, |x| 2.0 * x, 4.0, 1.0, 0.0, 2.0, &RootSettings::default()).unwrap();
    assert_eq!(r.x, 2.0);
    assert_eq!(r.iterations, 0);
}

#[test]
fn newton_bisect_invalid_bracket() {
    let r = newton_bisect(|x| x * x, |x| 2.0 * x, -1.0, 1.0, 0.0, 2.0, &RootSettings::default());
    assert_eq!(r.unwrap_err(), RootError::BracketInvalid);
}

#[test]
fn newton_bisect_not_finite() {
    let r = newton_bisect(|x: f64| x.ln(), |x| 1.0 / x, 0.0, 0.5, -1.0, 2.0, &RootSettings::default());
    assert_eq!(r.unwrap_err(), RootError::NotFinite);
}

#[test]
fn newton_bisect_max_iterations() {
    let settings = RootSettings { x_tol: 0.0, f_tol: 0.0, max_iter: 3 };
    let r = newton_bisect(|x: f64| x.sin(), |x: f64| x.cos(), 0.0, 3.0, 2.0, 4.0, &settings);
    assert_eq!(r.unwrap_err(), RootError::MaxIterations);
}

#[test]
fn newton_bisect_f32() {
    let r = newton_bisect(|x: f32| x * x, |x| 2.0 * x, 2.0, 1.0, 0.0, 2.0, &RootSettings::default()).unwrap();
    assert!((r.x - core::f32::consts::SQRT_2).abs() < 1e-5);
}

#[test]
fn error_display() {
    let e = RootError::BracketInvalid;
    assert_eq!(format!("{}", e), "bracket endpoints must have opposite signs");
    let e = RootError::MaxIterations;
    assert_eq!(format!("{}", e), "maximum iterations exceeded");
}
