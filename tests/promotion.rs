//! Output types chosen by the promotion layer.

use constmath::{Common, Common3, Promote, Promoted};
use std::any::TypeId;

fn type_of<T: 'static>(_: &T) -> TypeId {
    TypeId::of::<T>()
}

#[test]
fn integral_inputs_promote_to_f64() {
    assert_eq!(type_of(&constmath::exp(1_i8)), TypeId::of::<f64>());
    assert_eq!(type_of(&constmath::exp(1_u16)), TypeId::of::<f64>());
    assert_eq!(type_of(&constmath::exp(1_i64)), TypeId::of::<f64>());
    assert_eq!(type_of(&constmath::exp(1_u128)), TypeId::of::<f64>());
    assert_eq!(type_of(&constmath::exp(1_usize)), TypeId::of::<f64>());
}

#[test]
fn float_inputs_pass_through() {
    assert_eq!(type_of(&constmath::sin(1.0_f32)), TypeId::of::<f32>());
    assert_eq!(type_of(&constmath::sin(1.0_f64)), TypeId::of::<f64>());
    // promoting a float is the identity
    assert_eq!(2.5_f32.promote(), 2.5_f32);
    assert_eq!(2.5_f64.promote(), 2.5_f64);
}

#[test]
fn integral_width_does_not_matter() {
    assert_eq!(constmath::sqrt(9_u8), constmath::sqrt(9_i128));
    assert_eq!(constmath::lgamma(7_u32), constmath::lgamma(7.0_f64));
}

#[test]
fn mixed_arguments_take_the_wider_type() {
    let a: f32 = constmath::pow(2.0_f32, 3.0_f32);
    let b: f64 = constmath::pow(2.0_f32, 3.0_f64);
    let c: f64 = constmath::pow(2_u8, 3.0_f32);
    let d: f64 = constmath::incomplete_beta(2.0_f32, 3_i32, 0.4_f32);
    let e: f32 = constmath::incomplete_beta(2.0_f32, 3.0_f32, 0.4_f32);
    assert_eq!(a, 8.0);
    assert_eq!(b, 8.0);
    assert_eq!(c, 8.0);
    assert!((d - 0.5248).abs() < 1e-7);
    assert!((e - 0.5248).abs() < 1e-6);
}

#[test]
fn type_aliases() {
    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }
    assert!(same::<Promoted<i32>, f64>());
    assert!(same::<Promoted<f32>, f32>());
    assert!(same::<Common<f32, f32>, f32>());
    assert!(same::<Common<f32, u8>, f64>());
    assert!(same::<Common3<f32, f32, f64>, f64>());
    assert!(same::<Common3<f32, f32, f32>, f32>());
}

#[test]
fn f32_results_are_narrowed_f64_results() {
    for i in 1..50 {
        let x = i as f32 * 0.1;
        assert_eq!(constmath::erf(x), constmath::special::erf(x as f64) as f32);
        assert_eq!(constmath::tgamma(x), constmath::special::tgamma(x as f64) as f32);
        assert_eq!(constmath::atanh(x / 5.0), constmath::hyperbolic::atanh((x / 5.0) as f64) as f32);
    }
}

#[test]
fn f32_accuracy() {
    assert!((constmath::exp(1.0_f32) - core::f32::consts::E).abs() < 1e-6);
    assert!((constmath::gamma(5.0_f32) - 24.0).abs() < 1e-5);
    assert!((constmath::erf_inv(0.5_f32) - 0.476_936_28).abs() < 1e-6);
    assert!(constmath::acosh(0.5_f32).is_nan());
}

#[test]
fn sign_helpers() {
    assert!(constmath::signbit(-0.0_f32));
    assert!(!constmath::signbit(3_u8));
    assert_eq!(constmath::copysign(2_i32, -1.0_f32), -2.0_f64);
    assert_eq!(constmath::sgn(-7_i16), -1.0);
    assert_eq!(constmath::max(f64::NAN, 1_u8), 1.0);
}

#[test]
fn integer_helpers() {
    assert_eq!(constmath::gcd(48, 18), 6);
    assert_eq!(constmath::lcm(4, 6), Some(12));
    assert_eq!(constmath::checked_factorial(10), Ok(3_628_800));
    assert_eq!(
        constmath::checked_binomial_coef(100, 50),
        Err(constmath::SpecialError::Overflow)
    );
}
