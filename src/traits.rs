use core::fmt::Debug;
use num_traits::{AsPrimitive, Float, FloatConst};

/// Trait for the floating-point types results are returned in.
///
/// Implemented for `f32` and `f64`. The core evaluates in `f64`; `to_eval`
/// and `from_eval` move values in and out of that evaluation type.
pub trait FloatScalar: Float + FloatConst + Debug + AsPrimitive<f64> + 'static {
    /// Widen to the `f64` evaluation type.
    #[inline]
    fn to_eval(self) -> f64 {
        self.as_()
    }

    /// Narrow an `f64` result back to `Self`.
    fn from_eval(v: f64) -> Self;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline] fn from_eval(v: f64) -> $t { v as $t }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);

/// Numeric type promotion.
///
/// Maps an input type to the floating-point type computations are carried
/// out and returned in. Integral inputs of any width promote to `f64`;
/// `f32` and `f64` map to themselves.
///
/// Types that are neither integral nor floating have no impl, so passing
/// one to any function of this crate is a compile error.
///
/// # Example
///
/// ```
/// use constmath::traits::{Promote, Promoted};
///
/// let x: Promoted<u8> = 3_u8.promote();
/// assert_eq!(x, 3.0_f64);
/// let y: Promoted<f32> = 1.5_f32.promote();
/// assert_eq!(y, 1.5_f32);
/// ```
pub trait Promote: Copy {
    /// The promoted floating-point type.
    type Output: FloatScalar;

    /// Convert `self` into the promoted type.
    fn promote(self) -> Self::Output;
}

macro_rules! impl_promote_integral {
    ($($t:ty),*) => {
        $(
            impl Promote for $t {
                type Output = f64;

                #[inline] fn promote(self) -> f64 { self.as_() }
            }
        )*
    };
}

macro_rules! impl_promote_float {
    ($($t:ty),*) => {
        $(
            impl Promote for $t {
                type Output = $t;

                #[inline] fn promote(self) -> $t { self }
            }
        )*
    };
}

impl_promote_integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_promote_float!(f32, f64);

/// The wider of two floating-point types.
pub trait Widen<Rhs: FloatScalar>: FloatScalar {
    type Output: FloatScalar;
}

impl Widen<f32> for f32 {
    type Output = f32;
}

impl Widen<f64> for f32 {
    type Output = f64;
}

impl Widen<f32> for f64 {
    type Output = f64;
}

impl Widen<f64> for f64 {
    type Output = f64;
}

/// Common output type of a two-argument function: the wider of both
/// promoted argument types.
pub trait Promote2<B: Promote>: Promote {
    type Output: FloatScalar;
}

impl<A, B> Promote2<B> for A
where
    A: Promote,
    B: Promote,
    <A as Promote>::Output: Widen<<B as Promote>::Output>,
{
    type Output = <<A as Promote>::Output as Widen<<B as Promote>::Output>>::Output;
}

/// Common output type of a three-argument function.
pub trait Promote3<B: Promote, C: Promote>: Promote2<B> {
    type Output: FloatScalar;
}

impl<A, B, C> Promote3<B, C> for A
where
    A: Promote2<B>,
    B: Promote,
    C: Promote,
    <A as Promote2<B>>::Output: Widen<<C as Promote>::Output>,
{
    type Output = <<A as Promote2<B>>::Output as Widen<<C as Promote>::Output>>::Output;
}

/// Promoted type of `T`.
pub type Promoted<T> = <T as Promote>::Output;

/// Common promoted type of `A` and `B`.
pub type Common<A, B> = <A as Promote2<B>>::Output;

/// Common promoted type of `A`, `B` and `C`.
pub type Common3<A, B, C> = <A as Promote3<B, C>>::Output;
