//! Sine and cosine.

use crate::consts::{FRAC_2_PI, PIO2_1, PIO2_2, PIO2_3};
use crate::expansion::{or_nan, sum_series, Series};
use crate::policy::TRIG;
use crate::primitive::{abs, round};

/// Sine of `x` radians.
///
/// `x` is reduced to `r ∈ [−π/4, π/4]` and a quadrant, then the Taylor
/// series of sin or cos is summed on `r`. Below 2^20·π/2 the nearest
/// multiple of π/2 is subtracted in three parts; above it the reduction
/// multiplies the mantissa by a 192-bit window of the binary expansion of
/// 2/π (Payne–Hanek), so even `sin(f64::MAX)` is accurate to about an ulp.
/// NaN for infinite or NaN `x`.
///
/// # Example
///
/// ```
/// use constmath::{primitive::abs, trig::sin, HALF_PI, PI};
///
/// const ONE: f64 = sin(HALF_PI);
/// assert_eq!(ONE, 1.0);
/// assert!(abs(sin(PI)) < 1e-15);
/// ```
pub const fn sin(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    if x == 0.0 {
        return x;
    }
    let (quadrant, r) = reduce(x);
    match quadrant {
        0 => kernel_sin(r),
        1 => kernel_cos(r),
        2 => -kernel_sin(r),
        _ => -kernel_cos(r),
    }
}

/// Cosine of `x` radians. See [`sin`] for the reduction.
pub const fn cos(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let (quadrant, r) = reduce(x);
    match quadrant {
        0 => kernel_cos(r),
        1 => -kernel_sin(r),
        2 => -kernel_cos(r),
        _ => kernel_sin(r),
    }
}

/// Largest magnitude handled by the three-part reduction, 2^20·π/2.
const CODY_WAITE_LIMIT: f64 = 1647099.3291652855;

/// Bits of 2/π after the binary point; word `j` holds bits `64j+1 ..= 64j+64`.
const TWO_OVER_PI_BITS: [u64; 20] = [
    0xA2F9836E4E441529,
    0xFC2757D1F534DDC0,
    0xDB6295993C439041,
    0xFE5163ABDEBBC561,
    0xB7246E3A424DD2E0,
    0x06492EEA09D1921C,
    0xFE1DEB1CB129A73E,
    0xE88235F52EBB4484,
    0xE99C7026B45F7E41,
    0x3991D639835339F4,
    0x9C845F8BBDF9283B,
    0x1FF897FFDE05980F,
    0xEF2F118B5A0A6D1F,
    0x6D367ECF27CB09B7,
    0x4F463F669E5FEA2D,
    0x7527BAC7EBE5F17B,
    0x3D0739F78A5292EA,
    0x6BFB5FB11F8D5D08,
    0x56033046FC7B6BAB,
    0xF0CFBC209AF4361D,
];

/// 2^−128
const TWO_M128: f64 = 2.938735877055719e-39;

const LOW_61: u64 = (1 << 61) - 1;

/// `(n mod 4, x − n·π/2)` with `n = round(x·2/π)`.
pub(crate) const fn reduce(x: f64) -> (i64, f64) {
    if abs(x) < CODY_WAITE_LIMIT {
        let n = round(x * FRAC_2_PI);
        let r = ((x - n * PIO2_1) - n * PIO2_2) - n * PIO2_3;
        return ((n as i64) & 3, r);
    }
    let (quadrant, r) = reduce_large(abs(x));
    if x < 0.0 {
        ((4 - quadrant) & 3, -r)
    } else {
        (quadrant, r)
    }
}

/// Bits `p+1 ..= p+64` of 2/π, zero-filled left of the binary point.
const fn two_over_pi_window(p: i64) -> u64 {
    if p <= -64 {
        0
    } else if p < 0 {
        TWO_OVER_PI_BITS[0] >> -p
    } else {
        let j = (p / 64) as usize;
        let o = (p % 64) as u32;
        if o == 0 {
            TWO_OVER_PI_BITS[j]
        } else {
            (TWO_OVER_PI_BITS[j] << o) | (TWO_OVER_PI_BITS[j + 1] >> (64 - o))
        }
    }
}

/// Payne–Hanek reduction of a finite `x ≥ 2^20·π/2`.
///
/// With `x = m·2^e`, the bits of 2/π weighing more than `2^(2−e)` only add
/// multiples of 4 to `x·2/π`, so the product of `m` with the next 192 bits
/// holds the quadrant in its bits 189–190 and the fraction below.
const fn reduce_large(x: f64) -> (i64, f64) {
    let bits = x.to_bits();
    let m = ((bits & ((1 << 52) - 1)) | (1 << 52)) as u128;
    let s = ((bits >> 52) as i64) - 1075 - 3;

    let w0 = two_over_pi_window(s) as u128;
    let w1 = two_over_pi_window(s + 64) as u128;
    let w2 = two_over_pi_window(s + 128) as u128;

    let p2 = m * w2;
    let p1 = m * w1 + (p2 >> 64);
    let p0 = m * w0 + (p1 >> 64);
    let (l0, l1, l2) = (p2 as u64, p1 as u64, p0 as u64);

    let quadrant = ((l2 >> 61) & 3) as i64;
    let fraction = (((l2 & LOW_61) as u128) << 67) | ((l1 as u128) << 3) | ((l0 >> 61) as u128);
    let (quadrant, fraction, sign) = if fraction >> 127 == 1 {
        ((quadrant + 1) & 3, fraction.wrapping_neg(), -1.0)
    } else {
        (quadrant, fraction, 1.0)
    };
    (quadrant, sign * (fraction as f64) * TWO_M128 * core::f64::consts::FRAC_PI_2)
}

/// sin r for |r| ≤ π/4.
pub(crate) const fn kernel_sin(r: f64) -> f64 {
    if r == 0.0 {
        return r;
    }
    or_nan(sum_series(&Series::Sin { r2: r * r }, r, TRIG))
}

/// cos r for |r| ≤ π/4.
pub(crate) const fn kernel_cos(r: f64) -> f64 {
    or_nan(sum_series(&Series::Cos { r2: r * r }, 1.0, TRIG))
}
