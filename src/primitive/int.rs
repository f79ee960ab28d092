//! Integer helpers.

/// Greatest common divisor (Euclid).
///
/// # Example
///
/// ```
/// const G: u64 = constmath::primitive::gcd(84, 36);
/// assert_eq!(G, 12);
/// ```
pub const fn gcd(a: u64, b: u64) -> u64 {
    run_euclid(Euclid { a, b, done: b == 0 }, EUCLID_STEPS).a
}

/// Euclid on `u64` takes at most 92 remainder steps (consecutive Fibonacci
/// numbers are the worst case).
const EUCLID_STEPS: u32 = 96;

#[derive(Clone, Copy)]
struct Euclid {
    a: u64,
    b: u64,
    done: bool,
}

const fn euclid_step(s: Euclid) -> Euclid {
    let r = s.a % s.b;
    Euclid { a: s.b, b: r, done: r == 0 }
}

iterate! {
    fn run_euclid(Euclid) => euclid_step;
}

/// Least common multiple, or `None` if it does not fit in `u64`.
pub const fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}
