//! Recurrences evaluated by the const engine.
//!
//! Closures and trait methods cannot be called from a `const fn`, so the
//! recurrences the library needs are closed enums whose coefficient
//! functions are themselves `const`.

/// Power series described by the ratio of successive terms, `t_k = t_{k-1} · ratio(k)`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Series {
    /// sin r = Σ (−1)^k r^{2k+1} / (2k+1)!, first term `r`.
    Sin { r2: f64 },
    /// cos r = Σ (−1)^k r^{2k} / (2k)!, first term `1`.
    Cos { r2: f64 },
    /// e^{x²}·(√π/2)·erf(x) = Σ 2^k x^{2k+1} / (1·3·…·(2k+1)), first term `x`.
    Erf { x2: f64 },
    /// Γ(a)·e^x·x^{−a}·P(a, x) = Σ x^k / (a·(a+1)·…·(a+k)), first term `1/a`.
    LowerGamma { a: f64, x: f64 },
}

impl Series {
    pub(crate) const fn ratio(&self, k: u32) -> f64 {
        let k = k as f64;
        match *self {
            Series::Sin { r2 } => -r2 / ((2.0 * k) * (2.0 * k + 1.0)),
            Series::Cos { r2 } => -r2 / ((2.0 * k - 1.0) * (2.0 * k)),
            Series::Erf { x2 } => 2.0 * x2 / (2.0 * k + 1.0),
            Series::LowerGamma { a, x } => x / (a + k),
        }
    }
}

/// Continued fraction `b0 + a1/(b1 + a2/(b2 + …))`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Fraction {
    /// Gauss: atan x = x / (1 + x²/(3 + 4x²/(5 + 9x²/(7 + …)))).
    Atan { x2: f64 },
    /// Laplace: erfc x = e^{−x²}/√π / (x + (1/2)/(x + 1/(x + (3/2)/(x + …)))).
    Erfc { x: f64 },
    /// Legendre: Q(a, x) = x^a e^{−x}/Γ(a) / (x + 1 − a + 1·(a−1)/(x + 3 − a + …)).
    UpperGamma { a: f64, x: f64 },
    /// I_x(a, b) = x^a (1−x)^b / (a·B(a, b)) / (1 + d1/(1 + d2/(1 + …))).
    Beta { a: f64, b: f64, x: f64 },
}

impl Fraction {
    /// `(a_n, b_n)`; `n = 0` yields `(0, b0)`.
    pub(crate) const fn term(&self, n: u32) -> (f64, f64) {
        let nf = n as f64;
        match *self {
            Fraction::Atan { x2 } => {
                let a = if n == 0 { 0.0 } else { nf * nf * x2 };
                (a, 2.0 * nf + 1.0)
            }
            Fraction::Erfc { x } => (0.5 * nf, x),
            Fraction::UpperGamma { a, x } => {
                let an = if n == 0 { 0.0 } else { nf * (a - nf) };
                (an, x + 2.0 * nf + 1.0 - a)
            }
            Fraction::Beta { a, b, x } => {
                if n == 0 {
                    return (0.0, 1.0);
                }
                let m = (n / 2) as f64;
                let d = if n % 2 == 1 {
                    // d_{2m+1} = −(a+m)(a+b+m)x / ((a+2m)(a+2m+1))
                    -((a + m) * (a + b + m) * x) / ((a + 2.0 * m) * (a + 2.0 * m + 1.0))
                } else {
                    // d_{2m} = m(b−m)x / ((a+2m−1)(a+2m))
                    m * (b - m) * x / ((a + 2.0 * m - 1.0) * (a + 2.0 * m))
                };
                (d, 1.0)
            }
        }
    }
}
