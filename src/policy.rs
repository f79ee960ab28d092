//! Convergence policies.
//!
//! Every expansion in the crate is bounded by a compile-time [`Policy`]. The
//! depth is a hard upper bound on the number of steps; the tolerance lets a
//! series or continued fraction stop earlier once the last contribution is
//! negligible. Expansions that stop on a tolerance yield NaN when the depth
//! runs out first. Steps are driven by halving recursion, so a depth of `n`
//! costs about log2 n stack frames, in `const` contexts too.

/// Depth bound and early-stop tolerance for one function family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy {
    /// Maximum number of steps (terms, levels or iterations).
    pub max_depth: u32,
    /// Relative tolerance for stopping before `max_depth`.
    pub tol: f64,
}

impl Policy {
    /// Create a policy.
    pub const fn new(max_depth: u32, tol: f64) -> Self {
        Self { max_depth, tol }
    }
}

const HALF_EPS: f64 = f64::EPSILON / 2.0;

/// Newton refinements for `sqrt` from the bit-level seed.
pub const SQRT: Policy = Policy::new(6, 0.0);

/// Fixed depth of the nested Taylor expansion of `e^r` for |r| ≤ ln2/2.
pub const EXP: Policy = Policy::new(18, 0.0);

/// Fixed depth of the nested `2·atanh(s)` series for |s| ≤ 0.1716.
pub const LOG: Policy = Policy::new(14, 0.0);

/// sin/cos Taylor series on [−π/4, π/4].
pub const TRIG: Policy = Policy::new(16, HALF_EPS);

/// Fixed depth of the atan Gauss continued fraction on |t| ≤ tan(π/8).
pub const ATAN: Policy = Policy::new(16, 0.0);

/// Positive-term erf series for |x| < 2.5.
pub const ERF_SERIES: Policy = Policy::new(80, HALF_EPS);

/// Fixed depth of the erfc Laplace fraction for |x| ≥ 2.5.
pub const ERFC_TAIL: Policy = Policy::new(50, 0.0);

/// erfc Laplace fraction for x ≥ 1, evaluated with early stop.
pub const ERFC_LENTZ: Policy = Policy::new(256, HALF_EPS);

/// Series / Legendre fraction for the regularized incomplete gamma. Shapes
/// above 200 near the transition `x ≈ a` use Temme's uniform expansion
/// instead, which keeps the step count below this bound.
pub const INC_GAMMA: Policy = Policy::new(512, HALF_EPS);

/// Continued fraction for the regularized incomplete beta. The number of
/// levels grows like √(a+b) at the mean; this bound covers shapes up to
/// about 10^11.
pub const INC_BETA: Policy = Policy::new(32768, HALF_EPS);

/// Steps of the multiplicative binomial recurrence; wider spans fall back to lgamma.
pub const BINOMIAL: Policy = Policy::new(256, 0.0);

/// Largest dimension accepted by `lmgamma`.
pub const LMGAMMA: Policy = Policy::new(1024, 0.0);

/// Newton/bisection steps used by the inverse special functions. Bisection
/// splits the bit pattern of the bracket, so 64 halvings resolve any
/// non-negative bracket to adjacent floats.
pub const INVERSE: Policy = Policy::new(128, f64::EPSILON);
