use num_bigint::BigInt;
use num_traits::One;

use super::{C3_OVER_24, SERIES_A, SERIES_B};

/// Exact binary-splitting state for a half-open range of series terms
///
/// `T / Q` is the partial sum of the series over the range, with every
/// term weighted by the running product `P` of the terms before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// Product of the falling-factorial numerators
    pub p: BigInt,
    /// Product of the denominators, always positive
    pub q: BigInt,
    /// Signed partial numerator
    pub t: BigInt,
}

impl Split {
    /// Closed-form triple for the single term `k`
    pub fn leaf(k: u64) -> Self {
        if k == 0 {
            return Self {
                p: BigInt::one(),
                q: BigInt::one(),
                t: BigInt::from(SERIES_A),
            };
        }

        // P_k = (6k - 5)(2k - 1)(6k - 1)
        let p = BigInt::from(6 * k - 5) * (2 * k - 1) * (6 * k - 1);

        // Q_k = k^3 * 640320^3 / 24
        let kk = BigInt::from(k);
        let q = &kk * &kk * &kk * C3_OVER_24;

        // T_k = (-1)^k * (A + B k) * P_k
        let val = BigInt::from(SERIES_A + SERIES_B * k);
        let t = if k % 2 == 1 { -val * &p } else { val * &p };

        Self { p, q, t }
    }

    /// Concatenate the split for `[a, m)` (self) with the one for `[m, b)`
    ///
    /// Both children are consumed so their storage is released as soon as
    /// the parent exists.
    pub fn merge(self, right: Split) -> Self {
        // T(a, b) = Q(m, b) * T(a, m) + P(a, m) * T(m, b)
        let t = &right.q * &self.t + &self.p * &right.t;

        Self {
            p: self.p * right.p,
            q: self.q * right.q,
            t,
        }
    }
}

/// Evaluate `(P, Q, T)` over the term range `[a, b)`
///
/// Splits at the floor midpoint so that every multiplication in a merge
/// sees operands of roughly equal size. Callers must pass `a < b`.
pub fn binary_split(a: u64, b: u64) -> Split {
    debug_assert!(a < b, "empty term range [{}, {})", a, b);

    if b - a == 1 {
        return Split::leaf(a);
    }

    let m = a + (b - a) / 2;
    let left = binary_split(a, m);
    let right = binary_split(m, b);
    left.merge(right)
}
