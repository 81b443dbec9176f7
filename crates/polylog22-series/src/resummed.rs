//! Resummed x-series of Li22.
//!
//! Summing over the inner index first,
//!
//! Li22(x, y) = Σ_{k≥1} xᵏ F_k(a),  F_k(a) = Σ_{m≥1} aᵐ/(m² (m+k)²),  a = xy.
//!
//! Partial fractions turn every F_k into a combination of Li1(a), Li2(a)
//! and two tails that obey first-order recursions in k:
//!
//! - F_k = (Li2(a) + Q_k − (2/k) D_k)/k²
//! - Q_k = Σ_m aᵐ/(m+k)² with Q₀ = Li2(a) and Q_k = Q_{k−1}/a − 1/k²
//! - D_k = Li1(a) − Σ_m aᵐ/(m+k) with D₀ = 0 and
//!   D_k = Li1(a)(1 − 1/a) + D_{k−1}/a + 1/k
//!
//! The series converges like |x|ᵏ for any a off the cut [1, ∞). The
//! forward recursions amplify rounding by |1/a| per step, so the kernel
//! is only accurate while |a| is not much smaller than |x|.

use num_complex::Complex64;
use num_traits::{One, Zero};

use polylog22_core::clog;

use crate::error::SeriesKind;
use crate::sum::{Accumulator, SeriesOptions, SeriesSum};

/// Sums Li22(x, y) as an x-series, given `a = xy` and `li2_a = Li2(a)`.
///
/// `a` must be nonzero. At `a = 1` the singular Li1(a) drops out exactly.
pub fn resummed_series(
    x: Complex64,
    a: Complex64,
    li2_a: Complex64,
    options: &SeriesOptions,
) -> SeriesSum {
    let one = Complex64::one();
    let inv_a = a.inv();
    // Li1(a)(1 − 1/a)
    let drift = if a == one {
        Complex64::zero()
    } else {
        -clog(one - a) * (one - inv_a)
    };

    let mut acc = Accumulator::new(options.tolerance);
    let mut tail2 = li2_a;
    let mut tail1 = Complex64::zero();
    let mut x_pow = one;

    for k in 1..=options.max_terms {
        let kf = k as f64;
        let k2 = kf * kf;
        tail2 = tail2 * inv_a - 1.0 / k2;
        tail1 = drift + tail1 * inv_a + 1.0 / kf;
        x_pow *= x;
        let coeff = (li2_a + tail2 - tail1 * (2.0 / kf)) / k2;
        if let Some(converged) = acc.push(x_pow * coeff) {
            return acc.finish(converged, SeriesKind::Resummed);
        }
    }
    acc.finish(false, SeriesKind::Resummed)
}
