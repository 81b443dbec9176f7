//! The defining double series of Li22.
//!
//! Li22(x, y) = Σ_{n>m≥1} xⁿ yᵐ/(n² m²). Collecting the inner sum,
//!
//! Li22(x, y) = Σ_{n≥1} A_{n+1}/(n+1)²,  A_{n+1} = xⁿ⁺¹ Σ_{m≤n} yᵐ/m²,
//!
//! and A obeys A₁ = 0, A_{n+1} = x (A_n + aⁿ/n²) with a = xy. Tracking
//! aⁿ and A separately keeps every intermediate bounded by the
//! contraction ratio max(|x|, |a|), even when |y| is huge.

use num_complex::Complex64;

use crate::error::SeriesKind;
use crate::sum::{Accumulator, SeriesOptions, SeriesSum};

/// Sums the double series of Li22(x, y).
///
/// Converges for |x| < 1 and |xy| < 1, at the rate of max(|x|, |xy|)ⁿ.
pub fn double_series(x: Complex64, y: Complex64, options: &SeriesOptions) -> SeriesSum {
    let a = x * y;
    let mut acc = Accumulator::new(options.tolerance);
    let mut a_pow = Complex64::new(1.0, 0.0);
    let mut outer = Complex64::new(0.0, 0.0);

    for n in 1..=options.max_terms {
        let nf = n as f64;
        a_pow *= a;
        outer = x * (outer + a_pow / (nf * nf));
        let next = nf + 1.0;
        if let Some(converged) = acc.push(outer / (next * next)) {
            return acc.finish(converged, SeriesKind::Double);
        }
    }
    acc.finish(false, SeriesKind::Double)
}

/// Brute-force truncation of the defining double sum, for testing.
///
/// Sums all terms with `n ≤ terms` directly, with no convergence check.
pub fn li22_brute_force(x: Complex64, y: Complex64, terms: usize) -> Complex64 {
    let mut total = Complex64::new(0.0, 0.0);
    let mut x_pow = x;
    for n in 2..=terms {
        x_pow *= x;
        let mut inner = Complex64::new(0.0, 0.0);
        let mut y_pow = Complex64::new(1.0, 0.0);
        for m in 1..n {
            y_pow *= y;
            inner += y_pow / ((m * m) as f64);
        }
        total += x_pow * inner / ((n * n) as f64);
    }
    total
}
