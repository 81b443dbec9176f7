//! The classical polylogarithm series Σ zⁿ/nᵏ.

use num_complex::Complex64;

use crate::error::SeriesKind;
use crate::sum::{Accumulator, SeriesOptions, SeriesSum};

/// Sums Li_k(z) = Σ_{n≥1} zⁿ/nᵏ term by term.
///
/// Converges for |z| < 1, and for |z| = 1 away from z = 1 when k ≥ 2
/// (slowly). Callers are expected to reduce |z| first; the classical
/// evaluators only call this with |z| ≤ 1/2.
pub fn polylog_series(order: u32, z: Complex64, options: &SeriesOptions) -> SeriesSum {
    let kind = SeriesKind::Polylog { order };
    let mut acc = Accumulator::new(options.tolerance);
    let mut power = Complex64::new(1.0, 0.0);
    let exponent = order as i32;

    for n in 1..=options.max_terms {
        power *= z;
        let term = power / (n as f64).powi(exponent);
        if let Some(converged) = acc.push(term) {
            return acc.finish(converged, kind);
        }
    }
    acc.finish(false, kind)
}
