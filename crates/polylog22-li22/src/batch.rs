//! Parallel evaluation over many points.

use num_complex::Complex64;
use rayon::prelude::*;

use crate::error::Li22Result;
use crate::eval::li22_with_options;
use crate::options::EvalOptions;

/// Evaluates Li22 at every `(x, y)` in `points`, in parallel.
///
/// Results keep the order of `points`; each point fails independently.
pub fn li22_batch(
    points: &[(Complex64, Complex64)],
    options: &EvalOptions,
) -> Vec<Li22Result<Complex64>> {
    points
        .par_iter()
        .map(|&(x, y)| li22_with_options(x, y, options))
        .collect()
}
