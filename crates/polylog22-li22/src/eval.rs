//! Top-level evaluation: classify, map, sum, map back.

use log::{trace, warn};
use num_complex::Complex64;

use polylog22_core::is_finite;
use polylog22_series::{double_series, resummed_series, SeriesOptions, SeriesSum};
use polylog22_special::li2;

use crate::error::{Li22Error, Li22Result};
use crate::options::EvalOptions;
use crate::region::{Kernel, Region};
use crate::torus::torus_integral;
use crate::transform::{inversion, inverted_stuffle_remainder, stuffle};

/// A value together with how it was obtained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    /// Li22(x, y).
    pub value: Complex64,
    /// Region the point was evaluated in.
    pub region: Region,
    /// Series terms summed (zero for the torus).
    pub terms: usize,
    /// Integrand evaluations (zero outside the torus).
    pub evaluations: usize,
}

/// Li22(x, y) with default options, NaN on failure.
///
/// Failures are logged at `warn` level. Use [`try_li22`] to inspect them.
pub fn li22(x: Complex64, y: Complex64) -> Complex64 {
    match try_li22(x, y) {
        Ok(value) => value,
        Err(err) => {
            warn!("Li22({x}, {y}) failed: {err}");
            Complex64::new(f64::NAN, f64::NAN)
        }
    }
}

/// Li22(x, y) with default options.
pub fn try_li22(x: Complex64, y: Complex64) -> Li22Result<Complex64> {
    li22_with_options(x, y, &EvalOptions::default())
}

/// Li22(x, y) under custom options.
pub fn li22_with_options(x: Complex64, y: Complex64, options: &EvalOptions) -> Li22Result<Complex64> {
    evaluate(x, y, options).map(|evaluation| evaluation.value)
}

/// Evaluates Li22(x, y) and reports the region and work done.
pub fn evaluate(x: Complex64, y: Complex64, options: &EvalOptions) -> Li22Result<Evaluation> {
    options.validate()?;
    let region = Region::classify(x, y, options)?;
    trace!("Li22({x}, {y}): region {region}");
    evaluate_unchecked(x, y, region, options)
}

/// Evaluates Li22(x, y) in a caller-chosen region.
///
/// Skips the classifier, so a region whose series diverges at (x, y)
/// surfaces as [`crate::Li22Error::Series`] instead of a wrong value. Zero
/// arguments still give exactly zero.
pub fn evaluate_in_region(
    x: Complex64,
    y: Complex64,
    region: Region,
    options: &EvalOptions,
) -> Li22Result<Evaluation> {
    options.validate()?;
    if Region::classify(x, y, options)? == Region::Zero {
        return evaluate_unchecked(x, y, Region::Zero, options);
    }
    evaluate_unchecked(x, y, region, options)
}

fn evaluate_unchecked(
    x: Complex64,
    y: Complex64,
    region: Region,
    options: &EvalOptions,
) -> Li22Result<Evaluation> {
    let mut evaluation = Evaluation {
        value: Complex64::new(0.0, 0.0),
        region,
        terms: 0,
        evaluations: 0,
    };

    evaluation.value = match region {
        Region::Zero => Complex64::new(0.0, 0.0),
        Region::Direct(kernel) => {
            let sum = run_kernel(kernel, x, y, &options.series)?;
            evaluation.terms = sum.terms;
            sum.value
        }
        Region::Stuffle(kernel) => {
            let sum = run_kernel(kernel, y, x, &options.series)?;
            evaluation.terms = sum.terms;
            stuffle(x, y, sum.value)
        }
        Region::Inversion(kernel) => {
            let sum = run_kernel(kernel, x.inv(), y.inv(), &options.series)?;
            evaluation.terms = sum.terms;
            inversion(x, y, sum.value)
        }
        Region::InversionStuffle(kernel) => {
            let (u, v) = (x.inv(), y.inv());
            let sum = run_kernel(kernel, v, u, &options.series)?;
            evaluation.terms = sum.terms;
            inversion(x, y, inverted_stuffle_remainder(u, v) - sum.value)
        }
        Region::Torus => {
            let result = torus_integral(x, y, &options.quadrature)?;
            evaluation.evaluations = result.evaluations;
            result.value
        }
    };

    if !is_finite(evaluation.value) {
        return Err(Li22Error::NonFiniteResult { x, y });
    }
    Ok(evaluation)
}

/// Sums Li22(u, v) with the chosen kernel; unconverged sums are errors.
fn run_kernel(
    kernel: Kernel,
    u: Complex64,
    v: Complex64,
    options: &SeriesOptions,
) -> Li22Result<SeriesSum> {
    let sum = match kernel {
        Kernel::Double => double_series(u, v, options),
        Kernel::Resummed => {
            let a = u * v;
            resummed_series(u, a, li2(a), options)
        }
    };
    Ok(sum.check()?)
}
