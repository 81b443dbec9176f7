//! Adaptive Numerical Integration
//!
//! Repeatedly bisects the subinterval with the largest error estimate
//! until the summed estimate meets the tolerance.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use num_complex::Complex64;
use num_traits::Zero;

use crate::gauss_kronrod::{GaussKronrodRule, QuadratureRule};

/// Tolerances and limits for [`adaptive_integrate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadratureOptions {
    /// Absolute error tolerance
    pub abs_tol: f64,
    /// Relative error tolerance
    pub rel_tol: f64,
    /// Maximum number of bisections
    pub max_subdivisions: usize,
    /// Rule applied on every subinterval
    pub rule: QuadratureRule,
}

impl Default for QuadratureOptions {
    fn default() -> Self {
        Self {
            abs_tol: 1e-300,
            rel_tol: 1e-14,
            max_subdivisions: 2000,
            rule: QuadratureRule::G7K15,
        }
    }
}

/// Result of adaptive integration.
#[derive(Clone, Copy, Debug)]
pub struct AdaptiveResult {
    /// Computed integral value
    pub value: Complex64,
    /// Estimated absolute error
    pub error: f64,
    /// Total number of function evaluations
    pub evaluations: usize,
    /// Number of subintervals used
    pub intervals: usize,
    /// Whether convergence was achieved
    pub converged: bool,
}

/// An interval with its contribution and error estimate.
#[derive(Clone, Debug)]
struct Interval {
    a: f64,
    b: f64,
    value: Complex64,
    error: f64,
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.error == other.error
    }
}

impl Eq for Interval {}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap by error
        self.error.total_cmp(&other.error)
    }
}

/// Integrates a complex-valued `f` over [a, b] with adaptive bisection.
///
/// Stops as soon as the summed error estimate drops below
/// `max(abs_tol, rel_tol · |value|)`, or after `max_subdivisions`
/// bisections with `converged == false`. The stop test and the result
/// both use totals recomputed from the heap, so cancellation in the
/// running sums can neither end the loop early nor keep it going.
pub fn adaptive_integrate<F: Fn(f64) -> Complex64>(
    f: &F,
    a: f64,
    b: f64,
    options: &QuadratureOptions,
) -> AdaptiveResult {
    let rule: GaussKronrodRule = options.rule.build();
    let tolerance = |value: Complex64| options.abs_tol.max(options.rel_tol * value.norm());

    let initial = rule.integrate(f, a, b);
    let mut total_value = initial.value;
    let mut total_error = initial.error;
    let mut evaluations = initial.evaluations;

    let mut heap = BinaryHeap::new();
    heap.push(Interval {
        a,
        b,
        value: initial.value,
        error: initial.error,
    });

    let mut subdivisions = 0;
    loop {
        if total_error <= tolerance(total_value) {
            // The running sums drift; confirm against the heap before stopping
            (total_value, total_error) = heap_totals(&heap);
            if total_error <= tolerance(total_value) {
                break;
            }
        }
        if subdivisions >= options.max_subdivisions {
            break;
        }
        let Some(interval) = heap.pop() else {
            break;
        };
        subdivisions += 1;

        let mid = 0.5 * (interval.a + interval.b);
        let left = rule.integrate(f, interval.a, mid);
        let right = rule.integrate(f, mid, interval.b);
        evaluations += left.evaluations + right.evaluations;

        total_value += left.value + right.value - interval.value;
        total_error += left.error + right.error - interval.error;

        heap.push(Interval {
            a: interval.a,
            b: mid,
            value: left.value,
            error: left.error,
        });
        heap.push(Interval {
            a: mid,
            b: interval.b,
            value: right.value,
            error: right.error,
        });

        if !total_value.re.is_finite() || !total_value.im.is_finite() {
            break;
        }
    }

    let (value, error) = heap_totals(&heap);

    AdaptiveResult {
        value,
        error,
        evaluations,
        intervals: heap.len(),
        converged: error.is_finite() && error <= tolerance(value),
    }
}

/// Value and error summed afresh over every interval.
fn heap_totals(heap: &BinaryHeap<Interval>) -> (Complex64, f64) {
    heap.iter()
        .fold((Complex64::zero(), 0.0), |(value, error), i| (value + i.value, error + i.error))
}
