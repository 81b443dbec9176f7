//! Summation options and results.

use num_complex::Complex64;

use crate::error::{SeriesError, SeriesKind};

/// Termination policy shared by all kernels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesOptions {
    /// Relative size below which a term counts as negligible.
    pub tolerance: f64,
    /// Hard cap on the number of terms.
    pub max_terms: usize,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            tolerance: f64::EPSILON,
            max_terms: 5000,
        }
    }
}

/// Result of a truncated summation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesSum {
    /// Partial sum.
    pub value: Complex64,
    /// Number of terms added.
    pub terms: usize,
    /// Magnitude of the last term added.
    pub last_term: f64,
    /// Whether the termination rule was met before the cap.
    pub converged: bool,
    /// Kernel that produced the sum.
    pub kind: SeriesKind,
}

impl SeriesSum {
    /// Turns an unconverged sum into an error.
    pub fn check(self) -> Result<Self, SeriesError> {
        if self.converged {
            Ok(self)
        } else {
            Err(SeriesError::NotConverged {
                kind: self.kind,
                terms: self.terms,
                last_term: self.last_term,
            })
        }
    }
}

/// Running state of a summation: accumulates terms and applies the
/// two-consecutive-small-terms rule.
#[derive(Debug)]
pub(crate) struct Accumulator {
    sum: Complex64,
    terms: usize,
    small_run: usize,
    last_term: f64,
    tolerance: f64,
}

impl Accumulator {
    pub(crate) fn new(tolerance: f64) -> Self {
        Self {
            sum: Complex64::new(0.0, 0.0),
            terms: 0,
            small_run: 0,
            last_term: 0.0,
            tolerance,
        }
    }

    /// Adds a term; returns `Some(converged)` when summation should stop.
    pub(crate) fn push(&mut self, term: Complex64) -> Option<bool> {
        self.terms += 1;
        self.last_term = term.norm();
        if !self.last_term.is_finite() {
            return Some(false);
        }
        self.sum += term;
        if self.last_term <= self.tolerance * self.sum.norm() {
            self.small_run += 1;
            if self.small_run >= 2 {
                return Some(true);
            }
        } else {
            self.small_run = 0;
        }
        None
    }

    pub(crate) fn finish(self, converged: bool, kind: SeriesKind) -> SeriesSum {
        SeriesSum {
            value: self.sum,
            terms: self.terms,
            last_term: self.last_term,
            converged,
            kind,
        }
    }
}
