//! Series error types.

use std::fmt;

use thiserror::Error;

/// Identifies which kernel produced a sum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    /// Σ zⁿ/nᵏ of the given order.
    Polylog {
        /// Weight k.
        order: u32,
    },
    /// Defining double series of Li22.
    Double,
    /// Closed-form resummed x-series of Li22.
    Resummed,
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::Polylog { order } => write!(f, "Li{order} series"),
            SeriesKind::Double => write!(f, "Li22 double series"),
            SeriesKind::Resummed => write!(f, "Li22 resummed series"),
        }
    }
}

/// Errors raised by the summation kernels.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("{kind} did not converge after {terms} terms (last term magnitude {last_term:e})")]
    NotConverged {
        /// Kernel that gave up.
        kind: SeriesKind,
        /// Number of terms summed.
        terms: usize,
        /// Magnitude of the last term added.
        last_term: f64,
    },
}
