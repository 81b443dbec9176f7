//! Evaluation errors.

use num_complex::Complex64;
use thiserror::Error;

use polylog22_series::SeriesError;

/// Reasons an evaluation of Li22 can fail.
///
/// None of these carry a partial value: a failed evaluation has no
/// trustworthy digits.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Li22Error {
    /// An argument has a NaN or infinite component.
    #[error("non-finite argument: Li22({x}, {y})")]
    NonFinite { x: Complex64, y: Complex64 },

    /// Finite arguments whose value overflowed, such as moduli near f64::MAX.
    #[error("value of Li22({x}, {y}) is not finite")]
    NonFiniteResult { x: Complex64, y: Complex64 },

    /// A series kernel hit its term cap.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Adaptive quadrature ran out of subdivisions.
    #[error("contour quadrature did not converge ({intervals} intervals, error estimate {error:e})")]
    Quadrature { intervals: usize, error: f64 },

    /// Evaluation options outside their admissible ranges.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

/// Result alias for fallible evaluation.
pub type Li22Result<T> = Result<T, Li22Error>;
