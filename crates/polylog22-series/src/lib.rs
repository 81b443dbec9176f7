//! Truncated power-series kernels.
//!
//! This crate provides the summation engines underneath the polylogarithm
//! evaluators:
//!
//! - [`polylog_series`]: the classical series Σ zⁿ/nᵏ
//! - [`double_series`]: the defining double series of Li22 for
//!   |x| < 1, |xy| < 1, summed with two running accumulators
//! - [`resummed_series`]: an x-series for Li22 whose coefficients are
//!   resummed in closed form, valid for |x| < 1 and any xy off its cut
//!
//! # Termination
//!
//! Every kernel stops once two consecutive terms fall below
//! `tolerance · |partial sum|`, or after `max_terms` terms. Kernels never
//! check their convergence domain: a call outside it runs into the term
//! cap (or into non-finite terms) and reports `converged == false`.

pub mod double;
pub mod error;
pub mod one_variable;
pub mod resummed;
pub mod sum;

#[cfg(test)]
mod proptests;

pub use double::{double_series, li22_brute_force};
pub use error::{SeriesError, SeriesKind};
pub use one_variable::polylog_series;
pub use resummed::resummed_series;
pub use sum::{SeriesOptions, SeriesSum};
