//! Classical polylogarithms of complex argument.
//!
//! This crate evaluates Li_n(z) = Σ_{k≥1} zᵏ/kⁿ for n = 1..4 over the
//! whole complex plane in double precision:
//!
//! - **Li₁**: −ln(1 − z)
//! - **Li₂**: Bernoulli series in −ln(1 − z), mapped with z → 1 − z and
//!   z → 1/z
//! - **Li₃, Li₄**: direct series near 0, an expansion in ln z near the
//!   unit circle, and inversion z → 1/z outside
//!
//! # Branch convention
//!
//! All functions use the principal branch with the cut along [1, ∞).
//! An exactly real argument on the cut is read from below:
//! Im Li₂(x) = −π ln x for real x > 1.

pub mod polylog;

#[cfg(test)]
mod proptests;

pub use polylog::{li1, li2, li3, li4, polylog};
