//! Li22(x, y) over the whole complex plane.
//!
//! Li22(x, y) = Σ_{n>m≥1} xⁿ yᵐ / (n² m²)
//!
//! The defining series only converges for |x| < 1, |xy| < 1. Everywhere
//! else the point is first mapped by functional equations:
//!
//! - **Stuffle**: (x, y) → (y, x)
//! - **Inversion**: (x, y) → (1/x, 1/y)
//!
//! until the first argument has modulus at most 0.95, then summed with one
//! of two kernels. Points with both moduli close to 1, where no mapping
//! helps, are integrated along a contour instead. See [`Region`] for the
//! partition.
//!
//! # Branches
//!
//! Cuts run along x ∈ [1, ∞) and xy ∈ [1, ∞). Exactly real arguments on a
//! cut are read from below, x − i0 and xy − i0.
//!
//! # Example
//!
//! ```
//! use num_complex::Complex64;
//! use polylog22_li22::{li22, try_li22};
//!
//! let value = li22(Complex64::new(2934.0, 0.0), Complex64::new(0.46, 0.0));
//! assert!((value - Complex64::new(16.077451220880633, 191.68865150306652)).norm() < 5e-11);
//!
//! assert!(try_li22(Complex64::new(f64::NAN, 0.0), Complex64::new(0.5, 0.0)).is_err());
//! ```

pub mod batch;
pub mod error;
pub mod eval;
pub mod options;
pub mod region;
pub mod torus;
pub mod transform;


pub use batch::li22_batch;
pub use error::{Li22Error, Li22Result};
pub use eval::{evaluate, evaluate_in_region, li22, li22_with_options, try_li22, Evaluation};
pub use options::EvalOptions;
pub use region::{Kernel, Region};
pub use torus::torus_integral;
pub use transform::{
    inversion, inversion_remainder, inverted_stuffle_remainder, stuffle, stuffle_remainder,
};
