//! # polylog22
//!
//! Double-precision evaluation of the two-variable polylogarithm
//!
//! Li22(x, y) = Σ_{n>m≥1} xⁿ yᵐ / (n² m²)
//!
//! for arbitrary complex arguments, together with the classical
//! polylogarithms Li1 to Li4 it is built from.
//!
//! ## Features
//!
//! - **Branch-safe primitives**: principal logarithm with ln(−1) = +iπ
//! - **Series kernels**: one- and two-variable power series with a shared
//!   termination rule
//! - **Functional equations**: stuffle and inversion maps back into the
//!   convergence domain
//! - **Contour quadrature**: adaptive Gauss-Kronrod near |x| = |y| = 1
//! - **Batch evaluation**: parallel evaluation over many points
//!
//! ## Quick Start
//!
//! ```rust
//! use polylog22::prelude::*;
//!
//! let x = Complex64::new(1.9, 0.0);
//! let y = Complex64::new(0.8, 0.0);
//! let value = li22(x, y);
//! assert!((value - Complex64::new(0.1523595924359218, -2.053147079333523)).norm() < 1e-12);
//!
//! let evaluation = evaluate(x, y, &EvalOptions::default()).unwrap();
//! assert_eq!(evaluation.region.name(), "inversion/resummed");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use polylog22_core as core;
pub use polylog22_li22 as li22;
pub use polylog22_quadrature as quadrature;
pub use polylog22_series as series;
pub use polylog22_special as special;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use num_complex::Complex64;
    pub use polylog22_core::clog;
    pub use polylog22_li22::{
        evaluate, li22, li22_batch, li22_with_options, try_li22, EvalOptions, Evaluation,
        Li22Error, Region,
    };
    pub use polylog22_special::{li1, li2, li3, li4};
}
