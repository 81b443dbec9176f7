//! Numerical integration of complex-valued functions on a real interval.
//!
//! Integrands map a real parameter to `Complex64`, which is how contour
//! integrals are evaluated after parametrising the path.
//!
//! # Available Methods
//!
//! - **Gauss-Kronrod Quadrature**: fixed-order rules G7K15 and G15K31
//! - **Adaptive Integration**: bisection of the interval with the largest
//!   error estimate until the requested tolerance is met
//!
//! # Example
//!
//! ```
//! use num_complex::Complex64;
//! use polylog22_quadrature::{adaptive_integrate, QuadratureOptions};
//!
//! // ∫₀¹ e^{it} dt = (e^{i} − 1)/i
//! let result = adaptive_integrate(
//!     &|t: f64| Complex64::new(0.0, t).exp(),
//!     0.0,
//!     1.0,
//!     &QuadratureOptions::default(),
//! );
//! let exact = (Complex64::new(0.0, 1.0).exp() - 1.0) / Complex64::new(0.0, 1.0);
//! assert!((result.value - exact).norm() < 1e-14);
//! ```

pub mod adaptive;
pub mod gauss_kronrod;

pub use adaptive::{adaptive_integrate, AdaptiveResult, QuadratureOptions};
pub use gauss_kronrod::{GKResult, GaussKronrodRule, QuadratureRule};
