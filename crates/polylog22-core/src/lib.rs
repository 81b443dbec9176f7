//! Elementary building blocks for polylogarithm evaluation.
//!
//! Every routine that touches a branch cut in the higher crates goes
//! through this crate, so the branch convention is fixed in one place:
//!
//! - **Principal logarithm**: `clog(z) = ln|z| + i·arg(z)` with
//!   `arg(z) ∈ (−π, π]`. A negative real argument always yields `+iπ`,
//!   whatever the sign of its zero imaginary part.
//! - **Principal power**: `cpow(z, w) = exp(w · clog(z))`.
//! - **Constants**: π powers, ζ(2), ζ(3), ζ(4) and even Bernoulli numbers.

pub mod bernoulli;
pub mod complex;
pub mod constants;


pub use bernoulli::{bernoulli_even, zeta_nonpositive, BERNOULLI_EVEN};
pub use complex::{clog, cpow, is_exactly_real, is_finite, Complex64};
pub use constants::{PI2, PI4, ZETA2, ZETA3, ZETA4};
