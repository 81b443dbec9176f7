//! Branch-consistent complex logarithm and power.
//!
//! `num_complex` computes `ln` through `atan2`, which maps `−r − 0i` to
//! `−iπ`. Reciprocals and products of real numbers routinely carry a
//! negative zero imaginary part, so relying on it would flip the branch
//! depending on how an argument was produced. `clog` treats every exactly
//! real negative number as lying on the upper side of the cut.

use std::f64::consts::PI;

pub use num_complex::Complex64;
use num_traits::{One, Zero};

/// Principal complex logarithm with `arg ∈ (−π, π]`.
///
/// The argument must be nonzero; `clog(0)` returns `−∞ + 0i`.
///
/// # Example
///
/// ```
/// use polylog22_core::{clog, Complex64};
///
/// let l = clog(Complex64::new(-1.0, -0.0));
/// assert_eq!(l.im, std::f64::consts::PI);
/// ```
#[inline]
pub fn clog(z: Complex64) -> Complex64 {
    if z.im == 0.0 && z.re < 0.0 {
        Complex64::new((-z.re).ln(), PI)
    } else {
        Complex64::new(z.norm().ln(), z.im.atan2(z.re))
    }
}

/// Principal complex power `z^w = exp(w · clog z)`.
///
/// `0^0` is 1 and `0^w` is 0 for any other exponent.
pub fn cpow(z: Complex64, w: Complex64) -> Complex64 {
    if z.is_zero() {
        return if w.is_zero() {
            Complex64::one()
        } else {
            Complex64::zero()
        };
    }
    (w * clog(z)).exp()
}

/// True when the imaginary part is a zero of either sign.
#[inline]
pub fn is_exactly_real(z: Complex64) -> bool {
    z.im == 0.0
}

/// True when both components are finite.
#[inline]
pub fn is_finite(z: Complex64) -> bool {
    z.re.is_finite() && z.im.is_finite()
}
