//! Functional equations of Li22.
//!
//! Each transform takes the value of Li22 at the mapped point and adds the
//! classical-polylogarithm remainder of the identity:
//!
//! - Stuffle: Li22(x, y) = Li2(x) Li2(y) − Li4(xy) − Li22(y, x)
//! - Inversion: Li22(x, y) = Li22(1/x, 1/y) + R(x, y)
//!
//! with, for lx = ln(−x), L = ln(−xy), Λ = L − lx,
//!
//! R = Li4(1/(xy)) − 3 Li4(x) + 2 L Li3(x) − (π²/6 + L²/2) Li2(x) + lx C₁ + C₂
//!
//! C₁ = −2 Li3(y) + Λ Li2(y) + Λ³/6 + π² Λ/3
//!
//! C₂ = 3 Li4(y) − 2 Λ Li3(y) + Λ² Li2(y)/2 + Λ⁴/24 − π⁴/15
//!
//! Both identities hold for every nonzero pair off the cuts. On the real
//! axis the inversion remainder is evaluated on the lower lip of each cut,
//! which places every exactly real inverted argument on the upper lip. A
//! stuffle applied after inversion reads its classical polylogarithms there
//! through [`inverted_stuffle_remainder`].

use num_complex::Complex64;

use polylog22_core::{clog, is_exactly_real, is_finite, PI2, PI4, ZETA2};
use polylog22_special::{li2, li3, li4};

/// Li2(x) Li2(y) − Li4(xy), the sum Li22(x, y) + Li22(y, x).
pub fn stuffle_remainder(x: Complex64, y: Complex64) -> Complex64 {
    li2(x) * li2(y) - li4(x * y)
}

/// [`stuffle_remainder`] at inverted arguments u = 1/x, v = 1/y.
///
/// Each exactly real argument, u, v or uv on its own, is taken on the upper
/// lip of its cut, the image of x − i0 under inversion.
pub fn inverted_stuffle_remainder(u: Complex64, v: Complex64) -> Complex64 {
    let upper = |f: fn(Complex64) -> Complex64, z: Complex64| {
        if is_exactly_real(z) {
            f(z).conj()
        } else {
            f(z)
        }
    };
    upper(li2, u) * upper(li2, v) - upper(li4, u * v)
}

/// Li22(x, y) from `swapped = Li22(y, x)`.
pub fn stuffle(x: Complex64, y: Complex64, swapped: Complex64) -> Complex64 {
    debug_assert!(is_finite(x) && is_finite(y), "stuffle at non-finite point");
    stuffle_remainder(x, y) - swapped
}

/// The remainder R(x, y) of the inversion identity.
pub fn inversion_remainder(x: Complex64, y: Complex64) -> Complex64 {
    let lx = clog(-x);
    let big_l = clog(-x * y);
    let lambda = big_l - lx;
    let lambda2 = lambda * lambda;

    let li2_y = li2(y);
    let li3_y = li3(y);

    let c1 = -2.0 * li3_y + lambda * li2_y + lambda2 * lambda / 6.0 + PI2 / 3.0 * lambda;
    let c2 = 3.0 * li4(y) - 2.0 * lambda * li3_y + 0.5 * lambda2 * li2_y + lambda2 * lambda2 / 24.0
        - PI4 / 15.0;

    li4((x * y).inv()) - 3.0 * li4(x) + 2.0 * big_l * li3(x) - (ZETA2 + 0.5 * big_l * big_l) * li2(x)
        + lx * c1
        + c2
}

/// Li22(x, y) from `inverted = Li22(1/x, 1/y)`.
///
/// Both arguments must be nonzero.
pub fn inversion(x: Complex64, y: Complex64, inverted: Complex64) -> Complex64 {
    debug_assert!(
        x != Complex64::new(0.0, 0.0) && y != Complex64::new(0.0, 0.0),
        "inversion at a zero argument"
    );
    debug_assert!(is_finite(x) && is_finite(y), "inversion at non-finite point");
    inverted + inversion_remainder(x, y)
}
