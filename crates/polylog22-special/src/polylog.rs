//! Polylogarithms Li_n(z), n = 1..4.
//!
//! The polylogarithm of order n is defined as:
//!
//! Li_n(z) = Σ_{k=1}^∞ z^k / k^n
//!
//! # Key Properties
//!
//! - Li_n(1) = ζ(n) for n ≥ 2
//! - Li_n(0) = 0
//! - Li_2(z) + Li_2(1 − z) = π²/6 − ln(z) ln(1 − z)
//! - Li_2(z) + Li_2(1/z) = −π²/6 − ln²(−z)/2
//!
//! # Algorithms
//!
//! - Li_2 sums Σ B_j u^{j+1}/(j+1)! in u = −ln(1 − z) after mapping z
//!   into |z| ≤ 1, Re z ≤ 1/2.
//! - Li_3 and Li_4 sum the defining series for |z| ≤ 1/2, use
//!   Li_n(z) = Σ_{k≠n−1} ζ(n−k) μᵏ/k! + μⁿ⁻¹/(n−1)! (H_{n−1} − ln(−μ)),
//!   μ = ln z, for 1/2 < |z| < 2, and the inversion relation beyond.

use num_complex::Complex64;
use num_traits::{One, Zero};

use polylog22_core::{clog, zeta_nonpositive, BERNOULLI_EVEN, PI2, PI4, ZETA2, ZETA3, ZETA4};
use polylog22_series::{polylog_series, SeriesOptions};

// |z| at or below which the defining series is summed directly
const SERIES_RADIUS: f64 = 0.5;
// |z| at or above which Li3/Li4 use inversion
const INVERSION_RADIUS: f64 = 2.0;
// Number of Bernoulli terms in the Li2 expansion; |u| ≤ 1.5 needs 13
const DILOG_TERMS: usize = 19;
const _: () = assert!(DILOG_TERMS <= BERNOULLI_EVEN.len());

/// Li₁(z) = −ln(1 − z).
///
/// Diverges at z = 1.
#[inline]
pub fn li1(z: Complex64) -> Complex64 {
    -clog(Complex64::one() - z)
}

/// The dilogarithm Li₂(z).
pub fn li2(z: Complex64) -> Complex64 {
    let one = Complex64::one();
    if z.is_zero() {
        return Complex64::zero();
    }
    if z == one {
        return Complex64::new(ZETA2, 0.0);
    }

    let nz = z.norm_sqr();
    if z.re <= 0.5 {
        if nz > 1.0 {
            // z → 1/z
            let l = clog(-z);
            -dilog_bernoulli(-clog(one - z.inv())) - ZETA2 - 0.5 * l * l
        } else {
            dilog_bernoulli(-clog(one - z))
        }
    } else if nz <= 2.0 * z.re {
        // z → 1 − z, valid inside |z − 1| ≤ 1
        let l = clog(z);
        -dilog_bernoulli(-l) + ZETA2 - l * clog(one - z)
    } else {
        let l = clog(-z);
        -dilog_bernoulli(-clog(one - z.inv())) - ZETA2 - 0.5 * l * l
    }
}

/// Σ_{j≥0} B_j u^{j+1}/(j+1)!, which equals Li₂(1 − e^{−u}).
fn dilog_bernoulli(u: Complex64) -> Complex64 {
    let u2 = u * u;
    let mut sum = u - 0.25 * u2;
    let mut power = u;
    let mut factorial = 1.0;
    for j in 1..=DILOG_TERMS {
        power *= u2;
        let k = (2 * j) as f64;
        factorial *= k * (k + 1.0);
        sum += power * (BERNOULLI_EVEN[j - 1] / factorial);
    }
    sum
}

/// The trilogarithm Li₃(z).
pub fn li3(z: Complex64) -> Complex64 {
    if z.is_zero() {
        return Complex64::zero();
    }
    if z == Complex64::one() {
        return Complex64::new(ZETA3, 0.0);
    }

    let r = z.norm();
    if r <= SERIES_RADIUS {
        direct_series(3, z)
    } else if r < INVERSION_RADIUS {
        log_expansion(3, z)
    } else {
        let l = clog(-z);
        direct_series(3, z.inv()) - l * l * l / 6.0 - PI2 / 6.0 * l
    }
}

/// The tetralogarithm Li₄(z).
pub fn li4(z: Complex64) -> Complex64 {
    if z.is_zero() {
        return Complex64::zero();
    }
    if z == Complex64::one() {
        return Complex64::new(ZETA4, 0.0);
    }

    let r = z.norm();
    if r <= SERIES_RADIUS {
        direct_series(4, z)
    } else if r < INVERSION_RADIUS {
        log_expansion(4, z)
    } else {
        let l = clog(-z);
        let l2 = l * l;
        -direct_series(4, z.inv()) - l2 * l2 / 24.0 - PI2 / 12.0 * l2 - 7.0 * PI4 / 360.0
    }
}

/// Li_n(z) for `order` in 1..=4; `None` for any other order.
pub fn polylog(order: u32, z: Complex64) -> Option<Complex64> {
    match order {
        1 => Some(li1(z)),
        2 => Some(li2(z)),
        3 => Some(li3(z)),
        4 => Some(li4(z)),
        _ => None,
    }
}

fn direct_series(order: u32, z: Complex64) -> Complex64 {
    let sum = polylog_series(order, z, &SeriesOptions::default());
    debug_assert!(sum.converged, "series for |z| <= 1/2 must converge");
    sum.value
}

fn zeta_positive(s: usize) -> f64 {
    match s {
        2 => ZETA2,
        3 => ZETA3,
        _ => ZETA4,
    }
}

/// Expansion of Li_n around z = 1 in powers of μ = ln z; converges for |μ| < 2π.
fn log_expansion(order: u32, z: Complex64) -> Complex64 {
    let n = order as usize;
    let mu = clog(z);
    let harmonic: f64 = (1..n).map(|j| 1.0 / j as f64).sum();

    let mut sum = Complex64::zero();
    // μᵏ/k!
    let mut power = Complex64::one();
    for k in 0.. {
        let term = if k + 1 < n {
            power * zeta_positive(n - k)
        } else if k + 1 == n {
            power * (harmonic - clog(-mu))
        } else {
            let Some(zeta) = zeta_nonpositive(k - n) else {
                break;
            };
            power * zeta
        };
        sum += term;
        if k > n && !term.is_zero() && term.norm() <= f64::EPSILON * sum.norm() {
            break;
        }
        power = power * mu / (k + 1) as f64;
    }
    sum
}
