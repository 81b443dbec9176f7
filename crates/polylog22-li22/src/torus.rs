//! Li22 near the unit torus |x| ≈ |y| ≈ 1.
//!
//! Neither series nor functional equation converges well there, so the
//! integral representation
//!
//! Li22(x, y) = −∫₀¹ x ln t Li2(t xy)/(1 − x t) dt
//!
//! is integrated along the parabola t(s) = s + i c s (1 − s). The pole
//! 1/x and the branch point 1/(xy) may sit arbitrarily close to [0, 1];
//! the bend c keeps the path on the side that selects the principal
//! continuation.

use log::debug;
use num_complex::Complex64;

use polylog22_core::{clog, is_exactly_real};
use polylog22_quadrature::{adaptive_integrate, AdaptiveResult, QuadratureOptions};
use polylog22_special::li2;

use crate::error::{Li22Error, Li22Result};

/// Largest bend of the contour.
const MAX_BEND: f64 = 0.25;

/// Integrates the representation for nonzero finite (x, y).
pub fn torus_integral(
    x: Complex64,
    y: Complex64,
    options: &QuadratureOptions,
) -> Li22Result<AdaptiveResult> {
    let a = x * y;
    let c = contour_bend(x, y);

    let integrand = |s: f64| {
        if s == 0.0 {
            return Complex64::new(0.0, 0.0);
        }
        let t = Complex64::new(s, c * s * (1.0 - s));
        let dt = Complex64::new(1.0, c * (1.0 - 2.0 * s));
        -x * clog(t) * li2(t * a) / (1.0 - x * t) * dt
    };

    let result = adaptive_integrate(&integrand, 0.0, 1.0, options);
    debug!(
        "torus quadrature at ({x}, {y}): bend {c}, {} intervals, {} evaluations, error {:e}",
        result.intervals, result.evaluations, result.error
    );

    if result.converged {
        Ok(result)
    } else {
        Err(Li22Error::Quadrature {
            intervals: result.intervals,
            error: result.error,
        })
    }
}

/// Bend of the path: below every singular point on the upper side and
/// above every one on the lower side.
///
/// Points on the real axis count as upper, as the real-axis convention
/// x − i0, xy − i0 moves 1/x and 1/(xy) up.
fn contour_bend(x: Complex64, y: Complex64) -> f64 {
    let real = is_exactly_real(x) && is_exactly_real(y);

    let mut any_up = false;
    let mut any_down = false;
    // Admissible bends: lower < c < upper
    let mut lower = -MAX_BEND;
    let mut upper = MAX_BEND;

    for p in [x.inv(), (x * y).inv()] {
        let up = real || p.im >= 0.0;
        if up {
            any_up = true;
        } else {
            any_down = true;
        }

        if p.re > 0.0 && p.re < 1.0 {
            let slope = p.im / (p.re * (1.0 - p.re));
            if up {
                upper = upper.min(slope);
            } else {
                lower = lower.max(slope);
            }
        }
    }

    match (any_up, any_down) {
        (true, false) => -MAX_BEND,
        (false, true) => MAX_BEND,
        _ => 0.5 * (lower + upper),
    }
}
