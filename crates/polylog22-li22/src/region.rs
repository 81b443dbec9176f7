//! Partition of the (x, y) plane into evaluation regions.
//!
//! With lo = min(|x|, |y|) and hi = max(|x|, |y|) the checks run in order:
//!
//! 1. x = 0 or y = 0: [`Region::Zero`].
//! 2. min(lo, 1/hi) > torus_radius: [`Region::Torus`].
//! 3. lo ≤ direct_radius or lo ≤ 1/hi: sum at (x, y) or (y, x), whichever
//!    has the smaller first modulus.
//! 4. Otherwise sum at (1/x, 1/y) or (1/y, 1/x).
//!
//! In steps 3 and 4 the first argument of the summed pair has modulus at
//! most torus_radius, so every kernel call converges geometrically.

use std::fmt;

use num_complex::Complex64;

use polylog22_core::is_finite;

use crate::error::{Li22Error, Li22Result};
use crate::options::EvalOptions;

/// Series kernel used on the mapped pair (u, v).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kernel {
    /// Nested double series, contraction ratio max(|u|, |uv|).
    Double,
    /// u-series with closed-form coefficients in uv.
    Resummed,
}

impl Kernel {
    /// Picks the kernel for the pair (u, v), |u| < 1.
    pub fn for_pair(u: Complex64, v: Complex64, double_radius: f64) -> Self {
        if (u * v).norm() <= u.norm().max(double_radius) {
            Kernel::Double
        } else {
            Kernel::Resummed
        }
    }
}

/// Where a point is evaluated and how it is mapped there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// One argument is zero; the value is exactly zero.
    Zero,
    /// Series at (x, y).
    Direct(Kernel),
    /// Series at (y, x), then the stuffle identity.
    Stuffle(Kernel),
    /// Series at (1/x, 1/y), then the inversion identity.
    Inversion(Kernel),
    /// Series at (1/y, 1/x), then stuffle and inversion.
    InversionStuffle(Kernel),
    /// Both moduli near 1: contour quadrature of the integral representation.
    Torus,
}

impl Region {
    /// Classifies (x, y) under the thresholds in `options`.
    pub fn classify(x: Complex64, y: Complex64, options: &EvalOptions) -> Li22Result<Self> {
        if !is_finite(x) || !is_finite(y) {
            return Err(Li22Error::NonFinite { x, y });
        }
        let zero = Complex64::new(0.0, 0.0);
        if x == zero || y == zero {
            return Ok(Region::Zero);
        }

        let (ax, ay) = (x.norm(), y.norm());
        let lo = ax.min(ay);
        let inv_hi = ax.max(ay).recip();
        if lo.min(inv_hi) > options.torus_radius {
            return Ok(Region::Torus);
        }

        let region = if lo <= options.direct_radius || lo <= inv_hi {
            if ax <= ay {
                Region::Direct(Kernel::for_pair(x, y, options.double_radius))
            } else {
                Region::Stuffle(Kernel::for_pair(y, x, options.double_radius))
            }
        } else if ax >= ay {
            Region::Inversion(Kernel::for_pair(x.inv(), y.inv(), options.double_radius))
        } else {
            Region::InversionStuffle(Kernel::for_pair(y.inv(), x.inv(), options.double_radius))
        };
        Ok(region)
    }

    /// The pair the series kernel runs on, if any.
    pub fn mapped_pair(self, x: Complex64, y: Complex64) -> Option<(Complex64, Complex64)> {
        match self {
            Region::Direct(_) => Some((x, y)),
            Region::Stuffle(_) => Some((y, x)),
            Region::Inversion(_) => Some((x.inv(), y.inv())),
            Region::InversionStuffle(_) => Some((y.inv(), x.inv())),
            Region::Zero | Region::Torus => None,
        }
    }

    /// The kernel, for the series regions.
    pub fn kernel(self) -> Option<Kernel> {
        match self {
            Region::Direct(k)
            | Region::Stuffle(k)
            | Region::Inversion(k)
            | Region::InversionStuffle(k) => Some(k),
            Region::Zero | Region::Torus => None,
        }
    }

    /// Short diagnostic name.
    pub fn name(self) -> &'static str {
        match self {
            Region::Zero => "zero",
            Region::Direct(Kernel::Double) => "direct/double",
            Region::Direct(Kernel::Resummed) => "direct/resummed",
            Region::Stuffle(Kernel::Double) => "stuffle/double",
            Region::Stuffle(Kernel::Resummed) => "stuffle/resummed",
            Region::Inversion(Kernel::Double) => "inversion/double",
            Region::Inversion(Kernel::Resummed) => "inversion/resummed",
            Region::InversionStuffle(Kernel::Double) => "inversion-stuffle/double",
            Region::InversionStuffle(Kernel::Resummed) => "inversion-stuffle/resummed",
            Region::Torus => "torus",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
