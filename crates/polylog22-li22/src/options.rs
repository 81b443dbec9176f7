//! Evaluation options.

use polylog22_quadrature::QuadratureOptions;
use polylog22_series::SeriesOptions;

use crate::error::{Li22Error, Li22Result};

/// Tunables for [`crate::li22_with_options`] and friends.
///
/// The defaults reproduce every tabulated reference value; the radii only
/// need changing for experiments with the region partition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvalOptions {
    /// Termination policy of every series kernel.
    pub series: SeriesOptions,
    /// Tolerances of the contour quadrature near the unit torus.
    pub quadrature: QuadratureOptions,
    /// Points with min(|x|, |y|, 1/|x|, 1/|y|) above this radius are
    /// integrated instead of summed.
    pub torus_radius: f64,
    /// Below this smaller modulus the direct frames are always used.
    pub direct_radius: f64,
    /// The double kernel is used while |xy| ≤ max(|x|, double_radius).
    pub double_radius: f64,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            series: SeriesOptions::default(),
            quadrature: QuadratureOptions::default(),
            torus_radius: 0.95,
            direct_radius: 0.5,
            double_radius: 0.5,
        }
    }
}

impl EvalOptions {
    /// Checks that every kernel call the classifier can produce stays
    /// inside its convergence domain.
    pub fn validate(&self) -> Li22Result<()> {
        let open_unit = |v: f64| v > 0.0 && v < 1.0;

        if !open_unit(self.torus_radius) {
            return Err(invalid(format!(
                "torus_radius must lie in (0, 1), got {}",
                self.torus_radius
            )));
        }
        if !(self.direct_radius > 0.0 && self.direct_radius <= self.torus_radius) {
            return Err(invalid(format!(
                "direct_radius must lie in (0, torus_radius], got {}",
                self.direct_radius
            )));
        }
        if !open_unit(self.double_radius) {
            return Err(invalid(format!(
                "double_radius must lie in (0, 1), got {}",
                self.double_radius
            )));
        }
        if !(self.series.tolerance > 0.0 && self.series.tolerance < 1.0) {
            return Err(invalid(format!(
                "series tolerance must lie in (0, 1), got {}",
                self.series.tolerance
            )));
        }
        if self.series.max_terms == 0 {
            return Err(invalid("series max_terms must be positive".to_string()));
        }
        if !(self.quadrature.rel_tol > 0.0 && self.quadrature.abs_tol >= 0.0) {
            return Err(invalid(
                "quadrature tolerances must be non-negative with rel_tol > 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn invalid(message: String) -> Li22Error {
    Li22Error::InvalidOptions(message)
}
