//! Property-based tests for the summation kernels.

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use proptest::prelude::*;

    use crate::{double_series, polylog_series, resummed_series, SeriesOptions};

    // Complex numbers with modulus in [lo, hi)
    fn annulus(lo: f64, hi: f64) -> impl Strategy<Value = Complex64> {
        (lo..hi, -std::f64::consts::PI..std::f64::consts::PI)
            .prop_map(|(r, theta)| Complex64::from_polar(r, theta))
    }

    proptest! {
        #[test]
        fn log_series_matches_closed_form(z in annulus(0.0, 0.6)) {
            let sum = polylog_series(1, z, &SeriesOptions::default());
            prop_assert!(sum.converged);
            let expected = -(Complex64::new(1.0, 0.0) - z).ln();
            prop_assert!((sum.value - expected).norm() < 1e-14);
        }

        #[test]
        fn kernels_agree_where_both_converge(
            x in annulus(0.2, 0.5),
            ratio in 1.3f64..1.8,
            phase in -std::f64::consts::PI..std::f64::consts::PI,
        ) {
            // |x| < |a| < 1 keeps both kernels in their convergence domains
            let a_norm = (ratio * x.norm()).min(0.9);
            let a = Complex64::from_polar(a_norm, phase);
            let y = a / x;
            let opts = SeriesOptions::default();
            let li2_a = polylog_series(2, a, &opts).value;
            let direct = double_series(x, y, &opts);
            let resummed = resummed_series(x, a, li2_a, &opts);
            prop_assert!(direct.converged && resummed.converged);
            let scale = direct.value.norm().max(1e-300);
            prop_assert!((direct.value - resummed.value).norm() / scale < 1e-12);
        }

        #[test]
        fn double_series_is_conjugation_symmetric(x in annulus(0.0, 0.8), y in annulus(0.0, 1.0)) {
            let opts = SeriesOptions::default();
            let v = double_series(x, y, &opts).value;
            let w = double_series(x.conj(), y.conj(), &opts).value;
            prop_assert!((v.conj() - w).norm() <= 1e-15 * v.norm().max(1.0));
        }
    }
}
