//! Property-based tests for the classical polylogarithms.

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use proptest::prelude::*;

    use polylog22_core::{clog, PI2, PI4, ZETA2};

    use crate::{li2, li3, li4};

    // Off-axis complex numbers with modulus in [lo, hi)
    fn off_axis(lo: f64, hi: f64) -> impl Strategy<Value = Complex64> {
        (lo..hi, 0.05f64..3.09, prop::bool::ANY).prop_map(|(r, theta, lower)| {
            let theta = if lower { -theta } else { theta };
            Complex64::from_polar(r, theta)
        })
    }

    fn close(a: Complex64, b: Complex64, tol: f64) -> bool {
        (a - b).norm() <= tol * a.norm().max(b.norm()).max(1.0)
    }

    proptest! {
        #[test]
        fn dilog_inversion(z in off_axis(0.55, 1.8)) {
            // Li2(z) + Li2(1/z) = −π²/6 − ln²(−z)/2
            let l = clog(-z);
            let rhs = -ZETA2 - 0.5 * l * l;
            prop_assert!(close(li2(z) + li2(z.inv()), rhs, 1e-14));
        }

        #[test]
        fn trilog_inversion(z in off_axis(0.55, 1.8)) {
            // Li3(z) − Li3(1/z) = −ln³(−z)/6 − π² ln(−z)/6
            let l = clog(-z);
            let rhs = -l * l * l / 6.0 - PI2 / 6.0 * l;
            prop_assert!(close(li3(z) - li3(z.inv()), rhs, 1e-14));
        }

        #[test]
        fn tetralog_inversion(z in off_axis(0.55, 1.8)) {
            // Li4(z) + Li4(1/z) = −ln⁴(−z)/24 − π² ln²(−z)/12 − 7π⁴/360
            let l = clog(-z);
            let l2 = l * l;
            let rhs = -l2 * l2 / 24.0 - PI2 / 12.0 * l2 - 7.0 * PI4 / 360.0;
            prop_assert!(close(li4(z) + li4(z.inv()), rhs, 1e-14));
        }

        #[test]
        fn conjugation_symmetry(z in off_axis(0.01, 10.0)) {
            prop_assert!(close(li2(z.conj()), li2(z).conj(), 1e-15));
            prop_assert!(close(li3(z.conj()), li3(z).conj(), 1e-15));
            prop_assert!(close(li4(z.conj()), li4(z).conj(), 1e-15));
        }

        #[test]
        fn duplication(z in off_axis(0.05, 0.95)) {
            // Li2(z²) = 2 (Li2(z) + Li2(−z))
            prop_assert!(close(li2(z * z), 2.0 * (li2(z) + li2(-z)), 1e-14));
        }
    }
}
