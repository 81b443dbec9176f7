//! Bernoulli numbers and zeta values at non-positive integers.
//!
//! Only the even-index Bernoulli numbers are tabulated; `B₁ = −1/2` and
//! `B_{2k+1} = 0` for `k ≥ 1` are handled by the callers.

/// `BERNOULLI_EVEN[j - 1] = B_{2j}` for `j = 1..=32`.
pub const BERNOULLI_EVEN: [f64; 32] = [
    0.16666666666666666,
    -0.03333333333333333,
    0.023809523809523808,
    -0.03333333333333333,
    0.07575757575757576,
    -0.2531135531135531,
    1.1666666666666667,
    -7.092156862745098,
    54.971177944862156,
    -529.1242424242424,
    6192.123188405797,
    -86580.25311355312,
    1425517.1666666667,
    -27298231.067816094,
    601580873.9006424,
    -15116315767.092157,
    429614643061.1667,
    -13711655205088.332,
    488332318973593.2,
    -1.9296579341940068e16,
    8.416930475736826e17,
    -4.0338071854059454e19,
    2.1150748638081993e21,
    -1.2086626522296526e23,
    7.500866746076964e24,
    -5.038778101481069e26,
    3.6528776484818122e28,
    -2.849876930245088e30,
    2.3865427499683627e32,
    -2.1399949257225335e34,
    2.0500975723478097e36,
    -2.093800591134638e38,
];

/// Returns `B_{2j}` for `1 ≤ j ≤ 32`.
#[inline]
pub fn bernoulli_even(j: usize) -> Option<f64> {
    if j == 0 {
        return Some(1.0);
    }
    BERNOULLI_EVEN.get(j - 1).copied()
}

/// Returns ζ(−k) for `k ≥ 0`, or `None` beyond the tabulated range.
///
/// ζ(0) = −1/2, ζ(−k) = −B_{k+1}/(k+1) for odd k, and 0 for even k > 0.
pub fn zeta_nonpositive(k: usize) -> Option<f64> {
    if k == 0 {
        return Some(-0.5);
    }
    if k % 2 == 0 {
        return Some(0.0);
    }
    bernoulli_even((k + 1) / 2).map(|b| -b / (k + 1) as f64)
}
