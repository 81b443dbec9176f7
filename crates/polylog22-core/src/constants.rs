//! Mathematical constants.

use std::f64::consts::PI;

/// π²
pub const PI2: f64 = PI * PI;

/// π⁴
pub const PI4: f64 = PI2 * PI2;

/// ζ(2) = π²/6
pub const ZETA2: f64 = 1.644_934_066_848_226_4;

/// ζ(3), Apéry's constant
pub const ZETA3: f64 = 1.202_056_903_159_594_3;

/// ζ(4) = π⁴/90
pub const ZETA4: f64 = 1.082_323_233_711_138_2;
