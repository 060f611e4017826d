//! Adiabatic atmosphere used to scale aerodynamic drag with altitude.
//!
//! Density relative to sea level follows `rho / rho0 = k^alpha` with
//! `k = 1 - a * y / T0`. The model stops being meaningful once `k` reaches
//! zero (about 44.3 km for the default constants); above that height the
//! projectile is treated as flying in vacuum.

/// Temperature ratio `k = 1 - a * y / T0` at altitude `altitude_m`.
///
/// Values `<= 0` mean the altitude is above the top of the modeled
/// atmosphere.
#[inline]
pub fn density_factor(altitude_m: f64, lapse_rate: f64, sea_level_temperature: f64) -> f64 {
    1.0 - lapse_rate * altitude_m / sea_level_temperature
}

/// Density ratio `k^alpha`, or `None` when `k <= 0`.
///
/// A non-positive base raised to a fractional exponent has no real value,
/// so callers fall back to drag-free flight instead.
#[inline]
pub fn density_ratio(k: f64, exponent: f64) -> Option<f64> {
    if k > 0.0 {
        Some(k.powf(exponent))
    } else {
        None
    }
}

/// Altitude at which `k` reaches zero (m).
pub fn atmosphere_ceiling(lapse_rate: f64, sea_level_temperature: f64) -> f64 {
    sea_level_temperature / lapse_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DENSITY_EXPONENT, LAPSE_RATE_K_PER_M, SEA_LEVEL_TEMPERATURE_K};

    #[test]
    fn test_sea_level_factor_is_one() {
        let k = density_factor(0.0, LAPSE_RATE_K_PER_M, SEA_LEVEL_TEMPERATURE_K);
        assert_eq!(k, 1.0);
        assert_eq!(density_ratio(k, DENSITY_EXPONENT), Some(1.0));
    }

    #[test]
    fn test_density_decreases_with_altitude() {
        let k_5km = density_factor(5000.0, LAPSE_RATE_K_PER_M, SEA_LEVEL_TEMPERATURE_K);
        let k_20km = density_factor(20000.0, LAPSE_RATE_K_PER_M, SEA_LEVEL_TEMPERATURE_K);
        let r_5km = density_ratio(k_5km, DENSITY_EXPONENT).unwrap();
        let r_20km = density_ratio(k_20km, DENSITY_EXPONENT).unwrap();
        assert!(r_5km < 1.0);
        assert!(r_20km < r_5km);
        assert!(r_20km > 0.0);
    }

    #[test]
    fn test_factor_at_10km() {
        let k = density_factor(10000.0, LAPSE_RATE_K_PER_M, SEA_LEVEL_TEMPERATURE_K);
        assert!((k - (1.0 - 65.0 / 288.0)).abs() < 1e-15);
    }

    #[test]
    fn test_ceiling() {
        let ceiling = atmosphere_ceiling(LAPSE_RATE_K_PER_M, SEA_LEVEL_TEMPERATURE_K);
        assert!((ceiling - 44307.69).abs() < 0.01);
        let k = density_factor(ceiling, LAPSE_RATE_K_PER_M, SEA_LEVEL_TEMPERATURE_K);
        assert!(k.abs() < 1e-12);
    }

    #[test]
    fn test_no_ratio_above_ceiling() {
        let k = density_factor(50000.0, LAPSE_RATE_K_PER_M, SEA_LEVEL_TEMPERATURE_K);
        assert!(k < 0.0);
        assert_eq!(density_ratio(k, DENSITY_EXPONENT), None);
        assert_eq!(density_ratio(0.0, DENSITY_EXPONENT), None);
    }
}
