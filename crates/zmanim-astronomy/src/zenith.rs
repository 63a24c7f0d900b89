//! Zenith adjustment for rise and set.
//!
//! The sun is considered risen when its upper limb clears the visible horizon,
//! so the geometric zenith is pushed down by the solar radius, refraction and
//! the dip of the horizon seen from above sea level. Twilight zeniths are
//! degree-based definitions and are used as given.

use zmanim_types::{CalculatorConfig, GEOMETRIC_ZENITH};

/// Dip of the visible horizon, in degrees, for an observer `elevation_m` meters
/// above the surrounding terrain.
pub fn elevation_adjustment(elevation_m: f64, earth_radius_km: f64) -> f64 {
    (earth_radius_km / (earth_radius_km + elevation_m / 1000.0))
        .acos()
        .to_degrees()
}

/// Zenith actually used for rise/set computations.
///
/// Only an exact geometric zenith (90°) is adjusted.
pub fn adjust_zenith(zenith: f64, elevation_m: f64, config: &CalculatorConfig) -> f64 {
    if zenith == GEOMETRIC_ZENITH {
        zenith
            + config.solar_radius()
            + config.refraction()
            + elevation_adjustment(elevation_m, config.earth_radius_km())
    } else {
        zenith
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zmanim_types::CIVIL_ZENITH;

    #[test]
    fn test_elevation_adjustment_zero_at_sea_level() {
        assert_eq!(elevation_adjustment(0.0, 6356.9), 0.0);
    }

    #[test]
    fn test_elevation_adjustment_increases() {
        let mut previous = 0.0;
        for meters in [1.0, 10.0, 100.0, 754.0, 2000.0, 8848.0] {
            let dip = elevation_adjustment(meters, 6356.9);
            assert!(dip > previous, "{} m -> {}", meters, dip);
            previous = dip;
        }
        // ~0.88° for Jerusalem's 754 m.
        let jerusalem = elevation_adjustment(754.0, 6356.9);
        assert!((jerusalem - 0.8825).abs() < 0.001, "{}", jerusalem);
    }

    #[test]
    fn test_adjust_only_geometric() {
        let config = CalculatorConfig::default();
        let sea_level = adjust_zenith(GEOMETRIC_ZENITH, 0.0, &config);
        assert!((sea_level - (90.0 + 50.0 / 60.0)).abs() < 1e-12);

        assert_eq!(adjust_zenith(CIVIL_ZENITH, 500.0, &config), CIVIL_ZENITH);
        assert_eq!(adjust_zenith(90.0001, 500.0, &config), 90.0001);
    }

    #[test]
    fn test_custom_constants() {
        let config = CalculatorConfig::builder().refraction(0.0).solar_radius(0.0).build().unwrap();
        assert_eq!(adjust_zenith(GEOMETRIC_ZENITH, 0.0, &config), GEOMETRIC_ZENITH);
    }
}
