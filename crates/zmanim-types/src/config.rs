use serde::{Deserialize, Serialize};

use crate::error::ZmanimError;

/// Default atmospheric refraction at the horizon, in degrees (34 arcminutes).
pub const DEFAULT_REFRACTION: f64 = 34.0 / 60.0;
/// Default apparent solar radius, in degrees (16 arcminutes).
pub const DEFAULT_SOLAR_RADIUS: f64 = 16.0 / 60.0;
/// Default mean earth radius used for the elevation dip, in kilometers.
pub const DEFAULT_EARTH_RADIUS_KM: f64 = 6356.9;

/// Physical constants used when adjusting the geometric zenith.
///
/// Built through [`CalculatorConfigBuilder`] or deserialized; both paths
/// validate. Missing fields in serialized form take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCalculatorConfig")]
pub struct CalculatorConfig {
    refraction: f64,
    solar_radius: f64,
    earth_radius_km: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            refraction: DEFAULT_REFRACTION,
            solar_radius: DEFAULT_SOLAR_RADIUS,
            earth_radius_km: DEFAULT_EARTH_RADIUS_KM,
        }
    }
}

impl CalculatorConfig {
    pub fn new() -> Self { Self::default() }

    pub fn builder() -> CalculatorConfigBuilder { CalculatorConfigBuilder::new() }

    /// Refraction in degrees.
    pub fn refraction(&self) -> f64 { self.refraction }
    /// Solar radius in degrees.
    pub fn solar_radius(&self) -> f64 { self.solar_radius }
    /// Earth radius in kilometers.
    pub fn earth_radius_km(&self) -> f64 { self.earth_radius_km }
}

#[derive(Deserialize)]
struct RawCalculatorConfig {
    refraction: Option<f64>,
    solar_radius: Option<f64>,
    earth_radius_km: Option<f64>,
}

impl TryFrom<RawCalculatorConfig> for CalculatorConfig {
    type Error = ZmanimError;

    fn try_from(raw: RawCalculatorConfig) -> Result<Self, Self::Error> {
        CalculatorConfigBuilder {
            refraction: raw.refraction,
            solar_radius: raw.solar_radius,
            earth_radius_km: raw.earth_radius_km,
        }
        .build()
    }
}

/// Builder with validation for `CalculatorConfig`.
#[derive(Debug, Default)]
pub struct CalculatorConfigBuilder {
    refraction: Option<f64>,
    solar_radius: Option<f64>,
    earth_radius_km: Option<f64>,
}

impl CalculatorConfigBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn refraction(mut self, degrees: f64) -> Self { self.refraction = Some(degrees); self }
    pub fn solar_radius(mut self, degrees: f64) -> Self { self.solar_radius = Some(degrees); self }
    pub fn earth_radius_km(mut self, km: f64) -> Self { self.earth_radius_km = Some(km); self }

    /// Builds and validates.
    ///
    /// Refraction and solar radius must lie in [0, 5] degrees; the earth radius
    /// must be positive.
    pub fn build(self) -> Result<CalculatorConfig, ZmanimError> {
        let refraction = self.refraction.unwrap_or(DEFAULT_REFRACTION);
        let solar_radius = self.solar_radius.unwrap_or(DEFAULT_SOLAR_RADIUS);
        let earth_radius_km = self.earth_radius_km.unwrap_or(DEFAULT_EARTH_RADIUS_KM);

        if !(0.0..=5.0).contains(&refraction) {
            return Err(ZmanimError::invalid_config(format!(
                "Refraction {} outside [0, 5] degrees",
                refraction
            )));
        }
        if !(0.0..=5.0).contains(&solar_radius) {
            return Err(ZmanimError::invalid_config(format!(
                "Solar radius {} outside [0, 5] degrees",
                solar_radius
            )));
        }
        if !earth_radius_km.is_finite() || earth_radius_km <= 0.0 {
            return Err(ZmanimError::invalid_config(format!(
                "Earth radius {} km must be positive",
                earth_radius_km
            )));
        }

        Ok(CalculatorConfig { refraction, solar_radius, earth_radius_km })
    }
}
