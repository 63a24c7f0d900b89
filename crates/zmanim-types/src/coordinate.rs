use chrono::{NaiveDate, NaiveTime, Offset, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ZmanimError;

/// An observer location: latitude, longitude, elevation and civil time zone.
///
/// Longitude is east-positive. Values are validated on construction, by every
/// setter and on deserialization; an out-of-range value is rejected, never
/// clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoCoordinate")]
pub struct GeoCoordinate {
    name: Option<String>,
    lat: f64,
    lng: f64,
    elevation: f64,
    tz: Tz,
}

/// Unvalidated wire form of [`GeoCoordinate`].
#[derive(Deserialize)]
struct RawGeoCoordinate {
    #[serde(default)]
    name: Option<String>,
    lat: f64,
    lng: f64,
    #[serde(default)]
    elevation: f64,
    tz: Tz,
}

impl TryFrom<RawGeoCoordinate> for GeoCoordinate {
    type Error = ZmanimError;

    fn try_from(raw: RawGeoCoordinate) -> Result<Self, Self::Error> {
        let mut coord = Self::new(raw.lat, raw.lng, raw.tz)?.with_elevation(raw.elevation)?;
        coord.name = raw.name;
        Ok(coord)
    }
}

impl GeoCoordinate {
    /// Creates a sea-level coordinate in the given zone.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range input.
    pub fn new(lat: f64, lng: f64, tz: Tz) -> Result<Self, ZmanimError> {
        Ok(Self {
            name: None,
            lat: check_latitude(lat)?,
            lng: check_longitude(lng)?,
            elevation: 0.0,
            tz,
        })
    }

    /// Creates a coordinate from an IANA zone name such as `"America/New_York"`.
    pub fn with_zone_name(lat: f64, lng: f64, zone: &str) -> Result<Self, ZmanimError> {
        let tz: Tz = zone.parse().map_err(|_| ZmanimError::unknown_zone(zone))?;
        Self::new(lat, lng, tz)
    }

    pub fn with_elevation(mut self, meters: f64) -> Result<Self, ZmanimError> {
        self.set_elevation(meters)?;
        Ok(self)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Display name, if any.
    pub fn name(&self) -> Option<&str> { self.name.as_deref() }
    /// Latitude in degrees, north-positive.
    pub fn lat(&self) -> f64 { self.lat }
    /// Longitude in degrees, east-positive.
    pub fn lng(&self) -> f64 { self.lng }
    /// Elevation above sea level in meters.
    pub fn elevation(&self) -> f64 { self.elevation }
    /// IANA time zone used to label results.
    pub fn tz(&self) -> Tz { self.tz }

    pub fn set_latitude(&mut self, lat: f64) -> Result<(), ZmanimError> {
        self.lat = check_latitude(lat)?;
        Ok(())
    }

    pub fn set_longitude(&mut self, lng: f64) -> Result<(), ZmanimError> {
        self.lng = check_longitude(lng)?;
        Ok(())
    }

    pub fn set_elevation(&mut self, meters: f64) -> Result<(), ZmanimError> {
        if !meters.is_finite() || meters < 0.0 {
            return Err(ZmanimError::InvalidElevation { value: meters });
        }
        self.elevation = meters;
        Ok(())
    }

    pub fn set_time_zone(&mut self, tz: Tz) {
        self.tz = tz;
    }

    /// UTC offset of the zone in seconds, taken at 00:00 UTC of `date`.
    pub fn utc_offset_seconds(&self, date: NaiveDate) -> i32 {
        let midnight = date.and_time(NaiveTime::MIN);
        self.tz.offset_from_utc_datetime(&midnight).fix().local_minus_utc()
    }

    /// Difference in minutes between local mean time at this longitude and the
    /// zone's standard clock on `date`.
    ///
    /// A location exactly on its zone meridian returns zero; Lakewood, NJ
    /// (about 74.2 W, zone meridian 75 W) returns roughly +3.2 minutes.
    pub fn local_mean_time_offset_minutes(&self, date: NaiveDate) -> f64 {
        self.lng * 4.0 - f64::from(self.utc_offset_seconds(date)) / 60.0
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{} ", name)?;
        }
        write!(
            f,
            "({:.5}°, {:.5}°, {:.1} m, {})",
            self.lat,
            self.lng,
            self.elevation,
            self.tz.name()
        )
    }
}

fn check_latitude(lat: f64) -> Result<f64, ZmanimError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(lat)
    } else {
        Err(ZmanimError::InvalidLatitude { value: lat })
    }
}

fn check_longitude(lng: f64) -> Result<f64, ZmanimError> {
    if (-180.0..=180.0).contains(&lng) {
        Ok(lng)
    } else {
        Err(ZmanimError::InvalidLongitude { value: lng })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            GeoCoordinate::new(90.5, 0.0, Tz::UTC),
            Err(ZmanimError::InvalidLatitude { .. })
        ));
        assert!(matches!(
            GeoCoordinate::new(0.0, -180.01, Tz::UTC),
            Err(ZmanimError::InvalidLongitude { .. })
        ));
        assert!(GeoCoordinate::new(f64::NAN, 0.0, Tz::UTC).is_err());
    }

    #[test]
    fn test_negative_elevation_rejected() {
        let coord = GeoCoordinate::new(31.778, 35.2354, Tz::Asia__Jerusalem).unwrap();
        let err = coord.clone().with_elevation(-5.0).unwrap_err();
        assert_eq!(err, ZmanimError::InvalidElevation { value: -5.0 });

        let mut coord = coord.with_elevation(754.0).unwrap();
        assert!(coord.set_elevation(-1.0).is_err());
        assert_eq!(coord.elevation(), 754.0);
    }

    #[test]
    fn test_setter_keeps_value_on_error() {
        let mut coord = GeoCoordinate::new(40.0, -74.0, Tz::America__New_York).unwrap();
        assert!(coord.set_latitude(120.0).is_err());
        assert_eq!(coord.lat(), 40.0);
        coord.set_longitude(-75.5).unwrap();
        assert_eq!(coord.lng(), -75.5);
    }

    #[test]
    fn test_zone_name() {
        let coord = GeoCoordinate::with_zone_name(40.08213, -74.2097, "America/New_York").unwrap();
        assert_eq!(coord.tz(), Tz::America__New_York);
        assert!(matches!(
            GeoCoordinate::with_zone_name(0.0, 0.0, "Mars/Olympus_Mons"),
            Err(ZmanimError::UnknownTimeZone { .. })
        ));
    }

    #[test]
    fn test_utc_offset_tracks_dst() {
        let coord = GeoCoordinate::new(40.08213, -74.2097, Tz::America__New_York).unwrap();
        let winter = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let summer = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();
        assert_eq!(coord.utc_offset_seconds(winter), -5 * 3600);
        assert_eq!(coord.utc_offset_seconds(summer), -4 * 3600);
    }

    #[test]
    fn test_local_mean_time_offset() {
        let coord = GeoCoordinate::new(40.08213, -74.2097, Tz::America__New_York).unwrap();
        let winter = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let offset = coord.local_mean_time_offset_minutes(winter);
        assert!((offset - 3.1612).abs() < 1e-9, "offset was {}", offset);
    }

    #[test]
    fn test_serde_round_trip() {
        let coord = GeoCoordinate::new(40.08213, -74.2097, Tz::America__New_York)
            .unwrap()
            .with_name("Lakewood, NJ");
        let json = serde_json::to_string(&coord).unwrap();
        let back: GeoCoordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coord);
        assert_eq!(back.name(), Some("Lakewood, NJ"));
    }

    #[test]
    fn test_deserialize_validates() {
        let err = serde_json::from_str::<GeoCoordinate>(
            r#"{"lat": 200.0, "lng": 0.0, "elevation": 0.0, "tz": "UTC"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Latitude 200"), "{}", err);

        let err = serde_json::from_str::<GeoCoordinate>(
            r#"{"lat": 31.778, "lng": 35.2354, "elevation": -300.0, "tz": "Asia/Jerusalem"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Elevation -300"), "{}", err);

        let json = r#"{"lat": 31.778, "lng": 35.2354, "tz": "Asia/Jerusalem"}"#;
        let coord: GeoCoordinate = serde_json::from_str(json).unwrap();
        assert_eq!(coord.elevation(), 0.0);
        assert_eq!(coord.name(), None);
    }
}
