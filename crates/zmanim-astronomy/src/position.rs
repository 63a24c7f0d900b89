//! Solar position for an instant, from the NOAA spreadsheet formulas.

use chrono::{DateTime, TimeZone, Timelike};
use zmanim_types::GeoCoordinate;

use crate::ephemeris::{declination, equation_of_time, julian_centuries, julian_day};

/// Where the sun is in the observer's sky.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Geometric elevation above the horizon in degrees, without refraction.
    pub elevation: f64,
    /// Azimuth in degrees clockwise from true north.
    pub azimuth: f64,
}

impl SolarPosition {
    pub fn zenith(&self) -> f64 {
        90.0 - self.elevation
    }
}

/// Position of the sun at `instant` as seen from `coord`.
pub fn solar_position<Z: TimeZone>(instant: &DateTime<Z>, coord: &GeoCoordinate) -> SolarPosition {
    let utc = instant.naive_utc();
    let minutes = f64::from(utc.num_seconds_from_midnight()) / 60.0
        + f64::from(utc.nanosecond()) / 60.0e9;
    let t = julian_centuries(julian_day(utc.date()) + minutes / 1440.0);

    let eot = equation_of_time(t);
    let dec = declination(t).to_radians();
    let lat = coord.lat().to_radians();

    let true_solar_minutes = (minutes + eot + 4.0 * coord.lng()).rem_euclid(1440.0);
    let hour_angle = (true_solar_minutes / 4.0 - 180.0).to_radians();

    let cos_zenith =
        (lat.sin() * dec.sin() + lat.cos() * dec.cos() * hour_angle.cos()).clamp(-1.0, 1.0);
    let elevation = 90.0 - cos_zenith.acos().to_degrees();

    let azimuth = (hour_angle.sin())
        .atan2(hour_angle.cos() * lat.sin() - dec.tan() * lat.cos())
        .to_degrees()
        + 180.0;

    SolarPosition { elevation, azimuth: azimuth.rem_euclid(360.0) }
}
