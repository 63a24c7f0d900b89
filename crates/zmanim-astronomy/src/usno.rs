//! US Naval Observatory sunrise/sunset algorithm.
//!
//! The almanac method from the *Almanac for Computers* (1990). Lower precision
//! than NOAA; it works from the day of the year and uses east-positive
//! longitudes directly.

use chrono::{Datelike, NaiveDate};
use log::trace;
use zmanim_types::{CalculatorConfig, GEOMETRIC_ZENITH, GeoCoordinate, SolarEvent};

use crate::solver::{SolarEventSolver, normalize_hours};

const DEG_PER_HOUR: f64 = 360.0 / 24.0;

/// Sunrise/sunset solver using the USNO almanac algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SunTimesCalculator {
    config: CalculatorConfig,
}

impl SunTimesCalculator {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Noon is the midpoint of sea-level sunrise and sunset.
    fn noon(&self, date: NaiveDate, coord: &GeoCoordinate) -> Option<f64> {
        let sunrise = self.utc_sunrise(date, coord, GEOMETRIC_ZENITH, false)?;
        let sunset = self.utc_sunset(date, coord, GEOMETRIC_ZENITH, false)?;
        let day_length = (sunset - sunrise).rem_euclid(24.0);
        normalize_hours(sunrise + day_length / 2.0)
    }
}

impl SolarEventSolver for SunTimesCalculator {
    fn name(&self) -> &'static str {
        "USNO"
    }

    fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    fn compute_utc(
        &self,
        date: NaiveDate,
        coord: &GeoCoordinate,
        zenith: f64,
        event: SolarEvent,
    ) -> Option<f64> {
        let hours = match event {
            SolarEvent::Sunrise | SolarEvent::Sunset => normalize_hours(time_utc(
                date.ordinal(),
                coord.lat(),
                coord.lng(),
                zenith,
                event == SolarEvent::Sunrise,
            )),
            SolarEvent::Noon => self.noon(date, coord),
            SolarEvent::Midnight => {
                self.noon(date, coord).and_then(|noon| normalize_hours(noon + 12.0))
            }
        };
        if hours.is_none() {
            trace!("{} at zenith {} does not occur on {} at {}", event, zenith, date, coord);
        }
        hours
    }
}

fn sin_deg(deg: f64) -> f64 { deg.to_radians().sin() }
fn cos_deg(deg: f64) -> f64 { deg.to_radians().cos() }
fn tan_deg(deg: f64) -> f64 { deg.to_radians().tan() }
fn acos_deg(x: f64) -> f64 { x.acos().to_degrees() }
fn asin_deg(x: f64) -> f64 { x.asin().to_degrees() }

fn approx_time_days(day_of_year: u32, hours_from_meridian: f64, is_sunrise: bool) -> f64 {
    let base = if is_sunrise { 6.0 } else { 18.0 };
    f64::from(day_of_year) + (base - hours_from_meridian) / 24.0
}

fn sun_true_longitude(mean_anomaly: f64) -> f64 {
    (mean_anomaly + 1.916 * sin_deg(mean_anomaly) + 0.020 * sin_deg(2.0 * mean_anomaly) + 282.634)
        .rem_euclid(360.0)
}

/// Right ascension in hours, moved into the same quadrant as the longitude.
fn sun_right_ascension_hours(true_longitude: f64) -> f64 {
    let ra = (0.91764 * tan_deg(true_longitude)).atan().to_degrees();
    let longitude_quadrant = (true_longitude / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    (ra + (longitude_quadrant - ra_quadrant)) / DEG_PER_HOUR
}

fn cos_local_hour_angle(true_longitude: f64, latitude: f64, zenith: f64) -> f64 {
    let sin_dec = 0.39782 * sin_deg(true_longitude);
    let cos_dec = cos_deg(asin_deg(sin_dec));
    (cos_deg(zenith) - sin_dec * sin_deg(latitude)) / (cos_dec * cos_deg(latitude))
}

/// UTC hour before normalization. NaN when the event does not occur.
fn time_utc(day_of_year: u32, latitude: f64, longitude: f64, zenith: f64, is_sunrise: bool) -> f64 {
    let hours_from_meridian = longitude / DEG_PER_HOUR;
    let approx = approx_time_days(day_of_year, hours_from_meridian, is_sunrise);
    let mean_anomaly = 0.9856 * approx - 3.289;
    let true_longitude = sun_true_longitude(mean_anomaly);
    let ra_hours = sun_right_ascension_hours(true_longitude);

    let angle = acos_deg(cos_local_hour_angle(true_longitude, latitude, zenith));
    let local_hour = if is_sunrise { 360.0 - angle } else { angle } / DEG_PER_HOUR;
    let local_mean_time = local_hour + ra_hours - 0.06571 * approx - 6.622;
    local_mean_time - hours_from_meridian
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noaa::NoaaCalculator;
    use chrono_tz::Tz;

    fn lakewood() -> GeoCoordinate {
        GeoCoordinate::new(40.08213, -74.2097, Tz::America__New_York).unwrap()
    }

    #[test]
    fn test_close_to_noaa() {
        let usno = SunTimesCalculator::new();
        let noaa = NoaaCalculator::new();
        let coord = lakewood();
        for (m, d) in [(1, 1), (5, 1), (8, 1), (12, 1)] {
            let date = NaiveDate::from_ymd_opt(2023, m, d).unwrap();
            for event in [SolarEvent::Sunrise, SolarEvent::Sunset] {
                let zenith = usno.adjust_zenith(GEOMETRIC_ZENITH, 0.0);
                let a = usno.compute_utc(date, &coord, zenith, event).unwrap();
                let b = noaa.compute_utc(date, &coord, zenith, event).unwrap();
                let diff_minutes = ((a - b + 12.0).rem_euclid(24.0) - 12.0).abs() * 60.0;
                assert!(diff_minutes < 1.0, "{} {} differs by {} min", date, event, diff_minutes);
            }
        }
    }

    #[test]
    fn test_known_values() {
        let usno = SunTimesCalculator::new();
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let sunrise = usno.utc_sunrise(date, &lakewood(), GEOMETRIC_ZENITH, false).unwrap();
        assert!((sunrise - 12.318361).abs() < 1e-5, "sunrise {}", sunrise);
    }

    #[test]
    fn test_noon_between_rise_and_set() {
        let usno = SunTimesCalculator::new();
        let coord = lakewood();
        let date = NaiveDate::from_ymd_opt(2023, 8, 1).unwrap();
        let noon = usno.utc_noon(date, &coord).unwrap();
        // Sunset wraps past 0h UTC in August; noon must still land near 17h UTC.
        assert!((noon - 17.05).abs() < 0.1, "noon {}", noon);
        let midnight = usno.utc_midnight(date, &coord).unwrap();
        assert!((midnight - (noon - 12.0)).abs() < 1e-9);
    }

    #[test]
    fn test_polar_no_event() {
        let usno = SunTimesCalculator::new();
        let coord = GeoCoordinate::new(78.0, 15.6, Tz::Arctic__Longyearbyen).unwrap();
        let date = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();
        assert_eq!(usno.utc_sunset(date, &coord, GEOMETRIC_ZENITH, true), None);
        assert_eq!(usno.utc_noon(date, &coord), None);
    }
}
