//! NOAA solar calculator.
//!
//! Implements the NOAA sunrise/sunset method (Meeus based) with its two-pass
//! refinement. Longitude is negated on entry: the NOAA formulas are written for
//! west-positive longitudes.

use chrono::NaiveDate;
use log::trace;
use zmanim_types::{CalculatorConfig, GeoCoordinate, SolarEvent};

use crate::ephemeris::{declination, equation_of_time, julian_centuries, julian_day};
use crate::solver::{SolarEventSolver, normalize_hours};

/// Sunrise/sunset solver based on the NOAA solar calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NoaaCalculator {
    config: CalculatorConfig,
}

impl NoaaCalculator {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self { config }
    }
}

impl SolarEventSolver for NoaaCalculator {
    fn name(&self) -> &'static str {
        "NOAA"
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
        let jd = julian_day(date);
        let longitude = -coord.lng();
        let minutes = match event {
            SolarEvent::Sunrise | SolarEvent::Sunset => {
                rise_set_minutes(jd, coord.lat(), longitude, zenith, event)
            }
            SolarEvent::Noon | SolarEvent::Midnight => noon_midnight_minutes(jd, longitude, event),
        };
        let hours = normalize_hours(minutes / 60.0);
        if hours.is_none() {
            trace!("{} at zenith {} does not occur on {} at {}", event, zenith, date, coord);
        }
        hours
    }
}

/// Hour angle of the sun, in radians, at which it crosses `zenith`.
///
/// Negative for sunset. NaN when the sun never reaches the zenith.
pub fn hour_angle(latitude: f64, declination: f64, zenith: f64, event: SolarEvent) -> f64 {
    let lat = latitude.to_radians();
    let dec = declination.to_radians();
    let cos_h = zenith.to_radians().cos() / (lat.cos() * dec.cos()) - lat.tan() * dec.tan();
    let h = cos_h.acos();
    if event == SolarEvent::Sunset { -h } else { h }
}

/// Minutes after 0h UTC of `julian_day` of solar noon, or of the following
/// solar midnight.
fn noon_midnight_minutes(julian_day: f64, longitude: f64, event: SolarEvent) -> f64 {
    let julian_day = if event == SolarEvent::Midnight { julian_day + 0.5 } else { julian_day };

    let t = julian_centuries(julian_day + longitude / 360.0);
    let approximate = longitude * 4.0 - equation_of_time(t);

    let t = julian_centuries(julian_day + approximate / 1440.0);
    let base = if event == SolarEvent::Midnight { 1440.0 } else { 720.0 };
    base + longitude * 4.0 - equation_of_time(t)
}

fn rise_set_minutes(
    julian_day: f64,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    event: SolarEvent,
) -> f64 {
    let noon = noon_midnight_minutes(julian_day, longitude, SolarEvent::Noon);
    let pass = |minutes: f64| {
        let t = julian_centuries(julian_day + minutes / 1440.0);
        rise_set_pass(t, latitude, longitude, zenith, event)
    };
    pass(pass(noon))
}

fn rise_set_pass(t: f64, latitude: f64, longitude: f64, zenith: f64, event: SolarEvent) -> f64 {
    let eot = equation_of_time(t);
    let h = hour_angle(latitude, declination(t), zenith, event);
    720.0 + 4.0 * (longitude - h.to_degrees()) - eot
}
