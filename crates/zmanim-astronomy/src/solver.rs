//! Solar event solver interface.

use chrono::NaiveDate;
use std::fmt;
use zmanim_types::{CalculatorConfig, GEOMETRIC_ZENITH, GeoCoordinate, SolarEvent};

use crate::zenith;

/// Computes the UTC time of day of solar events.
///
/// Results are fractional hours in `[0, 24)`. `None` means the sun never
/// reaches the requested zenith on that date at that latitude (polar day or
/// night); it is a normal outcome, not an error.
///
/// Implementations hold only their physical constants. The observer location
/// is passed to every call, so one solver can serve any number of threads and
/// locations at once.
pub trait SolarEventSolver: fmt::Debug + Send + Sync {
    /// Short name of the algorithm.
    fn name(&self) -> &'static str;

    fn config(&self) -> &CalculatorConfig;

    /// UTC hour of `event` on `date` for `zenith`, used exactly as given.
    ///
    /// The zenith is ignored for `Noon` and `Midnight`.
    fn compute_utc(
        &self,
        date: NaiveDate,
        coord: &GeoCoordinate,
        zenith: f64,
        event: SolarEvent,
    ) -> Option<f64>;

    /// Applies refraction, solar radius and elevation to a geometric zenith.
    fn adjust_zenith(&self, zenith: f64, elevation_m: f64) -> f64 {
        zenith::adjust_zenith(zenith, elevation_m, self.config())
    }

    /// UTC sunrise for a nominal zenith.
    ///
    /// With `adjust_for_elevation` false the observer is treated as standing
    /// at sea level.
    fn utc_sunrise(
        &self,
        date: NaiveDate,
        coord: &GeoCoordinate,
        zenith: f64,
        adjust_for_elevation: bool,
    ) -> Option<f64> {
        let elevation = if adjust_for_elevation { coord.elevation() } else { 0.0 };
        let adjusted = self.adjust_zenith(zenith, elevation);
        self.compute_utc(date, coord, adjusted, SolarEvent::Sunrise)
    }

    /// UTC sunset for a nominal zenith. See [`SolarEventSolver::utc_sunrise`].
    fn utc_sunset(
        &self,
        date: NaiveDate,
        coord: &GeoCoordinate,
        zenith: f64,
        adjust_for_elevation: bool,
    ) -> Option<f64> {
        let elevation = if adjust_for_elevation { coord.elevation() } else { 0.0 };
        let adjusted = self.adjust_zenith(zenith, elevation);
        self.compute_utc(date, coord, adjusted, SolarEvent::Sunset)
    }

    fn utc_noon(&self, date: NaiveDate, coord: &GeoCoordinate) -> Option<f64> {
        self.compute_utc(date, coord, GEOMETRIC_ZENITH, SolarEvent::Noon)
    }

    fn utc_midnight(&self, date: NaiveDate, coord: &GeoCoordinate) -> Option<f64> {
        self.compute_utc(date, coord, GEOMETRIC_ZENITH, SolarEvent::Midnight)
    }
}

/// Wraps an hour value into `[0, 24)`; non-finite values become `None`.
pub fn normalize_hours(hours: f64) -> Option<f64> {
    if !hours.is_finite() {
        return None;
    }
    let wrapped = hours.rem_euclid(24.0);
    // rem_euclid rounds tiny negative inputs up to exactly 24.0
    Some(if wrapped >= 24.0 { wrapped - 24.0 } else { wrapped })
}
