//! Astronomical calendar for one date and location.

use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use chrono_tz::Tz;
use zmanim_astronomy::{
    NoaaCalculator, SolarEventSolver, SolarPosition, project, solar_dip_from_offset, solar_position,
};
use zmanim_types::{
    ASTRONOMICAL_ZENITH, CIVIL_ZENITH, DipAnchor, GEOMETRIC_ZENITH, GeoCoordinate, NAUTICAL_ZENITH,
};

use crate::cache::DipCache;

/// Sunrise, sunset, transit and twilight times for a civil date at a location.
///
/// Every time is returned in the location's zone. `None` means the event does
/// not happen on that date (polar day or night), or that an input of the
/// calculation was itself `None`.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use chrono_tz::Tz;
/// use zmanim_core::{AstronomicalCalendar, GeoCoordinate};
///
/// let lakewood = GeoCoordinate::new(40.08213, -74.2097, Tz::America__New_York).unwrap();
/// let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let calendar = AstronomicalCalendar::new(date, lakewood);
///
/// let sunrise = calendar.sunrise().unwrap();
/// assert_eq!(sunrise.format("%H:%M:%S").to_string(), "07:18:57");
/// ```
#[derive(Debug, Clone)]
pub struct AstronomicalCalendar<S: SolarEventSolver = NoaaCalculator> {
    date: NaiveDate,
    location: GeoCoordinate,
    solver: S,
}

impl AstronomicalCalendar<NoaaCalculator> {
    pub fn new(date: NaiveDate, location: GeoCoordinate) -> Self {
        Self::with_solver(date, location, NoaaCalculator::new())
    }
}

impl<S: SolarEventSolver> AstronomicalCalendar<S> {
    pub fn with_solver(date: NaiveDate, location: GeoCoordinate, solver: S) -> Self {
        Self { date, location, solver }
    }

    pub fn date(&self) -> NaiveDate { self.date }
    pub fn location(&self) -> &GeoCoordinate { &self.location }
    pub fn solver(&self) -> &S { &self.solver }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_location(&mut self, location: GeoCoordinate) {
        self.location = location;
    }

    /// Sunrise adjusted for refraction, solar radius and elevation.
    pub fn sunrise(&self) -> Option<DateTime<Tz>> {
        self.to_local(self.utc_sunrise(GEOMETRIC_ZENITH))
    }

    /// Sunrise as seen at sea level, ignoring the location's elevation.
    pub fn sea_level_sunrise(&self) -> Option<DateTime<Tz>> {
        self.to_local(self.utc_sea_level_sunrise(GEOMETRIC_ZENITH))
    }

    pub fn sunset(&self) -> Option<DateTime<Tz>> {
        self.to_local(self.utc_sunset(GEOMETRIC_ZENITH))
    }

    pub fn sea_level_sunset(&self) -> Option<DateTime<Tz>> {
        self.to_local(self.utc_sea_level_sunset(GEOMETRIC_ZENITH))
    }

    /// Time the sun reaches `zenith` in the morning.
    ///
    /// Zeniths other than exactly 90° are used without adjustment, so
    /// `sunrise_offset_by_degrees(96.0)` is civil dawn.
    pub fn sunrise_offset_by_degrees(&self, zenith: f64) -> Option<DateTime<Tz>> {
        self.to_local(self.utc_sunrise(zenith))
    }

    pub fn sunset_offset_by_degrees(&self, zenith: f64) -> Option<DateTime<Tz>> {
        self.to_local(self.utc_sunset(zenith))
    }

    pub fn begin_civil_twilight(&self) -> Option<DateTime<Tz>> {
        self.sunrise_offset_by_degrees(CIVIL_ZENITH)
    }

    pub fn begin_nautical_twilight(&self) -> Option<DateTime<Tz>> {
        self.sunrise_offset_by_degrees(NAUTICAL_ZENITH)
    }

    pub fn begin_astronomical_twilight(&self) -> Option<DateTime<Tz>> {
        self.sunrise_offset_by_degrees(ASTRONOMICAL_ZENITH)
    }

    pub fn end_civil_twilight(&self) -> Option<DateTime<Tz>> {
        self.sunset_offset_by_degrees(CIVIL_ZENITH)
    }

    pub fn end_nautical_twilight(&self) -> Option<DateTime<Tz>> {
        self.sunset_offset_by_degrees(NAUTICAL_ZENITH)
    }

    pub fn end_astronomical_twilight(&self) -> Option<DateTime<Tz>> {
        self.sunset_offset_by_degrees(ASTRONOMICAL_ZENITH)
    }

    /// Solar noon: the sun crossing the local meridian.
    pub fn sun_transit(&self) -> Option<DateTime<Tz>> {
        self.to_local(self.solver.utc_noon(self.date, &self.location))
    }

    /// Solar midnight following this date's transit.
    pub fn solar_midnight(&self) -> Option<DateTime<Tz>> {
        let noon = self.solver.utc_noon(self.date, &self.location)?;
        let midnight = self.solver.utc_midnight(self.date, &self.location)?;
        let transit = self.sun_transit()?;
        let gap_hours = (midnight - noon).rem_euclid(24.0);
        Some(transit + Duration::milliseconds((gap_hours * 3_600_000.0).round() as i64))
    }

    /// Transit computed as the midpoint of an arbitrary day, e.g. dawn to dusk.
    pub fn sun_transit_between(
        &self,
        start: Option<DateTime<Tz>>,
        end: Option<DateTime<Tz>>,
    ) -> Option<DateTime<Tz>> {
        let start = start?;
        Some(start + Self::temporal_hour(Some(start), end)? * 6)
    }

    /// One twelfth of the span from `start` to `end`.
    pub fn temporal_hour(
        start: Option<DateTime<Tz>>,
        end: Option<DateTime<Tz>>,
    ) -> Option<Duration> {
        Some((end? - start?) / 12)
    }

    /// Temporal hour of the sea-level day, sunrise to sunset.
    pub fn sea_level_temporal_hour(&self) -> Option<Duration> {
        Self::temporal_hour(self.sea_level_sunrise(), self.sea_level_sunset())
    }

    /// Shifts `instant` by a fractional number of minutes, to the millisecond.
    pub fn time_offset(instant: Option<DateTime<Tz>>, minutes: f64) -> Option<DateTime<Tz>> {
        if !minutes.is_finite() {
            return None;
        }
        Some(instant? + Duration::milliseconds((minutes * 60_000.0).round() as i64))
    }

    /// Local mean time `hours` after mean midnight at this longitude.
    ///
    /// Valid for `hours` in `[0, 24)`.
    pub fn local_mean_time(&self, hours: f64) -> Option<DateTime<Tz>> {
        if !(0.0..24.0).contains(&hours) {
            return None;
        }
        let utc = (hours - self.location.lng() / 15.0).rem_euclid(24.0);
        self.to_local(Some(utc))
    }

    /// Degrees below the horizon matching `minutes` before sea-level sunrise.
    ///
    /// Slow: runs a linear search. Use [`DipCache`] for repeated queries.
    pub fn sunrise_solar_dip_from_offset(&self, minutes: f64) -> Option<f64> {
        solar_dip_from_offset(&self.solver, DipAnchor::Sunrise, minutes, &self.location, self.date)
    }

    /// Degrees below the horizon matching `minutes` after sea-level sunset.
    pub fn sunset_solar_dip_from_offset(&self, minutes: f64) -> Option<f64> {
        solar_dip_from_offset(&self.solver, DipAnchor::Sunset, minutes, &self.location, self.date)
    }

    /// Cached version of the dip search.
    pub fn solar_dip_from_offset_cached(
        &self,
        cache: &DipCache,
        anchor: DipAnchor,
        minutes: f64,
    ) -> Option<f64> {
        cache.get_or_solve(&self.solver, anchor, minutes, &self.location, self.date)
    }

    pub fn solar_position<Z: TimeZone>(&self, instant: &DateTime<Z>) -> SolarPosition {
        solar_position(instant, &self.location)
    }

    /// Geometric elevation of the sun in degrees.
    pub fn solar_elevation<Z: TimeZone>(&self, instant: &DateTime<Z>) -> f64 {
        self.solar_position(instant).elevation
    }

    /// Azimuth of the sun in degrees clockwise from north.
    pub fn solar_azimuth<Z: TimeZone>(&self, instant: &DateTime<Z>) -> f64 {
        self.solar_position(instant).azimuth
    }

    pub fn utc_sunrise(&self, zenith: f64) -> Option<f64> {
        self.solver.utc_sunrise(self.date, &self.location, zenith, true)
    }

    pub fn utc_sea_level_sunrise(&self, zenith: f64) -> Option<f64> {
        self.solver.utc_sunrise(self.date, &self.location, zenith, false)
    }

    pub fn utc_sunset(&self, zenith: f64) -> Option<f64> {
        self.solver.utc_sunset(self.date, &self.location, zenith, true)
    }

    pub fn utc_sea_level_sunset(&self, zenith: f64) -> Option<f64> {
        self.solver.utc_sunset(self.date, &self.location, zenith, false)
    }

    fn to_local(&self, utc_hours: Option<f64>) -> Option<DateTime<Tz>> {
        project(self.date, utc_hours, &self.location)
    }
}
