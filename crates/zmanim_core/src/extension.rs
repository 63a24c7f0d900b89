//! Extension trait for `NaiveDate`.

use chrono::{DateTime, Duration, NaiveDate};
use chrono_tz::Tz;
use zmanim_types::GeoCoordinate;

use crate::calendar::AstronomicalCalendar;

/// Extends `NaiveDate` with solar event lookups using the NOAA solver.
///
/// ```rust
/// use chrono::NaiveDate;
/// use chrono_tz::Tz;
/// use zmanim_core::prelude::*;
///
/// let tokyo = GeoCoordinate::new(35.6895, 139.6917, Tz::Asia__Tokyo).unwrap();
/// let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// assert!(date.sunrise_at(&tokyo) < date.sunset_at(&tokyo));
/// ```
pub trait SolarDateExt {
    /// Elevation-adjusted sunrise.
    fn sunrise_at(&self, location: &GeoCoordinate) -> Option<DateTime<Tz>>;

    /// Elevation-adjusted sunset.
    fn sunset_at(&self, location: &GeoCoordinate) -> Option<DateTime<Tz>>;

    fn sun_transit_at(&self, location: &GeoCoordinate) -> Option<DateTime<Tz>>;

    /// Sunrise to sunset, or `None` under polar day or night.
    fn day_length_at(&self, location: &GeoCoordinate) -> Option<Duration>;

    /// Builds a full calendar for this date.
    fn calendar_at(&self, location: &GeoCoordinate) -> AstronomicalCalendar;
}

impl SolarDateExt for NaiveDate {
    fn sunrise_at(&self, location: &GeoCoordinate) -> Option<DateTime<Tz>> {
        self.calendar_at(location).sunrise()
    }

    fn sunset_at(&self, location: &GeoCoordinate) -> Option<DateTime<Tz>> {
        self.calendar_at(location).sunset()
    }

    fn sun_transit_at(&self, location: &GeoCoordinate) -> Option<DateTime<Tz>> {
        self.calendar_at(location).sun_transit()
    }

    fn day_length_at(&self, location: &GeoCoordinate) -> Option<Duration> {
        let calendar = self.calendar_at(location);
        Some(calendar.sunset()? - calendar.sunrise()?)
    }

    fn calendar_at(&self, location: &GeoCoordinate) -> AstronomicalCalendar {
        AstronomicalCalendar::new(*self, location.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_length_seasons() {
        let lakewood = GeoCoordinate::new(40.08213, -74.2097, Tz::America__New_York).unwrap();
        let winter = NaiveDate::from_ymd_opt(2023, 12, 21).unwrap();
        let summer = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();

        let short = winter.day_length_at(&lakewood).unwrap();
        let long = summer.day_length_at(&lakewood).unwrap();
        assert!(short < Duration::hours(10));
        assert!(long > Duration::hours(15));
    }

    #[test]
    fn test_jerusalem_transit() {
        let jerusalem = GeoCoordinate::new(31.778, 35.2354, Tz::Asia__Jerusalem).unwrap();
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let transit = date.sun_transit_at(&jerusalem).unwrap();
        assert_eq!(transit.format("%H:%M:%S").to_string(), "11:42:13");
    }

    #[test]
    fn test_polar_night_has_no_day_length() {
        let svalbard = GeoCoordinate::new(78.0, 15.6, Tz::Arctic__Longyearbyen).unwrap();
        let date = NaiveDate::from_ymd_opt(2023, 12, 21).unwrap();
        assert_eq!(date.sunrise_at(&svalbard), None);
        assert_eq!(date.day_length_at(&svalbard), None);
    }
}
