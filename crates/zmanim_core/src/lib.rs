//! Core zmanim calculations: the astronomical calendar, the dip cache and the
//! `NaiveDate` extension.

pub mod cache;
pub mod calendar;
pub mod extension;

pub use zmanim_astronomy as astronomy;
pub use zmanim_types as types;

pub use cache::DipCache;
pub use calendar::AstronomicalCalendar;
pub use extension::SolarDateExt;
pub use zmanim_astronomy::{NoaaCalculator, SolarEventSolver, SolarPosition, SunTimesCalculator};
pub use zmanim_types::{
    ASTRONOMICAL_ZENITH, CIVIL_ZENITH, CalculatorConfig, CalculatorConfigBuilder, DipAnchor,
    GEOMETRIC_ZENITH, GeoCoordinate, NAUTICAL_ZENITH, SolarEvent, ZmanimError,
};

pub mod prelude {
    pub use crate::extension::SolarDateExt;
    pub use crate::{AstronomicalCalendar, DipCache};
    pub use crate::{CalculatorConfig, DipAnchor, GeoCoordinate, ZmanimError};
    pub use crate::{NoaaCalculator, SolarEventSolver, SunTimesCalculator};
}

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

/// Sunrise and sunset for one civil date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    pub date: NaiveDate,
    pub sunrise: Option<DateTime<Tz>>,
    pub sunset: Option<DateTime<Tz>>,
}

/// Iterator over consecutive dates, yielding a [`SolarDay`] for each.
#[derive(Debug, Clone)]
pub struct SolarDays<S: SolarEventSolver = NoaaCalculator> {
    calendar: AstronomicalCalendar<S>,
    current: Option<NaiveDate>,
    end: NaiveDate,
}

impl<S: SolarEventSolver> Iterator for SolarDays<S> {
    type Item = SolarDay;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.current.filter(|d| *d <= self.end)?;
        self.calendar.set_date(date);
        self.current = date.succ_opt();
        Some(SolarDay {
            date,
            sunrise: self.calendar.sunrise(),
            sunset: self.calendar.sunset(),
        })
    }
}

/// Lazily computes sunrise and sunset from `start` through `end`, inclusive.
pub fn solar_days(start: NaiveDate, end: NaiveDate, location: GeoCoordinate) -> SolarDays {
    solar_days_with(start, end, location, NoaaCalculator::new())
}

pub fn solar_days_with<S: SolarEventSolver>(
    start: NaiveDate,
    end: NaiveDate,
    location: GeoCoordinate,
    solver: S,
) -> SolarDays<S> {
    SolarDays {
        calendar: AstronomicalCalendar::with_solver(start, location, solver),
        current: Some(start),
        end,
    }
}
