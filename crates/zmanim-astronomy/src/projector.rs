//! Projection of UTC hours onto zoned timestamps.
//!
//! The solvers report a time of day in UTC. For zones far from UTC that time of
//! day belongs to the previous or the next UTC date: a Tokyo sunrise happens
//! around 21:50 UTC on the day before, a Honolulu sunset around 04:00 UTC on
//! the day after. The projector picks the UTC date so the local date matches
//! the requested civil date.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use zmanim_types::GeoCoordinate;

/// Projects a UTC hour of `date` onto the coordinate's zone.
///
/// Returns `None` when `utc_hours` is `None` (no event) or is not in `[0, 24)`.
pub fn project(
    date: NaiveDate,
    utc_hours: Option<f64>,
    coord: &GeoCoordinate,
) -> Option<DateTime<Tz>> {
    let instant = utc_instant(date, utc_hours?, coord)?;
    Some(instant.with_timezone(&coord.tz()))
}

/// The UTC instant for `utc_hours` on `date`, with the day-rollover correction.
///
/// The hour is decoded into hour, minute, second and millisecond fields by
/// truncation.
pub fn utc_instant(
    date: NaiveDate,
    utc_hours: f64,
    coord: &GeoCoordinate,
) -> Option<DateTime<Utc>> {
    if !(0.0..24.0).contains(&utc_hours) {
        return None;
    }
    let time = decode_hours(utc_hours)?;
    let mut instant = Utc.from_utc_datetime(&date.and_time(time));

    let offset_hours = f64::from(coord.utc_offset_seconds(date)) / 3600.0;
    let local_hours = utc_hours + offset_hours;
    if local_hours > 24.0 {
        instant -= Duration::days(1);
    } else if local_hours < 0.0 {
        instant += Duration::days(1);
    }
    Some(instant)
}

fn decode_hours(hours: f64) -> Option<NaiveTime> {
    let h = hours.trunc();
    let rest = (hours - h) * 60.0;
    let m = rest.trunc();
    let rest = (rest - m) * 60.0;
    let s = rest.trunc();
    let ms = ((rest - s) * 1000.0).trunc();
    NaiveTime::from_hms_milli_opt(h as u32, m as u32, s as u32, ms as u32)
}
