//! Solar dip search.
//!
//! Converts a clock offset from sunrise or sunset ("40 minutes after sunset")
//! into the depression of the sun below the geometric horizon at that moment
//! on the given day. The forward direction (dip to time) has no closed-form
//! inverse, so the dip is found by stepping it in 0.0001° increments until the
//! event time reaches the target. A single solve runs the solver up to tens of
//! thousands of times; memoize results rather than calling this in a loop.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use log::debug;
use zmanim_types::{DipAnchor, GEOMETRIC_ZENITH, GeoCoordinate, SolarEvent};

use crate::projector::utc_instant;
use crate::solver::SolarEventSolver;

/// Dip increment of the search, in degrees.
pub const DIP_STEP: f64 = 0.0001;
/// The search gives up past 90° of dip.
pub const MAX_DIP_STEPS: i64 = 900_000;

/// Degrees below the geometric horizon matching `minutes` of offset.
///
/// For [`DipAnchor::Sunrise`] positive minutes are before sea-level sunrise;
/// for [`DipAnchor::Sunset`] positive minutes are after sea-level sunset.
/// Negative minutes search above the horizon and yield a negative dip.
///
/// Returns `None` if the sea-level event does not occur on `date`, or if the
/// sun never gets deep enough to reach the target time.
pub fn solar_dip_from_offset<S: SolarEventSolver + ?Sized>(
    solver: &S,
    anchor: DipAnchor,
    minutes: f64,
    coord: &GeoCoordinate,
    date: NaiveDate,
) -> Option<f64> {
    if !minutes.is_finite() {
        return None;
    }
    let event = SolarEvent::from(anchor);
    let instant_at = |zenith: f64| -> Option<DateTime<Utc>> {
        let hours = solver.compute_utc(date, coord, zenith, event)?;
        utc_instant(date, hours, coord)
    };

    let reference_zenith = solver.adjust_zenith(GEOMETRIC_ZENITH, 0.0);
    let reference = instant_at(reference_zenith)?;
    let offset = Duration::milliseconds((minutes * 60_000.0).round() as i64);
    let target = match anchor {
        DipAnchor::Sunrise => reference - offset,
        DipAnchor::Sunset => reference + offset,
    };
    let direction: i64 = if minutes > 0.0 { 1 } else { -1 };

    let mut current = Some(reference);
    let mut steps: i64 = 0;
    while !reached(current, target, anchor, minutes) {
        if steps.abs() >= MAX_DIP_STEPS {
            debug!("{} dip search exhausted on {} at {}", anchor, date, coord);
            return None;
        }
        steps += direction;
        let zenith = GEOMETRIC_ZENITH + steps as f64 * DIP_STEP;
        current = instant_at(zenith);
        // Zeniths crossed on a given day form an interval containing the
        // reference zenith. A miss on the far side of it is final.
        if current.is_none() && (direction < 0 || zenith > reference_zenith) {
            debug!(
                "{} dip search left the crossing range after {} steps on {} at {}",
                anchor,
                steps.abs(),
                date,
                coord
            );
            return None;
        }
    }

    let dip = steps as f64 * DIP_STEP;
    debug!(
        "{} offset of {} min on {} is a dip of {:.4}° ({} steps)",
        anchor,
        minutes,
        date,
        dip,
        steps.abs()
    );
    Some(dip)
}

fn reached(
    current: Option<DateTime<Utc>>,
    target: DateTime<Utc>,
    anchor: DipAnchor,
    minutes: f64,
) -> bool {
    let Some(current) = current else {
        return false;
    };
    match (anchor, minutes > 0.0) {
        (DipAnchor::Sunrise, true) => current <= target,
        (DipAnchor::Sunrise, false) => current >= target,
        (DipAnchor::Sunset, true) => current >= target,
        (DipAnchor::Sunset, false) => current <= target,
    }
}
