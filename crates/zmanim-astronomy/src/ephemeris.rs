//! Solar ephemeris.
//!
//! Meeus/NOAA series for the sun's position as functions of Julian centuries
//! since J2000.0. Angles are degrees throughout; the trigonometry converts to
//! radians internally. Nothing here validates its input: a NaN argument yields
//! a NaN result.

use chrono::{Datelike, NaiveDate};

/// Julian day of the J2000.0 epoch.
pub const J2000: f64 = 2_451_545.0;
/// Days in a Julian century.
pub const JULIAN_DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian day at 0h UTC of a Gregorian date.
///
/// January and February are counted as months 13 and 14 of the previous year.
pub fn julian_day(date: NaiveDate) -> f64 {
    let mut year = date.year();
    let mut month = date.month() as i32;
    if month <= 2 {
        year -= 1;
        month += 12;
    }
    let a = year.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    (365.25 * f64::from(year + 4716)).floor()
        + (30.6001 * f64::from(month + 1)).floor()
        + f64::from(date.day())
        + f64::from(b)
        - 1524.5
}

pub fn julian_centuries(julian_day: f64) -> f64 {
    (julian_day - J2000) / JULIAN_DAYS_PER_CENTURY
}

pub fn julian_day_from_centuries(julian_centuries: f64) -> f64 {
    julian_centuries * JULIAN_DAYS_PER_CENTURY + J2000
}

/// Geometric mean longitude of the sun, in [0, 360].
pub fn mean_longitude(t: f64) -> f64 {
    (280.46646 + t * (36000.76983 + 0.0003032 * t)).rem_euclid(360.0)
}

/// Geometric mean anomaly of the sun.
pub fn mean_anomaly(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

/// Eccentricity of earth's orbit (unitless).
pub fn orbit_eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

pub fn equation_of_center(t: f64) -> f64 {
    let m = mean_anomaly(t).to_radians();
    m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.000289
}

pub fn true_longitude(t: f64) -> f64 {
    mean_longitude(t) + equation_of_center(t)
}

/// True longitude corrected for nutation and aberration.
pub fn apparent_longitude(t: f64) -> f64 {
    let omega = 125.04 - 1934.136 * t;
    true_longitude(t) - 0.00569 - 0.00478 * omega.to_radians().sin()
}

/// Mean obliquity of the ecliptic.
pub fn mean_obliquity(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity corrected for nutation.
pub fn corrected_obliquity(t: f64) -> f64 {
    let omega = 125.04 - 1934.136 * t;
    mean_obliquity(t) + 0.00256 * omega.to_radians().cos()
}

/// Declination of the sun.
pub fn declination(t: f64) -> f64 {
    let e = corrected_obliquity(t).to_radians();
    let lambda = apparent_longitude(t).to_radians();
    (e.sin() * lambda.sin()).asin().to_degrees()
}

/// Right ascension of the sun.
pub fn right_ascension(t: f64) -> f64 {
    let e = corrected_obliquity(t).to_radians();
    let lambda = apparent_longitude(t).to_radians();
    (e.cos() * lambda.sin()).atan2(lambda.cos()).to_degrees()
}

/// Equation of time in minutes: apparent solar time minus mean solar time.
pub fn equation_of_time(t: f64) -> f64 {
    let epsilon = corrected_obliquity(t).to_radians();
    let l0 = mean_longitude(t).to_radians();
    let e = orbit_eccentricity(t);
    let m = mean_anomaly(t).to_radians();
    let y = (epsilon / 2.0).tan().powi(2);

    let sin_2l0 = (2.0 * l0).sin();
    let sin_m = m.sin();
    let cos_2l0 = (2.0 * l0).cos();
    let sin_4l0 = (4.0 * l0).sin();
    let sin_2m = (2.0 * m).sin();

    let eot = y * sin_2l0 - 2.0 * e * sin_m + 4.0 * e * y * sin_m * cos_2l0
        - 0.5 * y * y * sin_4l0
        - 1.25 * e * e * sin_2m;
    eot.to_degrees() * 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_julian_day_epochs() {
        assert_eq!(julian_day(date(2000, 1, 1)), 2_451_544.5);
        assert_eq!(julian_day(date(1999, 1, 1)), 2_451_179.5);
        assert_eq!(julian_day(date(1987, 6, 19)), 2_446_965.5);
        assert_eq!(julian_day(date(1600, 12, 31)), 2_305_812.5);
    }

    #[test]
    fn test_centuries_round_trip() {
        let jd = julian_day(date(2023, 5, 1));
        let t = julian_centuries(jd);
        assert!((julian_day_from_centuries(t) - jd).abs() < 1e-6);
        assert!(t > 0.23 && t < 0.24);
    }

    #[test]
    fn test_mean_longitude_normalized() {
        for year in [1800, 1900, 2000, 2100, 2200] {
            let t = julian_centuries(julian_day(date(year, 7, 4)));
            let l0 = mean_longitude(t);
            assert!((0.0..360.0).contains(&l0), "{} -> {}", year, l0);
        }
        assert!(mean_longitude(f64::NAN).is_nan());
    }

    #[test]
    fn test_declination_at_solstices() {
        let june = declination(julian_centuries(julian_day(date(2023, 6, 21)) + 0.5));
        let december = declination(julian_centuries(julian_day(date(2023, 12, 22)) + 0.5));
        assert!((june - 23.44).abs() < 0.05, "june declination {}", june);
        assert!((december + 23.44).abs() < 0.05, "december declination {}", december);
    }

    #[test]
    fn test_equation_of_time_extremes() {
        // Early November peak (~+16.4 min) and mid-February trough (~-14.2 min).
        let nov = equation_of_time(julian_centuries(julian_day(date(2023, 11, 3))));
        let feb = equation_of_time(julian_centuries(julian_day(date(2023, 2, 11))));
        assert!((nov - 16.4).abs() < 0.3, "november eot {}", nov);
        assert!((feb + 14.2).abs() < 0.3, "february eot {}", feb);
    }

    #[test]
    fn test_right_ascension_at_equinox() {
        let t = julian_centuries(julian_day(date(2023, 3, 20)) + 0.5);
        let ra = right_ascension(t);
        assert!(ra.abs() < 1.0, "ra {}", ra);
    }
}
