//! Solar astronomy for zmanim.
//!
//! - [`ephemeris`]: Meeus/NOAA series for the sun's position and the equation of time.
//! - [`zenith`]: refraction, solar radius and elevation adjustment of the horizon.
//! - [`solver`]: the [`SolarEventSolver`] trait, implemented by [`NoaaCalculator`]
//!   and [`SunTimesCalculator`].
//! - [`projector`]: UTC hours to zoned timestamps.
//! - [`dip`]: clock offset to solar dip search.
//! - [`position`]: solar elevation and azimuth at an instant.

pub mod dip;
pub mod ephemeris;
pub mod noaa;
pub mod position;
pub mod projector;
pub mod solver;
pub mod usno;
pub mod zenith;

pub use dip::{DIP_STEP, solar_dip_from_offset};
pub use noaa::NoaaCalculator;
pub use position::{SolarPosition, solar_position};
pub use projector::{project, utc_instant};
pub use solver::SolarEventSolver;
pub use usno::SunTimesCalculator;
pub use zenith::{adjust_zenith, elevation_adjustment};
