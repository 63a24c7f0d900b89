//! # Zmanim
//!
//! Sunrise, sunset, solar noon, twilight and solar-dip calculations for
//! religious-observance time tables.
//!
//! This crate is a facade that re-exports functionality from the `zmanim` workspace.
//!
//! ## Modules
//!
//! - `types`: Core types (GeoCoordinate, SolarEvent, CalculatorConfig, ZmanimError)
//! - `astronomy`: Ephemeris, zenith adjustment, NOAA and USNO solvers, dip search
//! - `calendar`: The `AstronomicalCalendar` facade for one date and location
//! - `cache`: Memoized dip searches
//!
//! ## Usage
//!
//! ```rust
//! use zmanim::prelude::*;
//! use chrono::NaiveDate;
//! use chrono_tz::Tz;
//!
//! let jerusalem = GeoCoordinate::new(31.778, 35.2354, Tz::Asia__Jerusalem)?
//!     .with_elevation(754.0)?
//!     .with_name("Jerusalem");
//! let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
//! let calendar = AstronomicalCalendar::new(date, jerusalem);
//!
//! let sunrise = calendar.sunrise();              // Option<DateTime<Tz>>
//! let dawn = calendar.begin_nautical_twilight(); // 12° below the horizon
//! assert!(dawn < sunrise);
//! # Ok::<(), ZmanimError>(())
//! ```

pub use zmanim_core::*;
