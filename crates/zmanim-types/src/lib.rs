//! Core types for zmanim.
//!
//! Observer coordinates, solar event kinds, calculator settings and the error
//! type shared by every crate in the workspace.

pub mod config;
pub mod coordinate;
pub mod error;
pub mod event;

pub use config::{CalculatorConfig, CalculatorConfigBuilder};
pub use coordinate::GeoCoordinate;
pub use error::ZmanimError;
pub use event::{
    ASTRONOMICAL_ZENITH, CIVIL_ZENITH, DipAnchor, GEOMETRIC_ZENITH, NAUTICAL_ZENITH, SolarEvent,
};
