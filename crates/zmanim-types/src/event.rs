use serde::{Deserialize, Serialize};
use std::fmt;

/// Zenith of the geometric horizon.
pub const GEOMETRIC_ZENITH: f64 = 90.0;
/// Sun 6° below the horizon.
pub const CIVIL_ZENITH: f64 = 96.0;
/// Sun 12° below the horizon.
pub const NAUTICAL_ZENITH: f64 = 102.0;
/// Sun 18° below the horizon.
pub const ASTRONOMICAL_ZENITH: f64 = 108.0;

/// A solar event the solvers can locate on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarEvent {
    /// The sun crosses the zenith while rising.
    Sunrise,
    /// The sun crosses the zenith while setting.
    Sunset,
    /// Transit across the local meridian.
    Noon,
    /// Lower transit, twelve hours from noon.
    Midnight,
}

impl SolarEvent {
    pub fn is_rise_or_set(&self) -> bool {
        matches!(self, SolarEvent::Sunrise | SolarEvent::Sunset)
    }
}

impl fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SolarEvent::Sunrise => "Sunrise",
            SolarEvent::Sunset => "Sunset",
            SolarEvent::Noon => "Solar noon",
            SolarEvent::Midnight => "Solar midnight",
        };
        write!(f, "{}", s)
    }
}

/// The event a clock offset is measured from when solving for a dip angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DipAnchor {
    /// Positive minutes are before sunrise (dawn).
    Sunrise,
    /// Positive minutes are after sunset (dusk).
    Sunset,
}

impl From<DipAnchor> for SolarEvent {
    fn from(anchor: DipAnchor) -> Self {
        match anchor {
            DipAnchor::Sunrise => SolarEvent::Sunrise,
            DipAnchor::Sunset => SolarEvent::Sunset,
        }
    }
}

impl fmt::Display for DipAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&SolarEvent::from(*self), f)
    }
}
