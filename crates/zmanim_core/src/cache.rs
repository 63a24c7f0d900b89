//! Memoized dip searches.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use chrono::NaiveDate;
use log::debug;
use zmanim_astronomy::{SolarEventSolver, solar_dip_from_offset};
use zmanim_types::{DipAnchor, GeoCoordinate};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DipKey {
    solver: &'static str,
    config: [u64; 3],
    lat: u64,
    lng: u64,
    zone: &'static str,
    date: NaiveDate,
    anchor: DipAnchor,
    minutes: u64,
}

impl DipKey {
    fn new<S: SolarEventSolver + ?Sized>(
        solver: &S,
        anchor: DipAnchor,
        minutes: f64,
        coord: &GeoCoordinate,
        date: NaiveDate,
    ) -> Self {
        let config = solver.config();
        Self {
            solver: solver.name(),
            config: [
                config.refraction().to_bits(),
                config.solar_radius().to_bits(),
                config.earth_radius_km().to_bits(),
            ],
            lat: coord.lat().to_bits(),
            lng: coord.lng().to_bits(),
            zone: coord.tz().name(),
            date,
            anchor,
            minutes: minutes.to_bits(),
        }
    }
}

/// Thread-safe memo of [`solar_dip_from_offset`] results.
///
/// Results depend only on solver, settings, position, date, anchor and offset,
/// so a hit is exact. `None` results are cached too.
#[derive(Debug, Default)]
pub struct DipCache {
    entries: Mutex<HashMap<DipKey, Option<f64>>>,
}

impl DipCache {
    pub fn new() -> Self { Self::default() }

    pub fn get_or_solve<S: SolarEventSolver + ?Sized>(
        &self,
        solver: &S,
        anchor: DipAnchor,
        minutes: f64,
        coord: &GeoCoordinate,
        date: NaiveDate,
    ) -> Option<f64> {
        let key = DipKey::new(solver, anchor, minutes, coord, date);
        if let Some(hit) = self.lock().get(&key) {
            debug!("dip cache hit: {} {} min on {}", anchor, minutes, date);
            return *hit;
        }

        // Solve outside the lock; a racing duplicate solve yields the same value.
        let dip = solar_dip_from_offset(solver, anchor, minutes, coord, date);
        debug!("dip cache miss: {} {} min on {} -> {:?}", anchor, minutes, date, dip);
        self.lock().insert(key, dip);
        dip
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<DipKey, Option<f64>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;
    use zmanim_astronomy::{NoaaCalculator, SunTimesCalculator};

    fn jerusalem() -> GeoCoordinate {
        GeoCoordinate::new(31.778, 35.2354, Tz::Asia__Jerusalem).unwrap()
    }

    #[test]
    fn test_hit_matches_direct_search() {
        let cache = DipCache::new();
        let calc = NoaaCalculator::new();
        let date = NaiveDate::from_ymd_opt(2023, 4, 2).unwrap();

        let first = cache.get_or_solve(&calc, DipAnchor::Sunset, 18.0, &jerusalem(), date);
        let second = cache.get_or_solve(&calc, DipAnchor::Sunset, 18.0, &jerusalem(), date);
        assert_eq!(first, second);
        let direct = solar_dip_from_offset(&calc, DipAnchor::Sunset, 18.0, &jerusalem(), date);
        assert_eq!(first, direct);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_distinguish_inputs() {
        let cache = DipCache::new();
        let date = NaiveDate::from_ymd_opt(2023, 4, 2).unwrap();
        let coord = jerusalem();

        cache.get_or_solve(&NoaaCalculator::new(), DipAnchor::Sunset, 18.0, &coord, date);
        cache.get_or_solve(&SunTimesCalculator::new(), DipAnchor::Sunset, 18.0, &coord, date);
        cache.get_or_solve(&NoaaCalculator::new(), DipAnchor::Sunrise, 18.0, &coord, date);
        cache.get_or_solve(&NoaaCalculator::new(), DipAnchor::Sunset, 0.0, &coord, date);
        assert_eq!(cache.len(), 4);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_caches_missing_events() {
        let cache = DipCache::new();
        let svalbard = GeoCoordinate::new(78.0, 15.6, Tz::Arctic__Longyearbyen).unwrap();
        let date = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();
        let calc = NoaaCalculator::new();

        assert_eq!(cache.get_or_solve(&calc, DipAnchor::Sunrise, 30.0, &svalbard, date), None);
        assert_eq!(cache.len(), 1);
    }
}
