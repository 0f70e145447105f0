//! Station registry service for O(1) station metadata lookups
//!
//! The registry carries the fixed set of Gyeongbuk-area KMA surface stations
//! the dashboard observes and indexes them by station id. Absence is a normal
//! case: lookups that miss fall back to a defined unknown-station label
//! instead of failing.

use crate::app::models::Station;
use crate::constants::UNKNOWN_STATION_NAME;
use std::collections::HashMap;

/// Built-in station table: (id, display name, latitude, longitude)
const BUILTIN_STATIONS: &[(i32, &str, f64, f64)] = &[
    (115, "울릉도", 37.4811, 130.8986),
    (130, "울진", 36.9925, 129.4139),
    (136, "안동", 36.5683, 128.7089),
    (137, "상주", 36.4072, 128.1558),
    (138, "포항", 36.0322, 129.3694),
    (271, "봉화", 36.9438, 128.9142),
    (272, "영주", 36.8719, 128.5164),
    (273, "문경", 36.6372, 128.1487),
    (276, "청송", 36.4358, 129.0571),
    (277, "영덕", 36.5252, 129.4097),
    (278, "의성", 36.3561, 128.6887),
    (279, "구미", 36.1214, 128.3197),
    (281, "영천", 35.9777, 128.9514),
    (283, "경주", 35.8433, 129.2117),
];

/// Station registry providing O(1) station metadata lookups
#[derive(Debug, Clone)]
pub struct StationRegistry {
    /// Station metadata indexed by stn for O(1) lookups
    stations: HashMap<i32, Station>,
}

impl StationRegistry {
    /// Create a registry populated with the built-in station table
    pub fn builtin() -> Self {
        let stations = BUILTIN_STATIONS
            .iter()
            .map(|&(stn, name, latitude, longitude)| {
                (
                    stn,
                    Station {
                        stn,
                        name: name.to_string(),
                        latitude,
                        longitude,
                    },
                )
            })
            .collect();

        Self { stations }
    }

    /// Get station metadata by station id (O(1) lookup)
    pub fn get(&self, stn: i32) -> Option<&Station> {
        self.stations.get(&stn)
    }

    /// Get the display name for a station id
    ///
    /// Returns the fixed unknown-station label for ids not in the registry.
    pub fn display_name(&self, stn: i32) -> &str {
        self.stations
            .get(&stn)
            .map(|station| station.name.as_str())
            .unwrap_or(UNKNOWN_STATION_NAME)
    }

    /// Check if a station exists in the registry
    pub fn contains_station(&self, stn: i32) -> bool {
        self.stations.contains_key(&stn)
    }

    /// Get the total number of stations in the registry
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Get all stations, ordered by station id
    pub fn stations(&self) -> Vec<&Station> {
        let mut stations: Vec<&Station> = self.stations.values().collect();
        stations.sort_by_key(|station| station.stn);
        stations
    }

    /// Find stations by name pattern (case-insensitive substring match)
    pub fn find_by_name(&self, pattern: &str) -> Vec<&Station> {
        let pattern_lower = pattern.to_lowercase();
        let mut matches: Vec<&Station> = self
            .stations
            .values()
            .filter(|station| station.name.to_lowercase().contains(&pattern_lower))
            .collect();
        matches.sort_by_key(|station| station.stn);
        matches
    }
}

impl Default for StationRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_size() {
        let registry = StationRegistry::builtin();
        assert_eq!(registry.station_count(), 14);
    }

    #[test]
    fn test_known_station_lookup() {
        let registry = StationRegistry::builtin();

        let andong = registry.get(136).unwrap();
        assert_eq!(andong.name, "안동");
        assert!((andong.latitude - 36.5683).abs() < 1e-6);
        assert!((andong.longitude - 128.7089).abs() < 1e-6);

        assert!(registry.contains_station(115));
        assert_eq!(registry.display_name(283), "경주");
    }

    #[test]
    fn test_unknown_station_falls_back() {
        let registry = StationRegistry::builtin();

        assert!(registry.get(999).is_none());
        assert!(!registry.contains_station(999));
        assert_eq!(registry.display_name(999), "알 수 없음");
    }

    #[test]
    fn test_stations_ordered_by_id() {
        let registry = StationRegistry::builtin();
        let stations = registry.stations();
        assert_eq!(stations.first().unwrap().stn, 115);
        assert_eq!(stations.last().unwrap().stn, 283);
        assert!(stations.windows(2).all(|w| w[0].stn < w[1].stn));
    }

    #[test]
    fn test_find_by_name() {
        let registry = StationRegistry::builtin();

        let uljin = registry.find_by_name("울진");
        assert_eq!(uljin.len(), 1);
        assert_eq!(uljin[0].stn, 130);

        // Partial match hits 울릉도 and 울진
        let ul = registry.find_by_name("울");
        assert_eq!(ul.len(), 2);

        assert!(registry.find_by_name("서울").is_empty());
    }
}
