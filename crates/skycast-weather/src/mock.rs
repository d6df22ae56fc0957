//! In-memory mock data sources.
//!
//! Stand-ins for a real geocoding/weather API: canned data, simulated
//! latency, no failure modes. Latency is constructor-overridable so tests
//! can run against a zero-delay source.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;

use crate::source::{LocationSource, WeatherSource};
use crate::types::{
    FetchError, LocationCandidate, SearchError, WeatherCondition, WeatherObservation,
};

/// Upper bound on returned suggestions, mirroring typical geocoding API
/// page sizes
pub const MAX_SUGGESTIONS: usize = 5;

const SEARCH_LATENCY: Duration = Duration::from_millis(500);
const FETCH_LATENCY: Duration = Duration::from_millis(800);

/// Fixed candidate list, matched in this order.
const CITIES: &[(&str, &str, f64, f64)] = &[
    ("Mumbai", "IN", 19.076, 72.8777),
    ("Delhi", "IN", 28.6139, 77.209),
    ("Bangalore", "IN", 12.9716, 77.5946),
    ("Chennai", "IN", 13.0827, 80.2707),
    ("Kolkata", "IN", 22.5726, 88.3639),
    ("Hyderabad", "IN", 17.385, 78.4867),
    ("Pune", "IN", 18.5204, 73.8567),
    ("Ahmedabad", "IN", 23.0225, 72.5714),
    ("Jaipur", "IN", 26.9124, 75.7873),
    ("Lucknow", "IN", 26.8467, 80.9462),
    ("London", "GB", 51.5074, -0.1278),
    ("Paris", "FR", 48.8566, 2.3522),
    ("New York", "US", 40.7128, -74.006),
    ("Tokyo", "JP", 35.6762, 139.6503),
    ("Sydney", "AU", -33.8688, 151.2093),
    ("Berlin", "DE", 52.52, 13.405),
];

/// One canned profile per condition; description and icon come from the
/// condition itself.
struct ConditionProfile {
    condition: WeatherCondition,
    temperature: i32,
    humidity: u8,
    wind_speed: u32,
}

const PROFILES: [ConditionProfile; 6] = [
    ConditionProfile {
        condition: WeatherCondition::Sunny,
        temperature: 24,
        humidity: 45,
        wind_speed: 12,
    },
    ConditionProfile {
        condition: WeatherCondition::Cloudy,
        temperature: 18,
        humidity: 65,
        wind_speed: 8,
    },
    ConditionProfile {
        condition: WeatherCondition::Rainy,
        temperature: 15,
        humidity: 85,
        wind_speed: 15,
    },
    ConditionProfile {
        condition: WeatherCondition::Stormy,
        temperature: 16,
        humidity: 90,
        wind_speed: 25,
    },
    ConditionProfile {
        condition: WeatherCondition::Snowy,
        temperature: -2,
        humidity: 80,
        wind_speed: 10,
    },
    ConditionProfile {
        condition: WeatherCondition::Foggy,
        temperature: 12,
        humidity: 95,
        wind_speed: 5,
    },
];

/// Mock location search over the fixed city list.
#[derive(Debug, Clone)]
pub struct MockLocationSource {
    latency: Duration,
}

impl MockLocationSource {
    pub fn new() -> Self {
        Self {
            latency: SEARCH_LATENCY,
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for MockLocationSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationSource for MockLocationSource {
    async fn search(&self, query: &str) -> Result<Vec<LocationCandidate>, SearchError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        tokio::time::sleep(self.latency).await;

        let matches: Vec<LocationCandidate> = CITIES
            .iter()
            .filter(|(name, country, _, _)| {
                name.to_lowercase().contains(&needle) || country.to_lowercase().contains(&needle)
            })
            .take(MAX_SUGGESTIONS)
            .map(|&(name, country, latitude, longitude)| {
                LocationCandidate::new(name, country, latitude, longitude)
            })
            .collect();

        tracing::debug!(query = %needle, count = matches.len(), "mock location search");
        Ok(matches)
    }
}

/// Mock weather source: a uniformly random pick among the canned profiles.
/// Coordinates are accepted but do not influence the result.
#[derive(Debug, Clone)]
pub struct MockWeatherSource {
    latency: Duration,
}

impl MockWeatherSource {
    pub fn new() -> Self {
        Self {
            latency: FETCH_LATENCY,
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for MockWeatherSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherSource for MockWeatherSource {
    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        location_name: &str,
    ) -> Result<WeatherObservation, FetchError> {
        tokio::time::sleep(self.latency).await;

        let (profile, offset) = {
            let mut rng = rand::thread_rng();
            let profile = &PROFILES[rng.gen_range(0..PROFILES.len())];
            // Feels-like offset in [-3, +2]
            (profile, rng.gen_range(0..6i32) - 3)
        };

        tracing::debug!(
            latitude,
            longitude,
            condition = profile.condition.label(),
            "mock weather observation"
        );

        Ok(WeatherObservation {
            location: location_name.to_string(),
            country: "Example".to_string(),
            temperature: profile.temperature,
            condition: profile.condition,
            description: profile.condition.description().to_string(),
            humidity: profile.humidity,
            wind_speed: profile.wind_speed,
            feels_like: profile.temperature + offset,
            icon: profile.condition.icon_code().to_string(),
            condition_label: profile.condition.label().to_string(),
            observed_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locations() -> MockLocationSource {
        MockLocationSource::with_latency(Duration::ZERO)
    }

    fn weather() -> MockWeatherSource {
        MockWeatherSource::with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_search_caps_results_at_five() {
        // "a" appears in far more than five city names
        let results = locations().search("a").await.unwrap();
        assert_eq!(results.len(), MAX_SUGGESTIONS);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let lower = locations().search("lon").await.unwrap();
        let mixed = locations().search("LoN").await.unwrap();
        assert_eq!(lower, mixed);
        assert!(lower.iter().any(|c| c.name == "London" && c.country == "GB"));
    }

    #[tokio::test]
    async fn test_search_matches_country_code() {
        let results = locations().search("fr").await.unwrap();
        assert!(results.iter().any(|c| c.country == "FR"));
    }

    #[tokio::test]
    async fn test_search_preserves_list_order() {
        let results = locations().search("a").await.unwrap();
        let names: Vec<&str> = results.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["Mumbai", "Bangalore", "Chennai", "Kolkata", "Hyderabad"]
        );
    }

    #[tokio::test]
    async fn test_search_whitespace_query_is_empty_and_instant() {
        // A latency-bearing source would hang a paused clock if it slept here
        let source = MockLocationSource::new();
        let results = tokio::time::timeout(Duration::from_millis(50), source.search("   "))
            .await
            .unwrap()
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_search_no_match_is_empty() {
        let results = locations().search("zzzz").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_feels_like_stays_in_range() {
        let source = weather();
        for _ in 0..200 {
            let obs = source.fetch(0.0, 0.0, "Testville").await.unwrap();
            assert!(obs.feels_like >= obs.temperature - 3);
            assert!(obs.feels_like <= obs.temperature + 2);
        }
    }

    #[tokio::test]
    async fn test_fetch_profile_is_internally_consistent() {
        let source = weather();
        for _ in 0..50 {
            let obs = source.fetch(51.5, -0.13, "London").await.unwrap();
            assert!(WeatherCondition::ALL.contains(&obs.condition));
            assert_eq!(obs.description, obs.condition.description());
            assert_eq!(obs.icon, obs.condition.icon_code());
            assert_eq!(obs.condition_label, obs.condition.label());
            assert_eq!(obs.location, "London");
        }
    }

    #[tokio::test]
    async fn test_fetch_eventually_covers_all_conditions() {
        let source = weather();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let obs = source.fetch(0.0, 0.0, "x").await.unwrap();
            seen.insert(obs.condition);
            if seen.len() == WeatherCondition::ALL.len() {
                return;
            }
        }
        panic!("not all conditions observed in 500 draws: {seen:?}");
    }
}
