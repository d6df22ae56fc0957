use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weather condition categories driving both textual description and the
/// visual background theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    #[default]
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
    Foggy,
}

impl WeatherCondition {
    /// All conditions, in canonical order
    pub const ALL: [WeatherCondition; 6] = [
        Self::Sunny,
        Self::Cloudy,
        Self::Rainy,
        Self::Stormy,
        Self::Snowy,
        Self::Foggy,
    ];

    /// Canonical lowercase label, matching the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Stormy => "stormy",
            Self::Snowy => "snowy",
            Self::Foggy => "foggy",
        }
    }

    /// Parse a canonical label back into a condition
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "sunny" => Some(Self::Sunny),
            "cloudy" => Some(Self::Cloudy),
            "rainy" => Some(Self::Rainy),
            "stormy" => Some(Self::Stormy),
            "snowy" => Some(Self::Snowy),
            "foggy" => Some(Self::Foggy),
            _ => None,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Sunny => "Clear sky",
            Self::Cloudy => "Broken clouds",
            Self::Rainy => "Light rain",
            Self::Stormy => "Thunderstorm",
            Self::Snowy => "Light snow",
            Self::Foggy => "Mist",
        }
    }

    /// Get the OpenWeatherMap-style icon code
    pub fn icon_code(&self) -> &'static str {
        match self {
            Self::Sunny => "01d",
            Self::Cloudy => "04d",
            Self::Rainy => "10d",
            Self::Stormy => "11d",
            Self::Snowy => "13d",
            Self::Foggy => "50d",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A location offered as a search suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationCandidate {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationCandidate {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            latitude,
            longitude,
        }
    }

    /// Display form used in the query field: `"{name}, {country}"`
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

// A candidate's identity is its (name, country) pair; coordinates are
// incidental detail.
impl PartialEq for LocationCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.country == other.country
    }
}

impl Eq for LocationCandidate {}

/// A single weather observation for a location. Held only in UI state,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub location: String,
    pub country: String,
    /// Temperature in whole degrees Celsius
    pub temperature: i32,
    pub condition: WeatherCondition,
    pub description: String,
    /// Relative humidity, percent
    pub humidity: u8,
    /// Wind speed in km/h
    pub wind_speed: u32,
    pub feels_like: i32,
    pub icon: String,
    /// Redundant copy of the condition label, as upstream APIs report it
    pub condition_label: String,
    pub observed_at: DateTime<Utc>,
}

/// Location search errors
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Location lookup failed: {0}")]
    Lookup(String),

    #[error("Location source unavailable")]
    Unavailable,
}

/// Weather fetch errors
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Weather lookup failed: {0}")]
    Lookup(String),

    #[error("Weather source unavailable")]
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_labels_round_trip() {
        for condition in WeatherCondition::ALL {
            assert_eq!(WeatherCondition::from_label(condition.label()), Some(condition));
        }
        assert_eq!(WeatherCondition::from_label("SUNNY"), Some(WeatherCondition::Sunny));
        assert_eq!(WeatherCondition::from_label("drizzle"), None);
    }

    #[test]
    fn test_condition_serializes_as_lowercase_label() {
        for condition in WeatherCondition::ALL {
            let json = serde_json::to_string(&condition).unwrap();
            assert_eq!(json, format!("\"{}\"", condition.label()));
        }
    }

    #[test]
    fn test_condition_descriptions() {
        assert_eq!(WeatherCondition::Sunny.description(), "Clear sky");
        assert_eq!(WeatherCondition::Stormy.description(), "Thunderstorm");
        assert_eq!(WeatherCondition::Foggy.description(), "Mist");
    }

    #[test]
    fn test_condition_icon_codes() {
        assert_eq!(WeatherCondition::Sunny.icon_code(), "01d");
        assert_eq!(WeatherCondition::Snowy.icon_code(), "13d");
    }

    #[test]
    fn test_candidate_identity_is_name_and_country() {
        let a = LocationCandidate::new("London", "GB", 51.5074, -0.1278);
        let b = LocationCandidate::new("London", "GB", 0.0, 0.0);
        let c = LocationCandidate::new("London", "CA", 42.9849, -81.2453);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_candidate_display_name() {
        let candidate = LocationCandidate::new("Mumbai", "IN", 19.076, 72.8777);
        assert_eq!(candidate.display_name(), "Mumbai, IN");
    }
}
