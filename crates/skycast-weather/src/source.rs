//! Injectable data-source capabilities.
//!
//! The page layer only ever talks to these traits, so the bundled mocks can
//! be swapped for real geocoding/weather clients (or deterministic fakes in
//! tests) without touching the interaction flow.

use async_trait::async_trait;

use crate::types::{FetchError, LocationCandidate, SearchError, WeatherObservation};

/// Resolves free-text queries into ranked location candidates.
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// Search for locations matching `query`.
    ///
    /// Returns at most a handful of candidates; an empty or whitespace-only
    /// query yields an empty list.
    async fn search(&self, query: &str) -> Result<Vec<LocationCandidate>, SearchError>;
}

/// Produces a current weather observation for a position.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch the current observation for the given coordinates.
    ///
    /// `location_name` is echoed back in the observation for display.
    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        location_name: &str,
    ) -> Result<WeatherObservation, FetchError>;
}
