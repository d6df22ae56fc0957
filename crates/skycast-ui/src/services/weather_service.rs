//! Weather backend: async observation fetching.
//! Source calls run off the update loop; results sent back via channel.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use skycast_weather::{LocationCandidate, WeatherObservation, WeatherSource};

/// Error type for weather operations
#[derive(Debug, Clone)]
pub enum WeatherError {
    Source(String),
}

impl std::fmt::Display for WeatherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherError::Source(s) => write!(f, "Weather error: {}", s),
        }
    }
}

impl std::error::Error for WeatherError {}

/// Messages sent from async operations back to the update loop
#[derive(Debug)]
pub enum WeatherServiceMessage {
    /// Result of fetching a weather observation
    FetchDone {
        result: Result<WeatherObservation, WeatherError>,
    },
}

/// Request a weather observation for a candidate asynchronously.
/// Sends `FetchDone` on the channel when complete.
/// Must be called from within a Tokio runtime.
pub fn request_fetch(
    tx: &UnboundedSender<WeatherServiceMessage>,
    source: Arc<dyn WeatherSource>,
    candidate: LocationCandidate,
) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = source
            .fetch(candidate.latitude, candidate.longitude, &candidate.name)
            .await
            .map_err(|e| WeatherError::Source(e.to_string()));
        let _ = tx.send(WeatherServiceMessage::FetchDone { result });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_error_display() {
        assert!(format!("{}", WeatherError::Source("timeout".into())).contains("Weather"));
    }

    #[test]
    fn weather_service_message_variants() {
        let _done: WeatherServiceMessage = WeatherServiceMessage::FetchDone {
            result: Err(WeatherError::Source("boom".into())),
        };
    }
}
