use crate::services::weather_service::WeatherError as UiWeatherError;
use skycast_core::{AppError, WeatherError};

impl From<UiWeatherError> for AppError {
    fn from(e: UiWeatherError) -> Self {
        match e {
            UiWeatherError::Source(s) => AppError::Weather(WeatherError::FetchFailed(s)),
        }
    }
}
