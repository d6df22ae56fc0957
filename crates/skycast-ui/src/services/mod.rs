pub mod search_service;
pub mod weather_service;

pub use search_service::{request_search, SearchError, SearchServiceMessage};
pub use weather_service::{request_fetch, WeatherError, WeatherServiceMessage};
