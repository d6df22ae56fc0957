//! Centralized error types for the SkyCast application.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides user-friendly messages suitable for UI display
//! - Preserves full error context for debugging/logging

use thiserror::Error;

/// Top-level application error type.
///
/// All errors in the SkyCast application should be convertible to this type.
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Location search error: {0}")]
    Search(#[from] SearchError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    ///
    /// These messages are designed to be actionable and non-technical.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Search(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Location search errors.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Location lookup failed: {0}")]
    LookupFailed(String),

    #[error("Location search unavailable")]
    ServiceUnavailable,
}

impl SearchError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::LookupFailed(_) => "Location search failed. Try typing again.",
            SearchError::ServiceUnavailable => {
                "Location search is unavailable. Please try again later."
            }
        }
    }
}

/// Weather lookup errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Weather fetch failed: {0}")]
    FetchFailed(String),

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Weather service unavailable")]
    ServiceUnavailable,
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::FetchFailed(_) => "Weather lookup failed. Re-select the location.",
            WeatherError::LocationNotFound(_) => "Location not found. Check and try again.",
            WeatherError::ServiceUnavailable => {
                "Weather service unavailable. Please try again later."
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Configuration not found. Using defaults.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_conversion() {
        let search_err = SearchError::ServiceUnavailable;
        let app_err: AppError = search_err.into();
        assert!(matches!(
            app_err,
            AppError::Search(SearchError::ServiceUnavailable)
        ));
    }

    #[test]
    fn test_user_message_propagation() {
        let app_err = AppError::Weather(WeatherError::ServiceUnavailable);
        assert_eq!(
            app_err.user_message(),
            "Weather service unavailable. Please try again later."
        );
    }

    #[test]
    fn test_user_messages_are_non_empty() {
        let errors = [
            AppError::Search(SearchError::LookupFailed("boom".into())),
            AppError::Weather(WeatherError::FetchFailed("boom".into())),
            AppError::Config(ConfigError::Invalid("boom".into())),
        ];

        for err in errors {
            assert!(!err.user_message().is_empty());
        }
    }
}
