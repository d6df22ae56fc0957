//! Weather domain for SkyCast
//!
//! Provides the condition/observation data model, injectable location and
//! weather data-source capabilities with in-memory mock implementations,
//! and the condition-to-visual-theme mapping.

pub mod mock;
pub mod source;
pub mod theme;
pub mod types;

pub use mock::{MockLocationSource, MockWeatherSource, MAX_SUGGESTIONS};
pub use source::{LocationSource, WeatherSource};
pub use theme::{theme_for, Gradient, MotionLayer, WeatherTheme};
pub use types::*;
