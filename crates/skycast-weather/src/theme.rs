//! Condition-to-visual-theme mapping.
//!
//! Each condition maps to a distinct full-screen treatment: a three-stop
//! vertical gradient plus an ordered stack of decorative motion layers. The
//! mapping is pure data; renderers decide how (or whether) to animate it.

use crate::types::WeatherCondition;

/// Three-stop vertical gradient, top to bottom, as `#rrggbb` colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub top: &'static str,
    pub middle: &'static str,
    pub bottom: &'static str,
}

/// A decorative animated layer stacked over the gradient, back to front.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionLayer {
    /// Sun disc with a soft expanding halo.
    Sun { pulse: bool },
    /// Drifting cloud shapes.
    Clouds {
        count: u8,
        opacity: f32,
        drift_secs: f32,
    },
    /// Falling rain streaks; each streak picks a fall duration in the range.
    Rain {
        streaks: u16,
        fall_secs_min: f32,
        fall_secs_max: f32,
    },
    /// Falling snow particles.
    Snow {
        flakes: u16,
        fall_secs_min: f32,
        fall_secs_max: f32,
    },
    /// Horizontal fog bands drifting in alternating directions.
    Fog { bands: u8, opacity: f32 },
    /// Brief full-screen lightning flash, repeating.
    LightningFlash { period_secs: f32 },
}

/// Full-screen background treatment for one condition.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherTheme {
    pub name: &'static str,
    pub gradient: Gradient,
    pub layers: Vec<MotionLayer>,
}

/// Map a condition to its background treatment. Total over the enum; the
/// `Default` condition doubles as the fallback theme.
pub fn theme_for(condition: WeatherCondition) -> WeatherTheme {
    match condition {
        WeatherCondition::Sunny => WeatherTheme {
            name: "sunny",
            gradient: Gradient {
                top: "#60a5fa",
                middle: "#93c5fd",
                bottom: "#fef08a",
            },
            layers: vec![
                MotionLayer::Sun { pulse: true },
                MotionLayer::Clouds {
                    count: 3,
                    opacity: 0.25,
                    drift_secs: 8.0,
                },
            ],
        },
        WeatherCondition::Cloudy => WeatherTheme {
            name: "cloudy",
            gradient: Gradient {
                top: "#9ca3af",
                middle: "#d1d5db",
                bottom: "#f3f4f6",
            },
            layers: vec![MotionLayer::Clouds {
                count: 5,
                opacity: 0.6,
                drift_secs: 6.0,
            }],
        },
        WeatherCondition::Rainy => WeatherTheme {
            name: "rainy",
            gradient: Gradient {
                top: "#4b5563",
                middle: "#6b7280",
                bottom: "#9ca3af",
            },
            layers: vec![
                MotionLayer::Clouds {
                    count: 2,
                    opacity: 0.75,
                    drift_secs: 8.0,
                },
                MotionLayer::Rain {
                    streaks: 100,
                    fall_secs_min: 0.5,
                    fall_secs_max: 1.0,
                },
            ],
        },
        WeatherCondition::Stormy => WeatherTheme {
            name: "stormy",
            gradient: Gradient {
                top: "#111827",
                middle: "#1f2937",
                bottom: "#374151",
            },
            layers: vec![
                MotionLayer::Clouds {
                    count: 2,
                    opacity: 0.85,
                    drift_secs: 8.0,
                },
                MotionLayer::LightningFlash { period_secs: 4.0 },
                MotionLayer::Rain {
                    streaks: 150,
                    fall_secs_min: 0.3,
                    fall_secs_max: 0.6,
                },
            ],
        },
        WeatherCondition::Snowy => WeatherTheme {
            name: "snowy",
            gradient: Gradient {
                top: "#cbd5e1",
                middle: "#e2e8f0",
                bottom: "#ffffff",
            },
            layers: vec![
                MotionLayer::Clouds {
                    count: 2,
                    opacity: 0.85,
                    drift_secs: 8.0,
                },
                MotionLayer::Snow {
                    flakes: 80,
                    fall_secs_min: 2.0,
                    fall_secs_max: 4.0,
                },
            ],
        },
        WeatherCondition::Foggy => WeatherTheme {
            name: "foggy",
            gradient: Gradient {
                top: "#9ca3af",
                middle: "#d1d5db",
                bottom: "#e5e7eb",
            },
            layers: vec![MotionLayer::Fog {
                bands: 5,
                opacity: 0.4,
            }],
        },
    }
}
