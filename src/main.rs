use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use skycast_core::{App, Config, TemperatureUnit};
use skycast_ui::{PageController, PageModel};
use skycast_weather::{
    theme_for, Gradient, MockLocationSource, MockWeatherSource, MotionLayer, WeatherCondition,
    WeatherObservation,
};

const BAND_WIDTH: usize = 44;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    skycast_core::init()?;

    let app = App::new()?;
    app.initialize()?;

    tracing::info!("SkyCast application started");

    let debounce = Duration::from_millis(app.config().search.debounce_ms);
    let locations = Arc::new(MockLocationSource::new());
    let weather = Arc::new(MockWeatherSource::new());
    let mut controller = PageController::new(locations, weather, debounce);

    println!("SkyCast - weather lookup");
    println!("Type a city name to search, the number of a suggestion to pick it, 'quit' to exit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let input = line.trim().to_string();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        if let Some(index) = parse_pick(&input, controller.model()) {
            controller.select(index);
            println!("Getting weather data...");
        } else {
            controller.input(input);
        }

        controller.settle().await;
        render(controller.model(), app.config());
        prompt()?;
    }

    app.shutdown()?;
    Ok(())
}

/// Interpret a line as a 1-based suggestion pick when the panel is open.
fn parse_pick(input: &str, model: &PageModel) -> Option<usize> {
    if !model.suggestions_visible() {
        return None;
    }
    let choice: usize = input.parse().ok()?;
    if choice >= 1 && choice <= model.suggestions().len() {
        Some(choice - 1)
    } else {
        None
    }
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

fn render(model: &PageModel, config: &Config) {
    if let Some(message) = model.error_message() {
        println!("! {message}");
    }

    if model.suggestions_visible() {
        if model.suggestions().is_empty() {
            println!("No matching locations.");
        } else {
            for (i, candidate) in model.suggestions().iter().enumerate() {
                println!("  {}. {}", i + 1, candidate.display_name());
            }
            println!("Enter a number to pick a location.");
        }
    }

    if let Some(obs) = model.observation() {
        render_card(obs, config);
    }
}

fn render_card(obs: &WeatherObservation, config: &Config) {
    let theme = theme_for(obs.condition);
    let unit = config.weather.temperature_unit;

    println!();
    if config.ui.show_animations {
        render_gradient(&theme.gradient);
    }
    println!("  {}  {}", condition_glyph(obs.condition), obs.location);
    println!("  {}", obs.description);
    println!(
        "  {}  (feels like {})",
        format_temp(obs.temperature, unit),
        format_temp(obs.feels_like, unit)
    );
    println!(
        "  humidity {}%   wind {} km/h   observed {}",
        obs.humidity,
        obs.wind_speed,
        obs.observed_at.format("%H:%M UTC")
    );
    if config.ui.show_animations {
        render_layers(&theme.layers);
    }
    println!();
}

/// Paint the theme gradient as three full-width truecolor bands.
fn render_gradient(gradient: &Gradient) {
    let band = " ".repeat(BAND_WIDTH);
    for stop in [gradient.top, gradient.middle, gradient.bottom] {
        if let Some((r, g, b)) = parse_hex(stop) {
            println!("\x1b[48;2;{r};{g};{b}m{band}\x1b[0m");
        }
    }
}

fn render_layers(layers: &[MotionLayer]) {
    for layer in layers {
        match layer {
            MotionLayer::Sun { pulse } => {
                let suffix = if *pulse { " (pulsing)" } else { "" };
                println!("  * sun disc{suffix}");
            }
            MotionLayer::Clouds { count, .. } => {
                println!("  ~ {count} drifting clouds");
            }
            MotionLayer::Rain {
                streaks,
                fall_secs_min,
                fall_secs_max,
            } => {
                println!("  | {streaks} rain streaks ({fall_secs_min}-{fall_secs_max}s fall)");
            }
            MotionLayer::Snow {
                flakes,
                fall_secs_min,
                fall_secs_max,
            } => {
                println!("  . {flakes} snowflakes ({fall_secs_min}-{fall_secs_max}s fall)");
            }
            MotionLayer::Fog { bands, .. } => {
                println!("  = {bands} fog bands");
            }
            MotionLayer::LightningFlash { period_secs } => {
                println!("  ! lightning flash every ~{period_secs}s");
            }
        }
    }
}

fn condition_glyph(condition: WeatherCondition) -> &'static str {
    match condition {
        WeatherCondition::Sunny => "☀",
        WeatherCondition::Cloudy => "☁",
        WeatherCondition::Rainy => "🌧",
        WeatherCondition::Stormy => "⛈",
        WeatherCondition::Snowy => "❄",
        WeatherCondition::Foggy => "🌫",
    }
}

fn format_temp(celsius: i32, unit: TemperatureUnit) -> String {
    match unit {
        TemperatureUnit::Celsius => format!("{celsius}°C"),
        TemperatureUnit::Fahrenheit => format!("{}°F", celsius * 9 / 5 + 32),
    }
}

/// Parse `#rrggbb` into components; unknown formats render no band.
fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
