use anyhow::Result;
use std::sync::Arc;

use crate::Config;

/// Main application state and lifecycle manager
pub struct App {
    config: Arc<Config>,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        let (config, _validation) = Config::load_validated()?;
        let config = Arc::new(config);

        Ok(Self { config })
    }

    /// Create an application instance from an already-loaded config
    pub fn with_config(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Initialize the application
    pub fn initialize(&self) -> Result<()> {
        tracing::info!(
            "Application initialized (config dir: {})",
            self.config.config_dir.display()
        );
        Ok(())
    }

    /// Shutdown the application
    pub fn shutdown(&self) -> Result<()> {
        tracing::info!("Shutting down application");
        Ok(())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_config_exposes_settings() {
        let app = App::with_config(Config::default());
        assert_eq!(app.config().search.debounce_ms, 300);
        app.initialize().unwrap();
        app.shutdown().unwrap();
    }
}
