//! Application configuration module
//!
//! Provides configuration types for the application.

use std::time::Duration;

use thiserror::Error;

/// Simulated network latency of the mock data source
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(500);

/// Fetch delays above this are rejected as misconfiguration
pub const MAX_FETCH_DELAY: Duration = Duration::from_secs(30);

/// Initial window size in logical pixels
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1100.0, 760.0];

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Delay applied by the mock data source before each response
    pub fetch_delay: Duration,
    /// Initial window size
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fetch_delay: DEFAULT_FETCH_DELAY,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_delay > MAX_FETCH_DELAY {
            return Err(ConfigError::OutOfRange {
                field: "fetch_delay",
                value: format!("{:?}", self.fetch_delay),
            });
        }
        let [width, height] = self.window_size;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "window_size",
                value: format!("{}x{}", width, height),
            });
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    fetch_delay: Option<Duration>,
    window_size: Option<[f32; 2]>,
}

impl AppConfigBuilder {
    /// Set the simulated fetch delay
    pub fn fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = Some(delay);
        self
    }

    /// Set the initial window size
    pub fn window_size(mut self, size: [f32; 2]) -> Self {
        self.window_size = Some(size);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            fetch_delay: self.fetch_delay.unwrap_or(DEFAULT_FETCH_DELAY),
            window_size: self.window_size.unwrap_or(DEFAULT_WINDOW_SIZE),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
