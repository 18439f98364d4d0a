use std::time::Duration;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Environment variable overriding the simulated fetch delay, in milliseconds
pub const FETCH_DELAY_ENV: &str = "PORTAL_FETCH_DELAY_MS";

/// Application configuration wrapper.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self { app: builder.build()? })
    }

    /// Read overrides from the environment. Bad values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut builder = AppConfig::builder();

        if let Some(raw) = lookup(FETCH_DELAY_ENV) {
            match parse_delay_ms(&raw) {
                Ok(delay) => builder = builder.fetch_delay(delay),
                Err(e) => tracing::warn!("[CONFIG] {}, using default", e),
            }
        }

        match builder.build() {
            Ok(app) => Self { app },
            Err(e) => {
                tracing::warn!("[CONFIG] {}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn fetch_delay(&self) -> Duration {
        self.app.fetch_delay
    }

    pub fn window_size(&self) -> [f32; 2] {
        self.app.window_size
    }
}

fn parse_delay_ms(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidValue {
            key: FETCH_DELAY_ENV,
            value: raw.to_string(),
        })
}
