//! Application configuration.
//!
//! Reads environment variables once at startup and validates them.

/// Smallest window the board and side panel fit in
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// Desktop application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Initial window size
    pub window: WindowConfig,
    /// Draw row/column labels around the board
    pub show_coordinates: bool,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                width: 900.0,
                height: 720.0,
            },
            show_coordinates: true,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for unset or unparseable values.
    ///
    /// # Errors
    ///
    /// Returns error if the loaded values fail [`AppConfig::validate`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            window: WindowConfig {
                width: parse_env_or("OMOK_WINDOW_WIDTH", defaults.window.width),
                height: parse_env_or("OMOK_WINDOW_HEIGHT", defaults.window.height),
            },
            show_coordinates: parse_env_or("OMOK_SHOW_COORDINATES", defaults.show_coordinates),
            log_filter: std::env::var("OMOK_LOG").unwrap_or(defaults.log_filter),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        let WindowConfig { width, height } = self.window;

        if !width.is_finite() || width < MIN_WINDOW_WIDTH {
            return Err(ConfigError::Invalid {
                var: "OMOK_WINDOW_WIDTH".to_string(),
                reason: format!("Must be at least {MIN_WINDOW_WIDTH}"),
            });
        }

        if !height.is_finite() || height < MIN_WINDOW_HEIGHT {
            return Err(ConfigError::Invalid {
                var: "OMOK_WINDOW_HEIGHT".to_string(),
                reason: format!("Must be at least {MIN_WINDOW_HEIGHT}"),
            });
        }

        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "OMOK_LOG".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
