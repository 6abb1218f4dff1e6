use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 1500;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub presentation: PresentationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let processing_delay_ms = match env::var("APP_PROCESSING_DELAY_MS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidProcessingDelay { value: raw })?,
            Err(_) => DEFAULT_PROCESSING_DELAY_MS,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            presentation: PresentationConfig {
                processing_delay: Duration::from_millis(processing_delay_ms),
            },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Settings for the layer that renders diagnoses to people.
#[derive(Debug, Clone)]
pub struct PresentationConfig {
    /// Pause before showing a result so the analysis feels deliberate. It has
    /// no effect on the result itself.
    pub processing_delay: Duration,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidProcessingDelay { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidProcessingDelay { value } => write!(
                f,
                "APP_PROCESSING_DELAY_MS must be a whole number of milliseconds (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
