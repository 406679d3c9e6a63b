use crate::matching::{MatcherConfig, NicknamePolicy};
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of deployment.
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

/// Top-level configuration for binaries embedding the matcher.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub matching: MatchingConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("FUZZY_NAMES_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let nickname_policy = match env::var("FUZZY_NAMES_NICKNAME_POLICY") {
            Ok(value) => value
                .parse::<NicknamePolicy>()
                .map_err(|_| ConfigError::InvalidNicknamePolicy { value })?,
            Err(_) => NicknamePolicy::default(),
        };

        let log_level = env::var("FUZZY_NAMES_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            matching: MatchingConfig { nickname_policy },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings forwarded to the match engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchingConfig {
    pub nickname_policy: NicknamePolicy,
}

impl From<MatchingConfig> for MatcherConfig {
    fn from(value: MatchingConfig) -> Self {
        MatcherConfig {
            nickname_policy: value.nickname_policy,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNicknamePolicy { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNicknamePolicy { value } => write!(
                f,
                "FUZZY_NAMES_NICKNAME_POLICY must be 'first' or 'unique' (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
