//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with an environment variable
//! override for the API token (`PROMOCAL_API_TOKEN`, never stored in the
//! file).

use std::path::Path;

use chrono::Weekday;
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::api::{ApiClient, Session};
use crate::calendar::DEFAULT_WEEK_START;
use crate::error::{ConfigError, Result};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize)]
pub struct NetworkConfig {
    /// Base URL of the backend API, e.g. `http://localhost:8080/api`.
    pub api_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

const fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Calendar rendering options.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// First day of the displayed week ("sunday", "monday", ...).
    #[serde(default = "default_week_start")]
    pub week_start: String,
    /// Promotions listed per day before truncating to "+N more".
    #[serde(default = "default_visible_per_day")]
    pub visible_per_day: usize,
}

fn default_week_start() -> String {
    "sunday".to_string()
}

const fn default_visible_per_day() -> usize {
    3
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: default_week_start(),
            visible_per_day: default_visible_per_day(),
        }
    }
}

/// Authentication configuration.
/// The token is loaded from the `PROMOCAL_API_TOKEN` env var at runtime
/// (never from the config file).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Bearer token loaded from `PROMOCAL_API_TOKEN` at runtime.
    #[serde(skip)]
    pub token: Option<String>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let mut config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.auth.token = std::env::var("PROMOCAL_API_TOKEN").ok();

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.network.api_url.is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if let Err(e) = url::Url::parse(&self.network.api_url) {
            return Err(ConfigError::InvalidValue {
                field: "api_url",
                reason: e.to_string(),
            }
            .into());
        }
        if self.network.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }
        if self.calendar.week_start.parse::<Weekday>().is_err() {
            return Err(ConfigError::InvalidValue {
                field: "week_start",
                reason: format!("unrecognized weekday '{}'", self.calendar.week_start),
            }
            .into());
        }
        if self.calendar.visible_per_day == 0 {
            return Err(ConfigError::InvalidValue {
                field: "visible_per_day",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// The configured first day of the week.
    #[must_use]
    pub fn week_start(&self) -> Weekday {
        self.calendar
            .week_start
            .parse()
            .unwrap_or(DEFAULT_WEEK_START)
    }

    /// The session derived from the environment token, if any.
    #[must_use]
    pub fn session(&self) -> Session {
        match &self.auth.token {
            Some(token) => Session::with_token(token.clone()),
            None => Session::anonymous(),
        }
    }

    /// Build an [`ApiClient`] for the configured backend.
    pub fn client(&self) -> Result<ApiClient> {
        ApiClient::with_timeout(
            &self.network.api_url,
            self.session(),
            std::time::Duration::from_secs(self.network.request_timeout_secs),
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig {
                api_url: "http://localhost:8080/api".into(),
                request_timeout_secs: default_request_timeout_secs(),
            },
            logging: LoggingConfig {
                level: "info".into(),
                format: "pretty".into(),
            },
            calendar: CalendarConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl Config {
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}
