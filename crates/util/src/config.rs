use std::{env, fmt, net::SocketAddr};

use url::Url;

use super::server_bind_address;

pub const DEFAULT_ORDER_SERVICE_URL: &str = "http://127.0.0.1:9200/api/v1/";

/// Application runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    fn from_str(value: &str) -> Result<Self, ConfigError> {
        match value {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }

    /// Returns `true` when the current environment should behave as development.
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Returns the canonical name used for logging/metrics labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

/// Runtime configuration resolved from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub environment: Environment,
    pub order_service_url: Url,
}

impl AppConfig {
    /// Constructs the configuration by reading and validating environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_value = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let environment = Environment::from_str(&env_value)?;
        let bind_addr = server_bind_address().map_err(ConfigError::BindAddress)?;
        let order_service_url = order_service_url()?;

        Ok(Self {
            bind_addr,
            environment,
            order_service_url,
        })
    }
}

/// Resolves the order service base URL from `ORDER_SERVICE_URL`.
///
/// The path is normalized to end with `/` so that joining endpoint paths
/// appends segments instead of replacing the last one.
fn order_service_url() -> Result<Url, ConfigError> {
    let value =
        env::var("ORDER_SERVICE_URL").unwrap_or_else(|_| DEFAULT_ORDER_SERVICE_URL.to_string());
    let mut url = Url::parse(&value).map_err(ConfigError::OrderServiceUrl)?;
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    Ok(url)
}

/// Errors that can occur during configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    InvalidEnvironment(String),
    BindAddress(std::net::AddrParseError),
    OrderServiceUrl(url::ParseError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnvironment(value) => write!(
                f,
                "APP_ENV must be one of 'development', 'production', or 'test' (got {value})"
            ),
            Self::BindAddress(err) => write!(f, "invalid APP_BIND_ADDR value: {err}"),
            Self::OrderServiceUrl(err) => write!(f, "invalid ORDER_SERVICE_URL value: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}
