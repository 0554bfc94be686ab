use std::fmt;
use std::net::SocketAddr;

use thiserror::Error;
use tracing::debug;

const DEFAULT_APP_NAME: &str = "OnePanel";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid APP_ENV value: {0}")]
    InvalidEnvironment(String),

    #[error("Invalid BIND_ADDR value: {0}")]
    InvalidBindAddr(String),
}

/// Deployment environment; production turns on the `Secure` cookie flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" | "test" => Ok(Self::Development),
            _ => Err(ConfigError::InvalidEnvironment(raw.to_string())),
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

/// Upstream service URLs, server-side only
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceUrls {
    pub auth: Option<String>,
    pub api: Option<String>,
}

/// Immutable server configuration, built once at startup and shared through `AppState`
#[derive(Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub environment: Environment,
    pub api_secret: Option<String>,
    pub services: ServiceUrls,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Reads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment = match get("APP_ENV") {
            Some(raw) => Environment::parse(&raw)?,
            None => Environment::default(),
        };

        let raw_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_addr.clone()))?;

        let config = Self {
            app_name: get("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            environment,
            api_secret: get("API_SECRET"),
            services: ServiceUrls {
                auth: get("AUTH_SERVICE_URL"),
                api: get("API_SERVICE_URL"),
            },
            bind_addr,
        };

        debug!(config = ?config, "Configuration loaded");

        Ok(config)
    }

    /// Whether the session cookie should carry the `Secure` attribute
    pub fn secure_cookies(&self) -> bool {
        self.environment.is_production()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            environment: Environment::Development,
            api_secret: None,
            services: ServiceUrls::default(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("app_name", &self.app_name)
            .field("environment", &self.environment)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("services", &self.services)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}
