use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::rng::EntropySource;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;
pub const DEFAULT_HISTORY_RETENTION: usize = 500;

/// Distinguishes runtime behavior for different stages of the service.
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
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub advisor: AdvisorConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let rng_seed = match env::var("APP_RNG_SEED") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed)?,
            ),
            _ => None,
        };

        let history_limit = match env::var("APP_HISTORY_LIMIT") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidHistoryLimit)?,
            Err(_) => DEFAULT_HISTORY_LIMIT,
        };

        // never keep fewer records than a listing can show
        let history_retention = match env::var("APP_HISTORY_RETENTION") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidHistoryRetention)?,
            Err(_) => DEFAULT_HISTORY_RETENTION,
        }
        .max(history_limit);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            advisor: AdvisorConfig {
                rng_seed,
                history_limit,
                history_retention,
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Knobs for the estimator, diagnoser, and history views.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Fixed seed for jitter and sampling; `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
    /// Records returned by each history listing.
    pub history_limit: usize,
    /// Records kept per history; older ones are evicted.
    pub history_retention: usize,
}

impl AdvisorConfig {
    pub fn entropy(&self) -> EntropySource {
        EntropySource::from_seed(self.rng_seed)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidSeed,
    InvalidHistoryLimit,
    InvalidHistoryRetention,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidSeed => write!(f, "APP_RNG_SEED must be an unsigned integer"),
            ConfigError::InvalidHistoryLimit => {
                write!(f, "APP_HISTORY_LIMIT must be a non-negative integer")
            }
            ConfigError::InvalidHistoryRetention => {
                write!(f, "APP_HISTORY_RETENTION must be a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidSeed
            | ConfigError::InvalidHistoryLimit
            | ConfigError::InvalidHistoryRetention => None,
        }
    }
}
