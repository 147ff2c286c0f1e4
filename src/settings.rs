//! Runtime settings from environment variables (a `.env` file is honoured by the binary).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

pub const DATABASE_FILE_VAR: &str = "CUSTOMER_API_DATABASE_FILE";
pub const BIND_VAR: &str = "CUSTOMER_API_BIND";
pub const ENV_VAR: &str = "CUSTOMER_API_ENV";
pub const MAX_CONNECTIONS_VAR: &str = "CUSTOMER_API_MAX_CONNECTIONS";
pub const MAX_BODY_BYTES_VAR: &str = "CUSTOMER_API_MAX_BODY_BYTES";

pub const DEFAULT_DATABASE_FILE: &str = "Customers.db";
pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

/// Hosting environment. Development enables the secret-listing route and
/// diagnostic error bodies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ConfigError::InvalidValue {
                var: ENV_VAR,
                message: format!("expected 'development' or 'production', got '{}'", other),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_file: PathBuf,
    pub bind: SocketAddr,
    pub environment: Environment,
    pub max_connections: u32,
    pub max_body_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_file: PathBuf::from(DEFAULT_DATABASE_FILE),
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            environment: Environment::Production,
            max_connections: 5,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable source; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(path) = lookup(DATABASE_FILE_VAR).filter(|s| !s.trim().is_empty()) {
            settings.database_file = PathBuf::from(path);
        }
        if let Some(bind) = lookup(BIND_VAR) {
            settings.bind = parse_var(BIND_VAR, &bind)?;
        }
        if let Some(env) = lookup(ENV_VAR) {
            settings.environment = env.parse()?;
        }
        if let Some(n) = lookup(MAX_CONNECTIONS_VAR) {
            settings.max_connections = parse_var(MAX_CONNECTIONS_VAR, &n)?;
            if settings.max_connections == 0 {
                return Err(ConfigError::InvalidValue {
                    var: MAX_CONNECTIONS_VAR,
                    message: "must be at least 1".into(),
                });
            }
        }
        if let Some(n) = lookup(MAX_BODY_BYTES_VAR) {
            settings.max_body_bytes = parse_var(MAX_BODY_BYTES_VAR, &n)?;
        }
        Ok(settings)
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        var,
        message: e.to_string(),
    })
}
