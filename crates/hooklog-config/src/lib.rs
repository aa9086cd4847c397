//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{DatabaseDriver, DriverError};

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database driver.
    pub driver: DatabaseDriver,
    /// Postgres options.
    pub pg: DatabasePgConfig,
}

#[derive(Debug, Clone)]
pub struct DatabasePgConfig {
    /// Database URL.
    pub url: String,
    /// Database pool size.
    pub pool_size: u32,
    /// Database connection timeout (in seconds)
    pub connection_timeout: u32,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database options.
    pub database: DatabaseConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Server options.
    pub server: ServerConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, DriverError> {
        let driver = DatabaseDriver::from_str(&env_to_str("HOOKLOG_DATABASE_DRIVER", "pg"))?;
        Ok(Self::from_env_with_driver(driver, version))
    }

    /// Create configuration from environment, without version.
    ///
    /// Falls back on the memory driver when the driver variable is invalid.
    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
            .unwrap_or_else(|_| Self::from_env_with_driver(DatabaseDriver::Memory, "0.0.0".into()))
    }

    fn from_env_with_driver(driver: DatabaseDriver, version: String) -> Self {
        Config {
            database: DatabaseConfig {
                driver,
                pg: DatabasePgConfig {
                    url: env_to_str("HOOKLOG_DATABASE_PG_URL", ""),
                    pool_size: env_to_u32("HOOKLOG_DATABASE_PG_POOL_SIZE", 20),
                    connection_timeout: env_to_u32("HOOKLOG_DATABASE_PG_CONNECTION_TIMEOUT", 5),
                },
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("HOOKLOG_LOGGING_USE_BUNYAN", false),
            },
            server: ServerConfig {
                bind_ip: env_to_str("HOOKLOG_SERVER_BIND_IP", "127.0.0.1"),
                bind_port: env_to_u16("HOOKLOG_SERVER_BIND_PORT", 5000),
                workers_count: env_to_optional_u16("HOOKLOG_SERVER_WORKERS_COUNT", None),
            },
            version,
        }
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}
