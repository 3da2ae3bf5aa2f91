// src/config.rs
use std::net::IpAddr;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub store: StoreKind,
    /// Present whenever `store` is `Postgres`.
    pub database: Option<DatabaseConfig>,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or::<_, IpAddr, _>(&lookup, "HOST", || DEFAULT_HOST.parse().ok())?;
        let port = parse_or::<_, u16, _>(&lookup, "PORT", || Some(DEFAULT_PORT))?;
        let store = parse_or::<_, StoreKind, _>(&lookup, "PRODUCT_STORE", || Some(StoreKind::default()))?;
        let log_format =
            parse_or::<_, LogFormat, _>(&lookup, "LOG_FORMAT", || Some(LogFormat::default()))?;

        let database = match store {
            StoreKind::Memory => None,
            StoreKind::Postgres => {
                let url = lookup("DATABASE_URL")
                    .filter(|url| !url.trim().is_empty())
                    .ok_or(ConfigError::Missing("DATABASE_URL"))?;
                Some(DatabaseConfig {
                    url,
                    max_connections: parse_or::<_, u32, _>(&lookup, "DATABASE_MAX_CONNECTIONS", || {
                        Some(DEFAULT_MAX_CONNECTIONS)
                    })?,
                    acquire_timeout_secs: parse_or::<_, u64, _>(
                        &lookup,
                        "DATABASE_ACQUIRE_TIMEOUT_SECS",
                        || Some(DEFAULT_ACQUIRE_TIMEOUT_SECS),
                    )?,
                })
            }
        };

        Ok(Self {
            host,
            port,
            store,
            database,
            log_format,
        })
    }
}

fn parse_or<F, T, D>(lookup: &F, key: &'static str, default: D) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    D: FnOnce() -> Option<T>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => default().ok_or(ConfigError::Missing(key)),
    }
}
