// src/config.rs

use std::env;
use std::net::{IpAddr, SocketAddr};

use dotenvy::dotenv;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_connections: u32,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let host = parse_var("HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port = parse_var("PORT", 3000)?;
        let max_connections = parse_var("DB_MAX_CONNECTIONS", 5)?;

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        Ok(Self {
            database_url,
            rust_log,
            host,
            port,
            max_connections,
            log_dir,
        })
    }

    /// Configuration for an in-process SQLite database, used by tests and local runs.
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            rust_log: "error".to_string(),
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            max_connections: 1,
            log_dir: "logs".to_string(),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    let Ok(value) = env::var(name) else {
        return Ok(default);
    };

    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(ConfigError::Invalid { name, value }),
    }
}
