use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use fruit_core::{FruitError, Result, DEFAULT_LOG_FILTER};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_FILE: &str = "data/fruits.json";
pub const DEFAULT_LOG_FILE: &str = "logs/fruit-server.log";

/// Runtime configuration for the HTTP service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PORT
    pub port: u16,
    /// DATA_FILE: JSON array file backing the collection
    pub data_file: PathBuf,
    /// LOG_FILE
    pub log_file: String,
    /// RUST_LOG: tracing filter directives
    pub log_filter: String,
}

impl ServerConfig {
    /// Load from environment variables. `port` and `data_file` override PORT and DATA_FILE if provided.
    ///
    /// An empty PORT counts as unset; any other value that is not a port number is an error.
    pub fn load(port: Option<u16>, data_file: Option<PathBuf>) -> Result<Self> {
        let port = match port {
            Some(port) => port,
            None => match env::var("PORT").ok().filter(|s| !s.trim().is_empty()) {
                Some(raw) => raw.trim().parse().map_err(|_| {
                    FruitError::Config(format!("PORT is not a valid port number: {}", raw))
                })?,
                None => DEFAULT_PORT,
            },
        };
        let data_file = data_file.unwrap_or_else(|| {
            env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE))
        });
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let log_filter = env::var("RUST_LOG")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            port,
            data_file,
            log_file,
            log_filter,
        })
    }

    /// Address to bind: all interfaces on the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
