use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub scrape_timeout_secs: u64,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port
            .parse::<u16>()
            .map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host)
            .map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let timeout = env::var("SCRAPE_TIMEOUT_SECS").unwrap_or_else(|_| "15".to_string());
        let scrape_timeout_secs = timeout
            .parse::<u64>()
            .map_err(|e| AppError::ConfigError(format!("Invalid scrape timeout: {}", e)))?;

        // "*" keeps the permissive default; anything else is an explicit list
        let origins = env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let allowed_origins = parse_origins(&origins);

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            scrape_timeout_secs,
            allowed_origins,
        })
    }
}

pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
