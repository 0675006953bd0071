use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub request_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        // Total timeout for the outbound page fetch
        let timeout_secs = env::var("REQUEST_TIMEOUT_SECS").unwrap_or_else(|_| "10".to_string());
        let timeout_secs = timeout_secs
            .parse::<u64>()
            .map_err(|e| AppError::Config(format!("Invalid request timeout: {}", e)))?;

        Ok(Config {
            server_addr,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
