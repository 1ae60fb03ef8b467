//! HTTP Server Configuration
//!
//! Bind address for the web form front end.

use crate::error::InsightsError;
use std::net::SocketAddr;

pub const DEFAULT_HTTP_PORT: u16 = 8501;

/// HTTP server configuration
///
/// ## Environment Variables
///
/// - `HTTP_HOST`: Server bind address (default: 127.0.0.1)
/// - `HTTP_PORT`: Server port (default: 8501)
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Server bind address
    pub addr: SocketAddr,
}

impl HttpConfig {
    /// Load HTTP configuration from environment variables
    ///
    /// `port_override` (from `--port`) takes precedence over `HTTP_PORT`.
    pub fn from_env(port_override: Option<u16>) -> Result<Self, InsightsError> {
        Self::from_lookup(|key| std::env::var(key).ok(), port_override)
    }

    pub fn from_lookup<F>(lookup: F, port_override: Option<u16>) -> Result<Self, InsightsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HTTP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match port_override {
            Some(port) => port,
            None => match lookup("HTTP_PORT") {
                Some(raw) => raw.trim().parse().map_err(|_| {
                    InsightsError::Config(format!("HTTP_PORT must be a port number, got {:?}", raw))
                })?,
                None => DEFAULT_HTTP_PORT,
            },
        };

        let addr = format!("{}:{}", host.trim(), port)
            .parse()
            .map_err(|e| InsightsError::Config(format!("Invalid bind address {}:{}: {}", host, port, e)))?;

        Ok(Self { addr })
    }
}
