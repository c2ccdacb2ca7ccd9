//! Environment-backed server configuration.

use std::net::SocketAddr;

use crate::server::error::Error;

/// Settings read once at startup from the process environment.
pub struct Config {
    /// Connection string for the marketplace database
    pub database_url: String,
    /// Socket address the HTTP server binds to
    pub listen_address: SocketAddr,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` is required; `LISTEN_ADDRESS` falls back to
    /// `0.0.0.0:8080` when unset.
    pub fn from_env() -> Result<Self, Error> {
        let listen_address = std::env::var("LISTEN_ADDRESS")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| Error::InvalidEnvValue {
                var: "LISTEN_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            listen_address,
        })
    }
}

fn required_var(var: &str) -> Result<String, Error> {
    std::env::var(var).map_err(|_| Error::MissingEnvVar(var.to_string()))
}
