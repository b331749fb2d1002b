use crate::core::{AppError, Result};
use std::env;

const DEFAULT_WORKERS: usize = 2;

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            workers: DEFAULT_WORKERS,
        }
    }

    pub fn from_env() -> Result<Self> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| AppError::configuration("Invalid SERVER_PORT"))?;
        let workers = env::var("SERVER_WORKERS")
            .unwrap_or_else(|_| DEFAULT_WORKERS.to_string())
            .parse()
            .map_err(|_| AppError::configuration("Invalid SERVER_WORKERS"))?;

        Ok(Self {
            host,
            port,
            workers,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
