use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub tax: TaxConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// `pretty` or `json`
    pub log_format: String,
}

impl AppConfig {
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Origin of the dashboard UI
    pub allowed_origin: String,
}

/// Defaults applied to tax reports when a request leaves them out
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaxConfig {
    pub special_category_state: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            },
            server: ServerConfig::from_env()?,
            cors: CorsConfig {
                allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            },
            tax: TaxConfig {
                special_category_state: env::var("SPECIAL_CATEGORY_STATE")
                    .unwrap_or_else(|_| "false".to_string())
                    .parse()
                    .map_err(|_| AppError::configuration("Invalid SPECIAL_CATEGORY_STATE"))?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::configuration("Server port must be greater than 0"));
        }

        if self.server.workers == 0 {
            return Err(AppError::configuration("Server workers must be greater than 0"));
        }

        if self.cors.allowed_origin.trim().is_empty() {
            return Err(AppError::configuration("CORS_ALLOWED_ORIGIN cannot be empty"));
        }

        Ok(())
    }
}
