use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod credentials;

pub use credentials::{CredentialStore, TOKEN_KEY};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// ERP backend endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
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
            },
            api: ApiConfig {
                base_url: env::var("LEDGERLINE_API_URL")
                    .map_err(|_| AppError::Configuration("LEDGERLINE_API_URL not set".to_string()))?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::Configuration(
                "API base URL must not be empty".to_string(),
            ));
        }

        if !self.api.base_url.starts_with("http") {
            return Err(AppError::Configuration(format!(
                "API base URL must be an http(s) URL, got: {}",
                self.api.base_url
            )));
        }

        Ok(())
    }
}

/// Install the process-wide tracing subscriber. `RUST_LOG` wins over the
/// configured level; repeated calls after the first are no-ops.
pub fn init_tracing(app: &AppConfig) {
    let fallback = format!("ledgerline={}", app.log_level);
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
