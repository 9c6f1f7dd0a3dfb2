//! Configuration management for the Kitchen Inventory gateway
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with KIM_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Inventory backend REST API
    pub backend: UpstreamConfig,

    /// Demand prediction service
    pub prediction: UpstreamConfig,

    /// Session cookie settings
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Base URL, without trailing slash
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Name of the cookie holding the backend JWT
    pub cookie_name: String,

    /// Cookie lifetime in seconds
    pub cookie_max_age_secs: i64,

    /// Set the Secure attribute on the cookie
    pub cookie_secure: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("KIM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("backend.base_url", "http://localhost:8080")?
            .set_default("backend.timeout_secs", 30)?
            .set_default("prediction.base_url", "http://localhost:8000")?
            .set_default("prediction.timeout_secs", 60)?
            .set_default("auth.cookie_name", "token")?
            .set_default("auth.cookie_max_age_secs", 60 * 60 * 24)?
            .set_default("auth.cookie_secure", true)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (KIM_ prefix)
            .add_source(
                Environment::with_prefix("KIM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: "token".to_string(),
            cookie_max_age_secs: 60 * 60 * 24,
            cookie_secure: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_load_without_files() {
        let config = Config::load().unwrap();
        assert_eq!(config.auth.cookie_name, "token");
        assert_eq!(config.auth.cookie_max_age_secs, 86_400);
        assert!(config.backend.timeout_secs > 0);
    }
}
