//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Currency handling at the HTTP boundary.
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Job catalog seeding.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Currency handling configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrencyConfig {
    /// Reject unknown `currency` query parameters with 400 instead of
    /// falling back to the base currency.
    #[serde(default)]
    pub strict_codes: bool,
}

/// Job catalog configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Path to a JSON array of job listings loaded at startup.
    pub seed_path: Option<String>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TOPSKYLL").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let config = temp_env::with_vars_unset(
            [
                "TOPSKYLL__SERVER__HOST",
                "TOPSKYLL__SERVER__PORT",
                "TOPSKYLL__CURRENCY__STRICT_CODES",
                "TOPSKYLL__CATALOG__SEED_PATH",
            ],
            || AppConfig::load().unwrap(),
        );

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(!config.currency.strict_codes);
        assert!(config.catalog.seed_path.is_none());
    }

    #[test]
    fn test_environment_overrides() {
        let config = temp_env::with_vars(
            [
                ("TOPSKYLL__SERVER__PORT", Some("9090")),
                ("TOPSKYLL__CURRENCY__STRICT_CODES", Some("true")),
                ("TOPSKYLL__CATALOG__SEED_PATH", Some("data/jobs.json")),
            ],
            || AppConfig::load().unwrap(),
        );

        assert_eq!(config.server.port, 9090);
        assert!(config.currency.strict_codes);
        assert_eq!(config.catalog.seed_path.as_deref(), Some("data/jobs.json"));
    }
}
