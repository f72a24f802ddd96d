//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `NOLOSSFORM` prefix and double underscores as separators
//! (`NOLOSSFORM__SHEETS__SPREADSHEET_ID`).
//!
//! # Example
//!
//! ```no_run
//! use nolossform::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod dashboard;
mod error;
mod server;
mod sheets;

pub use dashboard::DashboardConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use sheets::SheetsConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Submission store configuration (Google Sheets)
    pub sheets: SheetsConfig,

    /// Dashboard reporting configuration
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `NOLOSSFORM` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `NOLOSSFORM__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `NOLOSSFORM__SHEETS__SPREADSHEET_ID=...` -> `sheets.spreadsheet_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("NOLOSSFORM")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.sheets.validate(&self.server.environment)?;
        self.dashboard.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("NOLOSSFORM__SHEETS__SPREADSHEET_ID", "sheet-123");
        env::set_var("NOLOSSFORM__SHEETS__API_KEY", "AIza-test");
    }

    fn clear_env() {
        env::remove_var("NOLOSSFORM__SHEETS__SPREADSHEET_ID");
        env::remove_var("NOLOSSFORM__SHEETS__API_KEY");
        env::remove_var("NOLOSSFORM__SHEETS__SHEET_NAME");
        env::remove_var("NOLOSSFORM__SERVER__PORT");
        env::remove_var("NOLOSSFORM__SERVER__ENVIRONMENT");
        env::remove_var("NOLOSSFORM__DASHBOARD__UTC_OFFSET_MINUTES");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.sheets.spreadsheet_id, "sheet-123");
        assert_eq!(config.sheets.sheet_name, "Submissions");
        assert_eq!(config.dashboard.utc_offset_minutes, 0);
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sheets_section_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
    }

    #[test]
    fn test_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("NOLOSSFORM__SERVER__PORT", "3000");
        env::set_var("NOLOSSFORM__SERVER__ENVIRONMENT", "production");
        env::set_var("NOLOSSFORM__DASHBOARD__UTC_OFFSET_MINUTES", "-240");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert_eq!(config.dashboard.utc_offset_minutes, -240);
    }
}
