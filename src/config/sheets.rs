//! Spreadsheet store configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Google Sheets configuration for the submission store
#[derive(Debug, Clone, Deserialize)]
pub struct SheetsConfig {
    /// Spreadsheet holding the submissions
    pub spreadsheet_id: String,

    /// API key with read access to the spreadsheet
    pub api_key: Secret<String>,

    /// Sheet (tab) holding one row per submission
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// Sheets API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl SheetsConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate spreadsheet configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.spreadsheet_id.is_empty() {
            return Err(ValidationError::MissingRequired("SHEETS__SPREADSHEET_ID"));
        }
        if self.api_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("SHEETS__API_KEY"));
        }
        if self.sheet_name.is_empty() {
            return Err(ValidationError::MissingRequired("SHEETS__SHEET_NAME"));
        }
        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(ValidationError::InvalidSheetsUrl);
        }
        if *environment == Environment::Production && !self.base_url.starts_with("https://") {
            return Err(ValidationError::SheetsUrlMustBeHttps);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_sheet_name() -> String {
    "Submissions".to_string()
}

fn default_base_url() -> String {
    "https://sheets.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    30
}
