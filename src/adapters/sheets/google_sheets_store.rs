//! Google Sheets Store - Implementation of SubmissionStore over the Sheets values API.
//!
//! Reads the whole submissions tab in one request:
//!
//! ```text
//! GET {base_url}/v4/spreadsheets/{spreadsheet_id}/values/{sheet_name}
//!     ?valueRenderOption=UNFORMATTED_VALUE&dateTimeRenderOption=SERIAL_NUMBER
//! ```
//!
//! Timestamps therefore arrive as serial day numbers. A request for a tab
//! that does not exist is answered with `400 Unable to parse range`, which
//! is reported as a missing sheet rather than an error.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GoogleSheetsConfig::new("1AbC...", api_key)
//!     .with_sheet_name("Submissions")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let store = GoogleSheetsStore::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use crate::config::SheetsConfig;
use crate::domain::submissions::SheetRow;
use crate::ports::{StoreError, SubmissionStore};

/// Marker text of the Sheets API error for an unknown tab.
const MISSING_RANGE_ERROR: &str = "Unable to parse range";

/// Longest error body echoed into a `StoreError`.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Configuration for the Google Sheets store.
#[derive(Debug, Clone)]
pub struct GoogleSheetsConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Spreadsheet holding the submissions tab.
    pub spreadsheet_id: String,
    /// Tab name (default: Submissions).
    pub sheet_name: String,
    /// Base URL for the API (default: https://sheets.googleapis.com).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GoogleSheetsConfig {
    /// Creates a new configuration for the given spreadsheet and API key.
    pub fn new(spreadsheet_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            spreadsheet_id: spreadsheet_id.into(),
            sheet_name: "Submissions".to_string(),
            base_url: "https://sheets.googleapis.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the tab name.
    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = sheet_name.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl From<&SheetsConfig> for GoogleSheetsConfig {
    fn from(config: &SheetsConfig) -> Self {
        Self::new(
            config.spreadsheet_id.clone(),
            config.api_key.expose_secret().clone(),
        )
            .with_sheet_name(config.sheet_name.clone())
            .with_base_url(config.base_url.clone())
            .with_timeout(config.timeout())
    }
}

/// Body of a successful values request. `values` is absent for an empty tab.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<SheetRow>,
}

/// Submission store backed by a Google Sheets tab.
pub struct GoogleSheetsStore {
    config: GoogleSheetsConfig,
    client: Client,
}

impl GoogleSheetsStore {
    /// Creates a new store with the given configuration.
    pub fn new(config: GoogleSheetsConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the values endpoint URL for the submissions tab.
    fn values_url(&self) -> Result<Url, StoreError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| StoreError::unavailable(format!("Invalid base URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| StoreError::unavailable("Base URL cannot carry a path"))?
            .pop_if_empty()
            .extend([
                "v4",
                "spreadsheets",
                self.config.spreadsheet_id.as_str(),
                "values",
                self.config.sheet_name.as_str(),
            ]);

        url.query_pairs_mut()
            .append_pair("majorDimension", "ROWS")
            .append_pair("valueRenderOption", "UNFORMATTED_VALUE")
            .append_pair("dateTimeRenderOption", "SERIAL_NUMBER");

        Ok(url)
    }

    fn map_send_error(&self, e: reqwest::Error) -> StoreError {
        if e.is_timeout() {
            StoreError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            StoreError::unavailable(format!("Connection failed: {}", e))
        } else {
            StoreError::unavailable(e.to_string())
        }
    }
}

/// Maps a values API response onto the port's result.
fn interpret_response(status: u16, body: &str) -> Result<Option<Vec<SheetRow>>, StoreError> {
    match status {
        200..=299 => parse_value_range(body).map(Some),
        400 if body.contains(MISSING_RANGE_ERROR) => Ok(None),
        401 | 403 => Err(StoreError::Unauthorized),
        404 => Err(StoreError::unavailable("Spreadsheet not found")),
        _ => Err(StoreError::unavailable(format!(
            "Unexpected status {}: {}",
            status,
            truncate(body)
        ))),
    }
}

fn parse_value_range(body: &str) -> Result<Vec<SheetRow>, StoreError> {
    serde_json::from_str::<ValueRange>(body)
        .map(|range| range.values)
        .map_err(|e| StoreError::malformed(format!("Failed to parse values response: {}", e)))
}

fn truncate(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

#[async_trait]
impl SubmissionStore for GoogleSheetsStore {
    async fn read_all(&self) -> Result<Option<Vec<SheetRow>>, StoreError> {
        let url = self.values_url()?;
        tracing::debug!(sheet = %self.config.sheet_name, "Reading submissions range");

        let response = self
            .client
            .get(url)
            .header("x-goog-api-key", self.config.api_key())
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let rows = interpret_response(status, &body);
        match &rows {
            Ok(Some(rows)) => tracing::debug!("Read {} rows from sheet", rows.len()),
            Ok(None) => tracing::info!(sheet = %self.config.sheet_name, "Submissions sheet does not exist"),
            Err(e) => tracing::warn!(status, "Sheets read failed: {}", e),
        }
        rows
    }
}
