//! Dashboard reporting configuration

use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;

use super::error::ValidationError;

const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Dashboard configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardConfig {
    /// Offset from UTC, in minutes, used for calendar-month counts and for
    /// timestamps stored without a zone.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl DashboardConfig {
    /// Reporting offset; UTC when the configured value is out of range.
    pub fn reporting_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60)).unwrap_or_else(|| Utc.fix())
    }

    /// Validate dashboard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ValidationError::InvalidUtcOffset);
        }
        Ok(())
    }
}
