//! Dashboard view models - computed fresh per request, never persisted.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

/// Aggregate counters for one agency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Rows whose agency column equals the queried agency.
    pub total: usize,
    /// Rows in the current calendar month and year.
    pub this_month: usize,
    /// Rows at or after now minus seven days.
    pub this_week: usize,
    /// Signed share of `total`, rounded half-up.
    pub completion_rate: Percentage,
}

/// Whether a submission carries a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Completed,
    Pending,
}

impl SubmissionStatus {
    pub fn from_signed(signed: bool) -> Self {
        if signed {
            SubmissionStatus::Completed
        } else {
            SubmissionStatus::Pending
        }
    }
}

/// One row of the recent submissions table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionView {
    /// RFC 3339 when the cell parsed, the raw text when it did not.
    pub timestamp: Option<String>,
    pub confirmation_number: String,
    pub customer_name: String,
    pub policy_number: String,
    pub agent_name: String,
    pub status: SubmissionStatus,
}

/// Payload of a successful dashboard request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyDashboard {
    /// Most recently appended first.
    pub submissions: Vec<SubmissionView>,
    pub stats: DashboardStats,
}

impl AgencyDashboard {
    /// Dashboard with no submissions and zeroed counters.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.total == 0
    }
}
