//! GetAgencyDashboardHandler - Query handler for one agency's dashboard.
//!
//! Reads the whole submission store once, aggregates the rows belonging to
//! the agency and wraps the outcome in a response envelope. Store failures
//! never escape as raw errors; they become error envelopes.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};

use crate::domain::foundation::{AgencyName, ResponseEnvelope};
use crate::domain::submissions::{compute_dashboard, AgencyDashboard, SubmissionSchema};
use crate::ports::SubmissionStore;

pub const NO_SUBMISSIONS_MESSAGE: &str = "No submissions yet";
pub const DASHBOARD_RETRIEVED_MESSAGE: &str = "Dashboard data retrieved";

/// Query to get the dashboard of one agency.
#[derive(Debug, Clone)]
pub struct GetAgencyDashboardQuery {
    pub agency_name: AgencyName,
}

/// Result of the dashboard query, always an envelope.
pub type GetAgencyDashboardResult = ResponseEnvelope<AgencyDashboard>;

/// Handler for retrieving an agency dashboard.
pub struct GetAgencyDashboardHandler {
    store: Arc<dyn SubmissionStore>,
    reporting_offset: FixedOffset,
}

impl GetAgencyDashboardHandler {
    pub fn new(store: Arc<dyn SubmissionStore>, reporting_offset: FixedOffset) -> Self {
        Self {
            store,
            reporting_offset,
        }
    }

    pub async fn handle(&self, query: GetAgencyDashboardQuery) -> GetAgencyDashboardResult {
        self.handle_at(query, Utc::now()).await
    }

    /// Same as [`handle`](Self::handle) with an explicit "now".
    pub async fn handle_at(
        &self,
        query: GetAgencyDashboardQuery,
        now: DateTime<Utc>,
    ) -> GetAgencyDashboardResult {
        let rows = match self.store.read_all().await {
            Ok(Some(rows)) if rows.len() > 1 => rows,
            Ok(_) => {
                tracing::debug!(agency = %query.agency_name, "Submission store is empty");
                return ResponseEnvelope::success(NO_SUBMISSIONS_MESSAGE, AgencyDashboard::empty());
            }
            Err(e) => {
                tracing::error!(
                    agency = %query.agency_name,
                    error = %e,
                    "Failed to read submission store"
                );
                return ResponseEnvelope::error(format!(
                    "Failed to retrieve dashboard data: {}",
                    e
                ));
            }
        };

        let missing = SubmissionSchema::from_header(&rows[0]).missing_columns();
        if !missing.is_empty() {
            let headers: Vec<&str> = missing.iter().map(|column| column.header()).collect();
            tracing::warn!(missing = ?headers, "Submission sheet is missing expected columns");
        }

        let dashboard = compute_dashboard(
            &rows,
            &query.agency_name,
            now.with_timezone(&self.reporting_offset),
        );

        tracing::info!(
            agency = %query.agency_name,
            rows = rows.len() - 1,
            total = dashboard.stats.total,
            completion = %dashboard.stats.completion_rate,
            "Dashboard computed"
        );

        ResponseEnvelope::success(DASHBOARD_RETRIEVED_MESSAGE, dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EnvelopeStatus;
    use crate::domain::submissions::SheetRow;
    use crate::ports::StoreError;
    use async_trait::async_trait;
    use chrono::{Offset, TimeZone};

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    struct MockSubmissionStore {
        rows: Option<Vec<SheetRow>>,
        error: Option<StoreError>,
    }

    impl MockSubmissionStore {
        fn with_rows(rows: Vec<SheetRow>) -> Self {
            Self {
                rows: Some(rows),
                error: None,
            }
        }

        fn missing_sheet() -> Self {
            Self {
                rows: None,
                error: None,
            }
        }

        fn failing(error: StoreError) -> Self {
            Self {
                rows: None,
                error: Some(error),
            }
        }
    }

    #[async_trait]
    impl SubmissionStore for MockSubmissionStore {
        async fn read_all(&self) -> Result<Option<Vec<SheetRow>>, StoreError> {
            match &self.error {
                Some(e) => Err(e.clone()),
                None => Ok(self.rows.clone()),
            }
        }
    }

    fn header() -> SheetRow {
        SheetRow::from_texts([
            "Timestamp",
            "Agency Name",
            "Confirmation #",
            "Insured Name",
            "Policy Number",
            "Has Signature",
            "Agent Name",
        ])
    }

    fn row(agency: &str, timestamp: &str, signed: &str) -> SheetRow {
        SheetRow::from_texts([timestamp, agency, "C-1", "Jane Doe", "P-9", signed, "Sam"])
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn handler(store: MockSubmissionStore) -> GetAgencyDashboardHandler {
        GetAgencyDashboardHandler::new(Arc::new(store), Utc.fix())
    }

    fn query(agency: &str) -> GetAgencyDashboardQuery {
        GetAgencyDashboardQuery {
            agency_name: AgencyName::new(agency).unwrap(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn returns_dashboard_for_agency() {
        let store = MockSubmissionStore::with_rows(vec![
            header(),
            row("Acme", "2026-10-18 09:00:00", "Yes"),
            row("Acme", "2026-10-02 09:00:00", "No"),
            row("Acme", "2026-09-01 09:00:00", "Yes"),
            row("Other", "2026-10-18 09:00:00", "Yes"),
        ]);

        let envelope = handler(store).handle_at(query("Acme"), now()).await;

        assert_eq!(envelope.status, EnvelopeStatus::Success);
        assert_eq!(envelope.message, "Dashboard data retrieved");
        let data = envelope.data.unwrap();
        assert_eq!(data.stats.total, 3);
        assert_eq!(data.stats.this_month, 2);
        assert_eq!(data.stats.this_week, 1);
        assert_eq!(data.stats.completion_rate.value(), 67);
        assert_eq!(data.submissions.len(), 3);
    }

    #[tokio::test]
    async fn header_only_store_is_empty_state() {
        let store = MockSubmissionStore::with_rows(vec![header()]);

        let envelope = handler(store).handle_at(query("Acme"), now()).await;

        assert!(envelope.is_success());
        assert_eq!(envelope.message, "No submissions yet");
        assert_eq!(envelope.data, Some(AgencyDashboard::empty()));
    }

    #[tokio::test]
    async fn missing_sheet_is_empty_state() {
        let envelope = handler(MockSubmissionStore::missing_sheet())
            .handle_at(query("Acme"), now())
            .await;

        assert!(envelope.is_success());
        assert_eq!(envelope.message, "No submissions yet");
        assert!(envelope.data.unwrap().is_empty());
    }

    #[tokio::test]
    async fn populated_store_without_agency_rows_is_retrieved_with_zeros() {
        let store = MockSubmissionStore::with_rows(vec![
            header(),
            row("Other", "2026-10-18 09:00:00", "Yes"),
        ]);

        let envelope = handler(store).handle_at(query("Acme"), now()).await;

        assert_eq!(envelope.message, "Dashboard data retrieved");
        assert!(envelope.data.unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_failure_becomes_error_envelope() {
        let store = MockSubmissionStore::failing(StoreError::unavailable("connection refused"));

        let envelope = handler(store).handle_at(query("Acme"), now()).await;

        assert_eq!(envelope.status, EnvelopeStatus::Error);
        assert_eq!(
            envelope.message,
            "Failed to retrieve dashboard data: Store unavailable: connection refused"
        );
        assert!(envelope.data.is_none());
    }

    #[tokio::test]
    async fn reporting_offset_shifts_calendar_month() {
        let store = MockSubmissionStore::with_rows(vec![
            header(),
            row("Acme", "2026-09-30T23:30:00Z", "Yes"),
        ]);
        let ahead = FixedOffset::east_opt(2 * 3600).unwrap();
        let handler = GetAgencyDashboardHandler::new(Arc::new(store), ahead);

        let envelope = handler.handle_at(query("Acme"), now()).await;

        // 23:30 UTC on Sep 30 is already October at UTC+2.
        assert_eq!(envelope.data.unwrap().stats.this_month, 1);
    }
}
