//! HTTP handler for the single-endpoint action dispatcher.
//!
//! Connects `POST /` to the application layer handlers. Every answer is a
//! response envelope; only a body that cannot be decoded is rejected with
//! `400 Bad Request`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::FixedOffset;

use crate::application::handlers::{
    GetAgencyDashboardHandler, GetAgencyDashboardQuery, TestConnectionHandler,
};
use crate::domain::foundation::ResponseEnvelope;
use crate::ports::SubmissionStore;

use super::dto::{parse_agency_name, Action, ActionRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing dispatcher dependencies.
#[derive(Clone)]
pub struct DispatchAppState {
    pub store: Arc<dyn SubmissionStore>,
    pub reporting_offset: FixedOffset,
}

impl DispatchAppState {
    pub fn new(store: Arc<dyn SubmissionStore>, reporting_offset: FixedOffset) -> Self {
        Self {
            store,
            reporting_offset,
        }
    }

    pub fn get_agency_dashboard_handler(&self) -> GetAgencyDashboardHandler {
        GetAgencyDashboardHandler::new(self.store.clone(), self.reporting_offset)
    }

    pub fn test_connection_handler(&self) -> TestConnectionHandler {
        TestConnectionHandler::new(self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /
///
/// The body is read raw so clients posting JSON as `text/plain` are served
/// the same as `application/json`.
pub async fn dispatch(State(state): State<DispatchAppState>, body: Bytes) -> Response {
    let request: ActionRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected undecodable dispatcher body");
            let envelope: ResponseEnvelope<()> =
                ResponseEnvelope::error(format!("Invalid request body: {}", e));
            return (StatusCode::BAD_REQUEST, Json(envelope)).into_response();
        }
    };

    match Action::from(request) {
        Action::GetDashboardData { agency_name } => {
            let agency_name = match parse_agency_name(agency_name) {
                Ok(name) => name,
                Err(e) => {
                    let envelope: ResponseEnvelope<()> =
                        ResponseEnvelope::error(format!("Invalid request: {}", e));
                    return Json(envelope).into_response();
                }
            };

            let envelope = state
                .get_agency_dashboard_handler()
                .handle(GetAgencyDashboardQuery { agency_name })
                .await;
            Json(envelope).into_response()
        }
        Action::TestConnection => {
            Json(state.test_connection_handler().handle().await).into_response()
        }
        Action::Unsupported(action) => {
            tracing::debug!(action = %action, "Unsupported dispatcher action");
            let envelope: ResponseEnvelope<()> =
                ResponseEnvelope::error(format!("Unsupported action: {}", action));
            Json(envelope).into_response()
        }
    }
}
