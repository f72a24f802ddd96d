//! HTTP DTOs for the action dispatcher.
//!
//! Requests name an `action` and carry that action's fields next to it.
//! Responses are the domain [`ResponseEnvelope`](crate::domain::foundation::ResponseEnvelope)
//! serialized as-is.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::foundation::{AgencyName, ValidationError};

pub const GET_DASHBOARD_DATA: &str = "get_dashboard_data";
pub const TEST_CONNECTION: &str = "test_connection";

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Raw body of `POST /`.
///
/// Action fields stay untyped here and are validated per action.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    pub action: String,
    #[serde(default)]
    pub agency_name: Option<Value>,
}

/// Decoded action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    GetDashboardData { agency_name: Option<Value> },
    TestConnection,
    Unsupported(String),
}

impl From<ActionRequest> for Action {
    fn from(request: ActionRequest) -> Self {
        match request.action.as_str() {
            GET_DASHBOARD_DATA => Action::GetDashboardData {
                agency_name: request.agency_name,
            },
            TEST_CONNECTION => Action::TestConnection,
            _ => Action::Unsupported(request.action),
        }
    }
}

/// Validates the `agencyName` field. Absent, `null` and `""` are all empty.
pub fn parse_agency_name(value: Option<Value>) -> Result<AgencyName, ValidationError> {
    match value {
        None | Some(Value::Null) => AgencyName::new(""),
        Some(Value::String(name)) => AgencyName::new(name),
        Some(_) => Err(ValidationError::invalid_format(
            "agencyName",
            "expected a string",
        )),
    }
}
