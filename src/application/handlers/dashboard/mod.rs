//! Dashboard query handlers.
//!
//! Read-only handlers that aggregate the submission store for one agency.

mod get_agency_dashboard;

pub use get_agency_dashboard::{
    GetAgencyDashboardHandler, GetAgencyDashboardQuery, GetAgencyDashboardResult,
    DASHBOARD_RETRIEVED_MESSAGE, NO_SUBMISSIONS_MESSAGE,
};
