//! Submissions module - the agency dashboard over the submission store.
//!
//! - `cell` - raw cells and ragged rows as the store returns them
//! - `schema` - header text to column index mapping
//! - `timestamp` - serial number and text timestamp parsing
//! - `dashboard` - statistics and recent submission view models
//! - `aggregator` - the filter/aggregate/slice pass

pub mod aggregator;
pub mod cell;
pub mod dashboard;
pub mod schema;
pub mod timestamp;

pub use aggregator::{compute_dashboard, RECENT_SUBMISSION_LIMIT, RECENT_WINDOW_DAYS};
pub use cell::{CellValue, SheetRow};
pub use dashboard::{AgencyDashboard, DashboardStats, SubmissionStatus, SubmissionView};
pub use schema::{ColumnIndex, SubmissionColumn, SubmissionSchema};
pub use timestamp::parse_timestamp;
