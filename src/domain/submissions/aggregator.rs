//! Agency dashboard aggregation.
//!
//! A single pass over the rows matching one agency: three counters, a
//! completion rate, and a bounded most-recent-first projection.

use chrono::{DateTime, Datelike, Duration, FixedOffset};

use crate::domain::foundation::{AgencyName, Percentage};

use super::cell::{CellValue, SheetRow};
use super::dashboard::{AgencyDashboard, DashboardStats, SubmissionStatus, SubmissionView};
use super::schema::SubmissionSchema;
use super::timestamp::parse_timestamp;

/// Maximum number of rows in the recent submissions table.
pub const RECENT_SUBMISSION_LIMIT: usize = 10;

/// Length of the "this week" window, inclusive of its start.
pub const RECENT_WINDOW_DAYS: i64 = 7;

const NOT_AVAILABLE: &str = "N/A";
const UNKNOWN_CUSTOMER: &str = "Unknown";

/// Computes the dashboard for `agency` from a full store snapshot.
///
/// `rows[0]` is the header row. `now` is captured once by the caller and its
/// offset is the reporting offset for calendar-month checks and naive
/// timestamps. An empty or header-only snapshot yields
/// [`AgencyDashboard::empty`].
pub fn compute_dashboard(
    rows: &[SheetRow],
    agency: &AgencyName,
    now: DateTime<FixedOffset>,
) -> AgencyDashboard {
    let Some((header, data_rows)) = rows.split_first() else {
        return AgencyDashboard::empty();
    };
    if data_rows.is_empty() {
        return AgencyDashboard::empty();
    }

    let schema = SubmissionSchema::from_header(header);
    let matching: Vec<&SheetRow> = data_rows
        .iter()
        .filter(|row| schema.agency_name.read(row).as_text() == Some(agency.as_str()))
        .collect();

    let offset = *now.offset();
    let window_start = now - Duration::days(RECENT_WINDOW_DAYS);

    let mut this_month = 0;
    let mut this_week = 0;
    let mut completed = 0;

    for row in &matching {
        if let Some(submitted_at) = parse_timestamp(schema.timestamp.read(row), offset) {
            if submitted_at.year() == now.year() && submitted_at.month() == now.month() {
                this_month += 1;
            }
            if submitted_at >= window_start {
                this_week += 1;
            }
        }
        if schema.has_signature.read(row).is_yes() {
            completed += 1;
        }
    }

    let submissions = matching
        .iter()
        .rev()
        .take(RECENT_SUBMISSION_LIMIT)
        .map(|row| project(row, &schema, offset))
        .collect();

    AgencyDashboard {
        submissions,
        stats: DashboardStats {
            total: matching.len(),
            this_month,
            this_week,
            completion_rate: Percentage::from_ratio(completed, matching.len()),
        },
    }
}

fn project(row: &SheetRow, schema: &SubmissionSchema, offset: FixedOffset) -> SubmissionView {
    let timestamp_cell = schema.timestamp.read(row);
    let timestamp = parse_timestamp(timestamp_cell, offset)
        .map(|parsed| parsed.to_rfc3339())
        .or_else(|| timestamp_cell.display_text());

    let text_or = |cell: &CellValue, fallback: &str| {
        cell.display_text().unwrap_or_else(|| fallback.to_string())
    };

    SubmissionView {
        timestamp,
        confirmation_number: text_or(schema.confirmation_number.read(row), NOT_AVAILABLE),
        customer_name: text_or(schema.customer_name.read(row), UNKNOWN_CUSTOMER),
        policy_number: text_or(schema.policy_number.read(row), NOT_AVAILABLE),
        agent_name: text_or(schema.agent_name.read(row), NOT_AVAILABLE),
        status: SubmissionStatus::from_signed(schema.has_signature.read(row).is_yes()),
    }
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod aggregator_test;
