//! Header-driven column lookup for the submissions sheet.

use std::fmt;

use super::cell::{CellValue, SheetRow};

/// Position of a column in a row, or the sentinel for a missing header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnIndex {
    At(usize),
    NotFound,
}

impl ColumnIndex {
    /// Reads the cell at this index. A missing column always reads as empty.
    pub fn read<'a>(&self, row: &'a SheetRow) -> &'a CellValue {
        match self {
            ColumnIndex::At(index) => row.get(*index),
            ColumnIndex::NotFound => CellValue::empty(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ColumnIndex::At(_))
    }
}

/// Columns the dashboard reads, with their exact header text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionColumn {
    AgencyName,
    Timestamp,
    ConfirmationNumber,
    CustomerName,
    PolicyNumber,
    HasSignature,
    AgentName,
}

impl SubmissionColumn {
    pub const ALL: [SubmissionColumn; 7] = [
        SubmissionColumn::AgencyName,
        SubmissionColumn::Timestamp,
        SubmissionColumn::ConfirmationNumber,
        SubmissionColumn::CustomerName,
        SubmissionColumn::PolicyNumber,
        SubmissionColumn::HasSignature,
        SubmissionColumn::AgentName,
    ];

    /// Header text, matched case-sensitively.
    pub fn header(&self) -> &'static str {
        match self {
            SubmissionColumn::AgencyName => "Agency Name",
            SubmissionColumn::Timestamp => "Timestamp",
            SubmissionColumn::ConfirmationNumber => "Confirmation #",
            SubmissionColumn::CustomerName => "Insured Name",
            SubmissionColumn::PolicyNumber => "Policy Number",
            SubmissionColumn::HasSignature => "Has Signature",
            SubmissionColumn::AgentName => "Agent Name",
        }
    }
}

impl fmt::Display for SubmissionColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Typed column map built once per request from the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionSchema {
    pub agency_name: ColumnIndex,
    pub timestamp: ColumnIndex,
    pub confirmation_number: ColumnIndex,
    pub customer_name: ColumnIndex,
    pub policy_number: ColumnIndex,
    pub has_signature: ColumnIndex,
    pub agent_name: ColumnIndex,
}

impl SubmissionSchema {
    /// Resolves every column against the header row.
    ///
    /// The first header cell whose text equals the column header wins.
    pub fn from_header(header: &SheetRow) -> Self {
        let locate = |column: SubmissionColumn| {
            header
                .cells()
                .iter()
                .position(|cell| cell.as_text() == Some(column.header()))
                .map(ColumnIndex::At)
                .unwrap_or(ColumnIndex::NotFound)
        };

        Self {
            agency_name: locate(SubmissionColumn::AgencyName),
            timestamp: locate(SubmissionColumn::Timestamp),
            confirmation_number: locate(SubmissionColumn::ConfirmationNumber),
            customer_name: locate(SubmissionColumn::CustomerName),
            policy_number: locate(SubmissionColumn::PolicyNumber),
            has_signature: locate(SubmissionColumn::HasSignature),
            agent_name: locate(SubmissionColumn::AgentName),
        }
    }

    pub fn index_of(&self, column: SubmissionColumn) -> ColumnIndex {
        match column {
            SubmissionColumn::AgencyName => self.agency_name,
            SubmissionColumn::Timestamp => self.timestamp,
            SubmissionColumn::ConfirmationNumber => self.confirmation_number,
            SubmissionColumn::CustomerName => self.customer_name,
            SubmissionColumn::PolicyNumber => self.policy_number,
            SubmissionColumn::HasSignature => self.has_signature,
            SubmissionColumn::AgentName => self.agent_name,
        }
    }

    /// Columns whose header was not found.
    pub fn missing_columns(&self) -> Vec<SubmissionColumn> {
        SubmissionColumn::ALL
            .into_iter()
            .filter(|column| !self.index_of(*column).is_found())
            .collect()
    }
}
