//! Agency identifier value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Name of an agency, the partition key for every submission query.
///
/// Compared by exact, case-sensitive equality against the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AgencyName(String);

impl AgencyName {
    /// Creates a new AgencyName, returning error if empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::empty_field("agencyName"));
        }
        Ok(Self(name))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AgencyName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AgencyName> for String {
    fn from(name: AgencyName) -> Self {
        name.0
    }
}

impl fmt::Display for AgencyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agency_name_accepts_non_empty_string() {
        let name = AgencyName::new("Acme").unwrap();
        assert_eq!(name.as_str(), "Acme");
    }

    #[test]
    fn agency_name_rejects_empty_string() {
        match AgencyName::new("") {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "agencyName"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn agency_name_keeps_whitespace_and_case() {
        let name = AgencyName::new(" acme ").unwrap();
        assert_ne!(name, AgencyName::new("Acme").unwrap());
        assert_eq!(format!("{}", name), " acme ");
    }

    #[test]
    fn agency_name_deserialization_validates() {
        let ok: Result<AgencyName, _> = serde_json::from_str("\"Acme\"");
        assert!(ok.is_ok());

        let empty: Result<AgencyName, _> = serde_json::from_str("\"\"");
        assert!(empty.is_err());
    }
}
