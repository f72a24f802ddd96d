//! Uniform response envelope returned by every server operation.

use serde::{Deserialize, Serialize};

/// Outcome flag carried by every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// `{ status, message, data? }` wrapper.
///
/// `data` is omitted from the JSON when absent, which is always the case for
/// error envelopes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub status: EnvelopeStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ResponseEnvelope<T> {
    /// Success envelope carrying a payload.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Success envelope without a payload.
    pub fn acknowledged(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: message.into(),
            data: None,
        }
    }

    /// Error envelope. Never carries data.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == EnvelopeStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_serializes_data() {
        let envelope = ResponseEnvelope::success("done", json!({ "count": 1 }));
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "done");
        assert_eq!(value["data"]["count"], 1);
    }

    #[test]
    fn error_envelope_omits_data() {
        let envelope: ResponseEnvelope<serde_json::Value> = ResponseEnvelope::error("boom");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], "boom");
        assert!(value.get("data").is_none());
        assert!(!envelope.is_success());
    }

    #[test]
    fn acknowledged_envelope_is_success_without_data() {
        let envelope: ResponseEnvelope<()> = ResponseEnvelope::acknowledged("Connection successful");
        assert!(envelope.is_success());
        assert!(envelope.data.is_none());
    }
}
