use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of an asynchronous schema publication job, as reported by the
/// gateway. `Success` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PublicationStatus {
    Pending,
    Processing,
    Success,
    Failed,
    /// Any status the gateway reports that this client does not model.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            PublicationStatus::Pending => "PENDING",
            PublicationStatus::Processing => "PROCESSING",
            PublicationStatus::Success => "SUCCESS",
            PublicationStatus::Failed => "FAILED",
            PublicationStatus::Unknown => "UNKNOWN",
        };
        write!(f, "{status}")
    }
}

/// A point-in-time answer from the gateway about a publication job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaCreationStatus {
    pub status: PublicationStatus,
    /// Remote-supplied detail, populated on failure.
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_statuses() {
        let status: PublicationStatus = serde_json::from_str("\"PROCESSING\"").unwrap();
        assert_eq!(status, PublicationStatus::Processing);
        let status: PublicationStatus = serde_json::from_str("\"DELETING\"").unwrap();
        assert_eq!(status, PublicationStatus::Unknown);
    }
}
