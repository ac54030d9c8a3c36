use std::time::Duration;

use serde::Serialize;

/// How long to wait between polls of the publication job.
pub(crate) const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// How many consecutive transport errors to tolerate while polling
/// before giving up. A `FAILED` job status is never retried.
pub(crate) const MAX_TRANSPORT_RETRIES: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaPublishInput {
    pub api_id: String,
    pub schema: String,
    pub poll_interval: Duration,
    pub max_transport_retries: u32,
}

impl SchemaPublishInput {
    pub fn new(api_id: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            api_id: api_id.into(),
            schema: schema.into(),
            poll_interval: POLL_INTERVAL,
            max_transport_retries: MAX_TRANSPORT_RETRIES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaPublishResponse {
    pub api_id: String,
}
