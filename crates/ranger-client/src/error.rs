use thiserror::Error;

/// RangerClientError represents all possible failures that can occur while
/// talking to the gateway or deriving declared operations.
#[derive(Error, Debug)]
pub enum RangerClientError {
    /// Encountered an error sending a request to the gateway.
    #[error("encountered an error while sending a request")]
    SendRequest(#[from] reqwest::Error),

    /// Tried to build a header map with an invalid header name.
    #[error("invalid header name")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),

    /// Tried to build a header map with an invalid header value.
    #[error("invalid header value")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    /// Encountered an error handling the received response.
    #[error("encountered an error handling the response: {msg}")]
    HandleResponse {
        /// The error message.
        msg: String,
    },

    /// Could not retrieve the remote resolver snapshot. Fatal for a run:
    /// reconciliation never proceeds against an unknown remote state.
    #[error("could not fetch resolvers for API {api_id}: {msg}")]
    Fetch { api_id: String, msg: String },

    /// Schema submission was rejected, or the publication job failed.
    #[error("schema publication for API {api_id} failed: {msg}")]
    Publication { api_id: String, msg: String },

    /// A create/update call for a single operation's data source or
    /// resolver failed. Recorded per operation, never aborts the rest.
    #[error("could not reconcile {type_name}.{field_name}: {msg}")]
    Reconcile {
        type_name: String,
        field_name: String,
        msg: String,
    },

    /// The introspection endpoint returned errors or an unusable document.
    #[error("introspection against {endpoint} failed: {msg}")]
    Introspection { endpoint: String, msg: String },
}
