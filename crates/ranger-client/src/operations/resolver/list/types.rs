use serde::Serialize;

use crate::shared::{OperationSet, RemoteResolver};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverListInput {
    pub api_id: String,
}

/// The remote resolver snapshot for one run. Read-only; all mutation
/// happens through gateway calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolverListResponse {
    pub resolvers: Vec<RemoteResolver>,
}

impl ResolverListResponse {
    /// The snapshot viewed as a set of `(type_name, field_name)` pairs,
    /// ready for drift detection.
    pub fn operation_set(&self) -> OperationSet {
        self.resolvers
            .iter()
            .map(RemoteResolver::operation)
            .collect()
    }
}
