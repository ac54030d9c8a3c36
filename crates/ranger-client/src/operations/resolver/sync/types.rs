use serde::Serialize;

use crate::shared::{MappingTemplates, OperationDeclaration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSyncInput {
    pub api_id: String,
    pub declared: Vec<OperationDeclaration>,
    pub templates: MappingTemplates,
    pub lambda_function_arn: String,
    pub service_role_arn: String,
}

/// What a create-or-update call ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncAction {
    Created,
    Updated,
}

/// The result of reconciling one declared operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationOutcome {
    pub operation: OperationDeclaration,
    pub data_source: SyncAction,
    pub resolver: SyncAction,
}

/// A per-operation failure. Recorded, never fatal for the rest of the
/// run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncFailure {
    pub operation: OperationDeclaration,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ResolverSyncResponse {
    pub outcomes: Vec<OperationOutcome>,
    pub failures: Vec<SyncFailure>,
    /// Declared operations whose type is not a root operation type.
    pub skipped: Vec<OperationDeclaration>,
}

impl ResolverSyncResponse {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
