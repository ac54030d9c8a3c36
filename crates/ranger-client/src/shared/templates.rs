use serde::{Deserialize, Serialize};

use super::OperationKind;

/// The request/response mapping templates attached to a resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingTemplatePair {
    pub request: String,
    pub response: String,
}

impl MappingTemplatePair {
    pub fn new(request: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            request: request.into(),
            response: response.into(),
        }
    }
}

/// The two template pairs a run is configured with. Selection is a
/// static, total mapping on the operation kind with no per-field
/// override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingTemplates {
    pub query: MappingTemplatePair,
    pub mutation: MappingTemplatePair,
}

impl MappingTemplates {
    pub fn pair_for(&self, kind: OperationKind) -> &MappingTemplatePair {
        match kind {
            OperationKind::Query => &self.query,
            OperationKind::Mutation => &self.mutation,
        }
    }
}
