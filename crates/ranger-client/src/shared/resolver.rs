use serde::{Deserialize, Serialize};

use super::OperationDeclaration;

/// A resolver as the gateway reports it: the binding of a schema field to
/// a data source plus its mapping templates. Snapshots of these are
/// read-only; all mutation happens through gateway calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteResolver {
    pub type_name: String,
    pub field_name: String,
    pub data_source_name: String,
    #[serde(default)]
    pub request_mapping_template: String,
    #[serde(default)]
    pub response_mapping_template: String,
}

impl RemoteResolver {
    /// The `(type_name, field_name)` identity of this resolver, for
    /// comparison against declared operations.
    pub fn operation(&self) -> OperationDeclaration {
        OperationDeclaration::new(self.type_name.clone(), self.field_name.clone())
    }
}
