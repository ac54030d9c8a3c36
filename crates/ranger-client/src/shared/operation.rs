use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The two root operation types a resolver can be attached to. Schemas may
/// declare other types, but those are never reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    pub const ALL: [OperationKind; 2] = [OperationKind::Query, OperationKind::Mutation];

    pub const fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "Query",
            OperationKind::Mutation => "Mutation",
        }
    }

    pub fn from_type_name(type_name: &str) -> Option<Self> {
        match type_name {
            "Query" => Some(OperationKind::Query),
            "Mutation" => Some(OperationKind::Mutation),
            _ => None,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One operation the schema declares: a field on a root operation type.
/// Identity is the `(type_name, field_name)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperationDeclaration {
    pub type_name: String,
    pub field_name: String,
}

impl OperationDeclaration {
    pub fn new(type_name: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            field_name: field_name.into(),
        }
    }

    pub fn kind(&self) -> Option<OperationKind> {
        OperationKind::from_type_name(&self.type_name)
    }

    /// The name of the data source backing this operation. The rule must
    /// produce the same name on every derivation, both when probing remote
    /// state and when writing it, or create-or-update desyncs from reality.
    pub fn data_source_name(&self) -> String {
        format!("{}_{}_DataSource", self.type_name, self.field_name)
    }
}

impl fmt::Display for OperationDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_name, self.field_name)
    }
}

/// Declared or remote operations viewed as a set, for drift detection.
pub type OperationSet = HashSet<OperationDeclaration>;
