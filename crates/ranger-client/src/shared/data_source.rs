use std::fmt;

use serde::{Deserialize, Serialize};

/// The backend kinds a data source can target. Only compute-function
/// targets are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSourceKind {
    #[serde(rename = "AWS_LAMBDA")]
    Lambda,
}

impl fmt::Display for DataSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSourceKind::Lambda => write!(f, "AWS_LAMBDA"),
        }
    }
}

/// A named backend target a resolver invokes, derived deterministically
/// from an [`OperationDeclaration`](super::OperationDeclaration) via its
/// `data_source_name` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceRef {
    pub name: String,
    pub kind: DataSourceKind,
    pub lambda_function_arn: String,
    pub service_role_arn: String,
}

impl DataSourceRef {
    pub fn lambda(
        name: impl Into<String>,
        lambda_function_arn: impl Into<String>,
        service_role_arn: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: DataSourceKind::Lambda,
            lambda_function_arn: lambda_function_arn.into(),
            service_role_arn: service_role_arn.into(),
        }
    }
}
