use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::gateway::headers;
use crate::shared::{OperationDeclaration, OperationKind};
use crate::source::OperationSource;
use crate::RangerClientError;

const INTROSPECTION_QUERY: &str =
    "query RootOperations { __schema { types { name fields { name } } } }";

/// Declared operations read off a live GraphQL endpoint instead of a
/// local schema document. Only fields of the root operation types count;
/// introspection meta types are ignored.
pub struct IntrospectionSource {
    client: Client,
    endpoint: Url,
    headers: HeaderMap,
}

impl IntrospectionSource {
    pub fn new(
        endpoint: Url,
        header_map: &HashMap<String, String>,
    ) -> Result<Self, RangerClientError> {
        Ok(Self {
            client: Client::new(),
            endpoint,
            headers: headers::build(header_map)?,
        })
    }

    fn introspection_error(&self, msg: impl Into<String>) -> RangerClientError {
        RangerClientError::Introspection {
            endpoint: self.endpoint.to_string(),
            msg: msg.into(),
        }
    }
}

#[async_trait]
impl OperationSource for IntrospectionSource {
    async fn declared_operations(&self) -> Result<Vec<OperationDeclaration>, RangerClientError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .headers(self.headers.clone())
            .json(&json!({ "query": INTROSPECTION_QUERY }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.introspection_error(format!("endpoint responded with HTTP {status}")));
        }

        let body: IntrospectionResponse = response
            .json()
            .await
            .map_err(|_| self.introspection_error("failed to parse response JSON"))?;

        if let Some(errors) = body.errors {
            let msg = errors
                .into_iter()
                .map(|error| error.message)
                .collect::<Vec<String>>()
                .join("\n");
            return Err(self.introspection_error(msg));
        }

        let data = body
            .data
            .ok_or_else(|| self.introspection_error("response carried neither data nor errors"))?;

        let mut operations = Vec::new();
        for type_ in data.schema.types {
            if OperationKind::from_type_name(&type_.name).is_none() {
                continue;
            }
            for field in type_.fields.unwrap_or_default() {
                operations.push(OperationDeclaration::new(type_.name.clone(), field.name));
            }
        }
        Ok(operations)
    }
}

#[derive(Deserialize)]
struct IntrospectionResponse {
    data: Option<IntrospectionData>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct IntrospectionData {
    #[serde(rename = "__schema")]
    schema: IntrospectionSchema,
}

#[derive(Deserialize)]
struct IntrospectionSchema {
    types: Vec<IntrospectionType>,
}

#[derive(Deserialize)]
struct IntrospectionType {
    name: String,
    fields: Option<Vec<IntrospectionField>>,
}

#[derive(Deserialize)]
struct IntrospectionField {
    name: String,
}
