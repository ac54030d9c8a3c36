use std::collections::HashMap;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::header::HeaderMap;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::gateway::{headers, GatewayService, Lookup, ResolverPage};
use crate::shared::{
    DataSourceKind, DataSourceRef, PublicationStatus, RemoteResolver, SchemaCreationStatus,
};
use crate::RangerClientError;

/// A [`GatewayService`] speaking the gateway's REST control plane.
///
/// HTTP 404 on lookups maps to [`Lookup::NotFound`]; every other
/// non-success status surfaces as an error.
pub struct HttpGateway {
    client: Client,
    endpoint: Url,
    headers: HeaderMap,
}

impl HttpGateway {
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

    fn url(&self, segments: &[&str]) -> Result<Url, RangerClientError> {
        let mut url = self.endpoint.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| RangerClientError::HandleResponse {
                    msg: format!("endpoint {} cannot be extended with a path", self.endpoint),
                })?;
            path.pop_if_empty();
            path.extend(["v1", "apis"]);
            path.extend(segments);
        }
        Ok(url)
    }

    async fn error_for_status(response: Response) -> Result<Response, RangerClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(RangerClientError::HandleResponse {
            msg: format!("gateway responded with HTTP {status}: {body}"),
        })
    }
}

#[async_trait]
impl GatewayService for HttpGateway {
    async fn start_schema_creation(
        &self,
        api_id: &str,
        definition: &[u8],
    ) -> Result<PublicationStatus, RangerClientError> {
        let response = self
            .client
            .post(self.url(&[api_id, "schemacreation"])?)
            .headers(self.headers.clone())
            .json(&StartSchemaCreationRequest {
                definition: BASE64.encode(definition),
            })
            .send()
            .await?;
        let response = Self::error_for_status(response).await?;
        let body: StartSchemaCreationResponse = response.json().await?;
        Ok(body.status)
    }

    async fn get_schema_creation_status(
        &self,
        api_id: &str,
    ) -> Result<SchemaCreationStatus, RangerClientError> {
        let response = self
            .client
            .get(self.url(&[api_id, "schemacreation"])?)
            .headers(self.headers.clone())
            .send()
            .await?;
        let response = Self::error_for_status(response).await?;
        let body: SchemaCreationStatusResponse = response.json().await?;
        Ok(SchemaCreationStatus {
            status: body.status,
            details: body.details,
        })
    }

    async fn get_data_source(
        &self,
        api_id: &str,
        name: &str,
    ) -> Result<Lookup<DataSourceRef>, RangerClientError> {
        let response = self
            .client
            .get(self.url(&[api_id, "datasources", name])?)
            .headers(self.headers.clone())
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Lookup::NotFound);
        }
        let response = Self::error_for_status(response).await?;
        let body: GetDataSourceResponse = response.json().await?;
        Ok(Lookup::Found(body.data_source.into()))
    }

    async fn create_data_source(
        &self,
        api_id: &str,
        data_source: &DataSourceRef,
    ) -> Result<(), RangerClientError> {
        let response = self
            .client
            .post(self.url(&[api_id, "datasources"])?)
            .headers(self.headers.clone())
            .json(&DataSourceRequest::from(data_source))
            .send()
            .await?;
        Self::error_for_status(response).await?;
        Ok(())
    }

    async fn update_data_source(
        &self,
        api_id: &str,
        data_source: &DataSourceRef,
    ) -> Result<(), RangerClientError> {
        let response = self
            .client
            .post(self.url(&[api_id, "datasources", &data_source.name])?)
            .headers(self.headers.clone())
            .json(&DataSourceRequest::from(data_source))
            .send()
            .await?;
        Self::error_for_status(response).await?;
        Ok(())
    }

    async fn update_resolver(
        &self,
        api_id: &str,
        resolver: &RemoteResolver,
    ) -> Result<Lookup<()>, RangerClientError> {
        let response = self
            .client
            .post(self.url(&[
                api_id,
                "types",
                &resolver.type_name,
                "resolvers",
                &resolver.field_name,
            ])?)
            .headers(self.headers.clone())
            .json(&ResolverRequest::from(resolver))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Lookup::NotFound);
        }
        Self::error_for_status(response).await?;
        Ok(Lookup::Found(()))
    }

    async fn create_resolver(
        &self,
        api_id: &str,
        resolver: &RemoteResolver,
    ) -> Result<(), RangerClientError> {
        let response = self
            .client
            .post(self.url(&[api_id, "types", &resolver.type_name, "resolvers"])?)
            .headers(self.headers.clone())
            .json(&ResolverRequest::from(resolver))
            .send()
            .await?;
        Self::error_for_status(response).await?;
        Ok(())
    }

    async fn list_resolvers(
        &self,
        api_id: &str,
        type_name: &str,
        next_token: Option<String>,
    ) -> Result<ResolverPage, RangerClientError> {
        let mut request = self
            .client
            .get(self.url(&[api_id, "types", type_name, "resolvers"])?)
            .headers(self.headers.clone());
        if let Some(token) = next_token {
            request = request.query(&[("nextToken", token.as_str())]);
        }
        let response = Self::error_for_status(request.send().await?).await?;
        let body: ListResolversResponse = response.json().await?;
        Ok(ResolverPage {
            resolvers: body.resolvers.into_iter().map(Into::into).collect(),
            next_token: body.next_token,
        })
    }
}

#[derive(Serialize)]
struct StartSchemaCreationRequest {
    definition: String,
}

#[derive(Deserialize)]
struct StartSchemaCreationResponse {
    status: PublicationStatus,
}

#[derive(Deserialize)]
struct SchemaCreationStatusResponse {
    status: PublicationStatus,
    details: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLambdaConfig {
    lambda_function_arn: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DataSourceRequest {
    name: String,
    #[serde(rename = "type")]
    kind: DataSourceKind,
    lambda_config: WireLambdaConfig,
    service_role_arn: String,
}

impl From<&DataSourceRef> for DataSourceRequest {
    fn from(data_source: &DataSourceRef) -> Self {
        Self {
            name: data_source.name.clone(),
            kind: data_source.kind,
            lambda_config: WireLambdaConfig {
                lambda_function_arn: data_source.lambda_function_arn.clone(),
            },
            service_role_arn: data_source.service_role_arn.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetDataSourceResponse {
    data_source: WireDataSource,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDataSource {
    name: String,
    #[serde(default)]
    service_role_arn: Option<String>,
    #[serde(default)]
    lambda_config: Option<WireLambdaConfig>,
}

impl From<WireDataSource> for DataSourceRef {
    fn from(wire: WireDataSource) -> Self {
        DataSourceRef::lambda(
            wire.name,
            wire.lambda_config
                .map(|config| config.lambda_function_arn)
                .unwrap_or_default(),
            wire.service_role_arn.unwrap_or_default(),
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolverRequest {
    field_name: String,
    data_source_name: String,
    request_mapping_template: String,
    response_mapping_template: String,
}

impl From<&RemoteResolver> for ResolverRequest {
    fn from(resolver: &RemoteResolver) -> Self {
        Self {
            field_name: resolver.field_name.clone(),
            data_source_name: resolver.data_source_name.clone(),
            request_mapping_template: resolver.request_mapping_template.clone(),
            response_mapping_template: resolver.response_mapping_template.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResolversResponse {
    #[serde(default)]
    resolvers: Vec<WireResolver>,
    next_token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireResolver {
    type_name: String,
    field_name: String,
    #[serde(default)]
    data_source_name: String,
    #[serde(default)]
    request_mapping_template: String,
    #[serde(default)]
    response_mapping_template: String,
}

impl From<WireResolver> for RemoteResolver {
    fn from(wire: WireResolver) -> Self {
        RemoteResolver {
            type_name: wire.type_name,
            field_name: wire.field_name,
            data_source_name: wire.data_source_name,
            request_mapping_template: wire.request_mapping_template,
            response_mapping_template: wire.response_mapping_template,
        }
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn gateway(server: &MockServer) -> HttpGateway {
        let endpoint = Url::parse(&server.base_url()).unwrap();
        HttpGateway::new(endpoint, &HashMap::new()).unwrap()
    }

    #[tokio::test]
    async fn start_schema_creation_posts_encoded_definition() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/apis/abc123/schemacreation")
                    .json_body(json!({ "definition": BASE64.encode("type Query { x(a: Int): Int }") }));
                then.status(200).json_body(json!({ "status": "PROCESSING" }));
            })
            .await;

        let status = gateway(&server)
            .start_schema_creation("abc123", b"type Query { x(a: Int): Int }")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(status, PublicationStatus::Processing);
    }

    #[tokio::test]
    async fn get_schema_creation_status_carries_details() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/apis/abc123/schemacreation");
                then.status(200)
                    .json_body(json!({ "status": "FAILED", "details": "invalid syntax" }));
            })
            .await;

        let status = gateway(&server)
            .get_schema_creation_status("abc123")
            .await
            .unwrap();

        assert_eq!(
            status,
            SchemaCreationStatus {
                status: PublicationStatus::Failed,
                details: Some("invalid syntax".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn get_data_source_maps_404_to_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/apis/abc123/datasources/Query_getUser_DataSource");
                then.status(404)
                    .json_body(json!({ "message": "data source not found" }));
            })
            .await;

        let lookup = gateway(&server)
            .get_data_source("abc123", "Query_getUser_DataSource")
            .await
            .unwrap();

        assert_eq!(lookup, Lookup::NotFound);
    }

    #[tokio::test]
    async fn get_data_source_returns_found_config() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/apis/abc123/datasources/Query_getUser_DataSource");
                then.status(200).json_body(json!({
                    "dataSource": {
                        "name": "Query_getUser_DataSource",
                        "type": "AWS_LAMBDA",
                        "serviceRoleArn": "arn:role",
                        "lambdaConfig": { "lambdaFunctionArn": "arn:lambda" }
                    }
                }));
            })
            .await;

        let lookup = gateway(&server)
            .get_data_source("abc123", "Query_getUser_DataSource")
            .await
            .unwrap();

        assert_eq!(
            lookup,
            Lookup::Found(DataSourceRef::lambda(
                "Query_getUser_DataSource",
                "arn:lambda",
                "arn:role"
            ))
        );
    }

    #[tokio::test]
    async fn update_resolver_maps_404_to_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/apis/abc123/types/Query/resolvers/getUser");
                then.status(404).json_body(json!({ "message": "no resolver" }));
            })
            .await;

        let resolver = RemoteResolver {
            type_name: "Query".to_string(),
            field_name: "getUser".to_string(),
            data_source_name: "Query_getUser_DataSource".to_string(),
            request_mapping_template: "req".to_string(),
            response_mapping_template: "res".to_string(),
        };
        let lookup = gateway(&server)
            .update_resolver("abc123", &resolver)
            .await
            .unwrap();

        assert_eq!(lookup, Lookup::NotFound);
    }

    #[tokio::test]
    async fn list_resolvers_forwards_the_page_token() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/apis/abc123/types/Query/resolvers")
                    .query_param("nextToken", "page-2");
                then.status(200).json_body(json!({
                    "resolvers": [{
                        "typeName": "Query",
                        "fieldName": "getUser",
                        "dataSourceName": "Query_getUser_DataSource"
                    }],
                    "nextToken": null
                }));
            })
            .await;

        let page = gateway(&server)
            .list_resolvers("abc123", "Query", Some("page-2".to_string()))
            .await
            .unwrap();

        assert_eq!(page.resolvers.len(), 1);
        assert_eq!(page.resolvers[0].operation().to_string(), "Query.getUser");
        assert_eq!(page.next_token, None);
    }

    #[tokio::test]
    async fn server_errors_surface_with_status_and_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/apis/abc123/schemacreation");
                then.status(500).body("boom");
            })
            .await;

        let error = gateway(&server)
            .get_schema_creation_status("abc123")
            .await
            .unwrap_err();

        let msg = error.to_string();
        assert!(msg.contains("500"), "unexpected message: {msg}");
        assert!(msg.contains("boom"), "unexpected message: {msg}");
    }
}
