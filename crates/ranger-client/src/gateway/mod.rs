pub mod headers;
mod http;

pub use http::HttpGateway;

use async_trait::async_trait;

use crate::shared::{DataSourceRef, PublicationStatus, RemoteResolver, SchemaCreationStatus};
use crate::RangerClientError;

/// Result of probing the gateway for a resource that may not exist.
///
/// Absence is the branch selector of the create-or-update pattern, not a
/// failure, so it is modeled as a tagged variant rather than an error:
/// the transport-error path stays a plain `Err` and can never be
/// mistaken for "go create it".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

/// One page of a resolver listing. A partial drain of these is never an
/// acceptable final result; callers follow `next_token` to exhaustion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolverPage {
    pub resolvers: Vec<RemoteResolver>,
    pub next_token: Option<String>,
}

/// The gateway collaborator. Every operation runner takes an
/// implementation of this trait, scoped to one reconciliation run.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait GatewayService: Send + Sync {
    /// Submits a schema definition, starting an asynchronous publication
    /// job. Returns the job's initial status.
    async fn start_schema_creation(
        &self,
        api_id: &str,
        definition: &[u8],
    ) -> Result<PublicationStatus, RangerClientError>;

    /// The current status of the API's publication job.
    async fn get_schema_creation_status(
        &self,
        api_id: &str,
    ) -> Result<SchemaCreationStatus, RangerClientError>;

    async fn get_data_source(
        &self,
        api_id: &str,
        name: &str,
    ) -> Result<Lookup<DataSourceRef>, RangerClientError>;

    async fn create_data_source(
        &self,
        api_id: &str,
        data_source: &DataSourceRef,
    ) -> Result<(), RangerClientError>;

    async fn update_data_source(
        &self,
        api_id: &str,
        data_source: &DataSourceRef,
    ) -> Result<(), RangerClientError>;

    /// Updates an existing resolver. `Lookup::NotFound` means no resolver
    /// exists for that field yet and the caller should create one.
    async fn update_resolver(
        &self,
        api_id: &str,
        resolver: &RemoteResolver,
    ) -> Result<Lookup<()>, RangerClientError>;

    async fn create_resolver(
        &self,
        api_id: &str,
        resolver: &RemoteResolver,
    ) -> Result<(), RangerClientError>;

    /// One page of resolvers attached to `type_name` on the API.
    async fn list_resolvers(
        &self,
        api_id: &str,
        type_name: &str,
        next_token: Option<String>,
    ) -> Result<ResolverPage, RangerClientError>;
}
