use anyhow::anyhow;
use clap::Parser;
use console::style;
use ranger_client::operations::resolver::list::{self, ResolverListInput};
use ranger_client::operations::resolver::sync::{self, ResolverSyncInput};
use ranger_client::operations::schema::publish::{self, SchemaPublishInput};
use ranger_client::schema::needs_reconciliation;
use ranger_client::shared::{OperationDeclaration, OperationSet};
use ranger_client::source::{IntrospectionSource, OperationSource, SdlSource};
use url::Url;

use crate::command::RangerOutput;
use crate::options::{GatewayOpt, LambdaOpt, SchemaOpt, TemplateOpt};
use crate::{RangerError, RangerResult};

#[derive(Debug, Parser)]
pub struct Sync {
    #[command(flatten)]
    gateway: GatewayOpt,

    #[command(flatten)]
    schema: SchemaOpt,

    #[command(flatten)]
    templates: TemplateOpt,

    #[command(flatten)]
    lambda: LambdaOpt,

    /// Reconcile even when the declared and remote operation sets
    /// already match. Use this to push template or data-source changes
    /// that structural drift detection cannot see.
    #[arg(long)]
    force: bool,

    /// Derive declared operations by introspecting this GraphQL endpoint
    /// instead of parsing the local schema
    #[arg(long = "introspect-url", value_name = "URL")]
    introspect_url: Option<Url>,
}

impl Sync {
    pub async fn run(&self) -> RangerResult<RangerOutput> {
        let client = self.gateway.client()?;
        let api_id = &self.gateway.api_id;
        let schema = self
            .schema
            .read_file_descriptor("schema", &mut std::io::stdin())?;
        let templates = self.templates.load()?;

        // the schema must be live before resolvers can bind to its fields
        eprintln!(
            "Publishing schema to API {} and waiting for the publication job.",
            style(api_id).cyan()
        );
        publish::run(SchemaPublishInput::new(api_id, schema.clone()), &client).await?;

        let source: Box<dyn OperationSource + Send> = match &self.introspect_url {
            Some(url) => Box::new(IntrospectionSource::new(
                url.clone(),
                &self.gateway.header_map(),
            )?),
            None => Box::new(SdlSource::new(schema)),
        };
        let declared: Vec<OperationDeclaration> = source
            .declared_operations()
            .await?
            .into_iter()
            .filter(|operation| operation.kind().is_some())
            .collect();

        let remote = list::run(
            ResolverListInput {
                api_id: api_id.clone(),
            },
            &client,
        )
        .await?;

        let declared_set: OperationSet = declared.iter().cloned().collect();
        if !self.force && !needs_reconciliation(&declared_set, &remote.operation_set()) {
            return Ok(RangerOutput::UpToDate);
        }

        let response = sync::run(
            ResolverSyncInput {
                api_id: api_id.clone(),
                declared,
                templates,
                lambda_function_arn: self.lambda.lambda_function_arn.clone(),
                service_role_arn: self.lambda.service_role_arn.clone(),
            },
            &client,
        )
        .await?;

        if response.has_failures() {
            let total = response.outcomes.len() + response.failures.len();
            let mut message = format!(
                "failed to reconcile {} of {total} operations",
                response.failures.len()
            );
            for failure in &response.failures {
                message.push_str(&format!("\n  {}: {}", failure.operation, failure.message));
            }
            return Err(RangerError::new(anyhow!(message)));
        }

        Ok(RangerOutput::SyncReport(response))
    }
}
