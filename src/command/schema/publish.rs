use clap::Parser;
use console::style;
use ranger_client::operations::schema::publish::{self, SchemaPublishInput};

use crate::command::RangerOutput;
use crate::options::{GatewayOpt, SchemaOpt};
use crate::RangerResult;

#[derive(Debug, Parser)]
pub struct Publish {
    #[command(flatten)]
    gateway: GatewayOpt,

    #[command(flatten)]
    schema: SchemaOpt,
}

impl Publish {
    pub async fn run(&self) -> RangerResult<RangerOutput> {
        let client = self.gateway.client()?;
        let schema = self
            .schema
            .read_file_descriptor("schema", &mut std::io::stdin())?;

        eprintln!(
            "Publishing schema to API {} and waiting for the publication job.",
            style(&self.gateway.api_id).cyan()
        );
        tracing::debug!("publishing\n{}", &schema);

        let response =
            publish::run(SchemaPublishInput::new(&self.gateway.api_id, schema), &client).await?;

        Ok(RangerOutput::SchemaPublished {
            api_id: response.api_id,
        })
    }
}
