use clap::Parser;
use ranger_client::operations::resolver::list::{self, ResolverListInput};

use crate::command::RangerOutput;
use crate::options::GatewayOpt;
use crate::RangerResult;

#[derive(Debug, Parser)]
pub struct List {
    #[command(flatten)]
    gateway: GatewayOpt,
}

impl List {
    pub async fn run(&self) -> RangerResult<RangerOutput> {
        let client = self.gateway.client()?;
        let response = list::run(
            ResolverListInput {
                api_id: self.gateway.api_id.clone(),
            },
            &client,
        )
        .await?;
        Ok(RangerOutput::ResolverList(response.resolvers))
    }
}
