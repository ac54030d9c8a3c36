mod operations;
mod publish;

use clap::{Parser, Subcommand};

use crate::command::RangerOutput;
use crate::RangerResult;

#[derive(Debug, Parser)]
pub struct Schema {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Publish the schema and wait for the publication job to finish
    Publish(publish::Publish),

    /// List the operations the schema declares
    Operations(operations::Operations),
}

impl Schema {
    pub async fn run(&self) -> RangerResult<RangerOutput> {
        match &self.command {
            Command::Publish(command) => command.run().await,
            Command::Operations(command) => command.run(),
        }
    }
}
