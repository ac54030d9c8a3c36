mod list;

use clap::{Parser, Subcommand};

use crate::command::RangerOutput;
use crate::RangerResult;

#[derive(Debug, Parser)]
pub struct Resolver {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the resolvers currently attached to the API
    List(list::List),
}

impl Resolver {
    pub async fn run(&self) -> RangerResult<RangerOutput> {
        match &self.command {
            Command::List(command) => command.run().await,
        }
    }
}
