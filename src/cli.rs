use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing_core::metadata::ParseLevelError;
use tracing_core::Level;

use crate::command::{self, OutputFormat, RangerOutput};
use crate::RangerResult;

#[derive(Debug, Parser)]
#[command(
    name = "ranger",
    version,
    about = "
Ranger - your gateway wrangler

Ranger reconciles a declarative GraphQL schema against a managed GraphQL
API gateway. It publishes the schema, waits for the publication job to
finish, then creates or updates the data sources and resolvers the
schema calls for.

The most common command is:

    $ ranger sync --api-id <ID> --schema ./schema.graphql ...

which runs the whole workflow end to end."
)]
pub struct Ranger {
    #[command(subcommand)]
    command: Command,

    /// Specify ranger's log level
    #[arg(
        long = "log",
        short = 'l',
        global = true,
        value_parser = parse_log_level,
    )]
    pub log_level: Option<Level>,

    /// Specify ranger's output format
    #[arg(long = "format", global = true, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

impl Ranger {
    pub async fn run(&self) -> RangerResult<RangerOutput> {
        match &self.command {
            Command::Sync(command) => command.run().await,
            Command::Schema(command) => command.run().await,
            Command::Resolver(command) => command.run().await,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Publish the schema and reconcile data sources and resolvers
    Sync(command::Sync),

    /// Schema commands
    Schema(command::Schema),

    /// Resolver commands
    Resolver(command::Resolver),
}

fn parse_log_level(level: &str) -> Result<Level, ParseLevelError> {
    Level::from_str(level)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_surface_is_well_formed() {
        Ranger::command().debug_assert();
    }

    #[test]
    fn it_parses_a_log_level() {
        let app = Ranger::try_parse_from([
            "ranger",
            "--log",
            "debug",
            "schema",
            "operations",
            "--schema",
            "./schema.graphql",
        ])
        .unwrap();
        assert_eq!(app.log_level, Some(Level::DEBUG));
    }

    #[test]
    fn it_rejects_an_unknown_log_level() {
        let result = Ranger::try_parse_from([
            "ranger",
            "--log",
            "loud",
            "schema",
            "operations",
            "--schema",
            "./schema.graphql",
        ]);
        assert!(result.is_err());
    }
}
