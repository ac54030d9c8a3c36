use clap::ValueEnum;
use comfy_table::Table;
use console::style;
use ranger_client::operations::resolver::sync::ResolverSyncResponse;
use ranger_client::shared::{OperationDeclaration, RemoteResolver};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// RangerOutput defines all of the different types of data that are
/// printed to `stdout`. Every one of ranger's commands returns
/// `RangerResult<RangerOutput>`, and the print logic for each variant
/// lives in `RangerOutput::print`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RangerOutput {
    SchemaPublished { api_id: String },
    Operations(Vec<OperationDeclaration>),
    ResolverList(Vec<RemoteResolver>),
    SyncReport(ResolverSyncResponse),
    UpToDate,
}

impl RangerOutput {
    pub fn print(&self, format: OutputFormat) {
        if format == OutputFormat::Json {
            match serde_json::to_string_pretty(self) {
                Ok(json) => println!("{json}"),
                Err(error) => eprintln!("could not serialize output: {error}"),
            }
            return;
        }

        match self {
            RangerOutput::SchemaPublished { api_id } => {
                println!(
                    "Schema publication for API {} completed successfully.",
                    style(api_id).cyan()
                );
            }
            RangerOutput::Operations(operations) => {
                if operations.is_empty() {
                    eprintln!("The schema declares no operations.");
                    return;
                }
                let mut table = Table::new();
                table.set_header(vec!["Type", "Field"]);
                for operation in operations {
                    table.add_row(vec![&operation.type_name, &operation.field_name]);
                }
                println!("{table}");
            }
            RangerOutput::ResolverList(resolvers) => {
                if resolvers.is_empty() {
                    eprintln!("No resolvers are attached to the API.");
                    return;
                }
                let mut table = Table::new();
                table.set_header(vec!["Type", "Field", "Data Source"]);
                for resolver in resolvers {
                    table.add_row(vec![
                        &resolver.type_name,
                        &resolver.field_name,
                        &resolver.data_source_name,
                    ]);
                }
                println!("{table}");
            }
            RangerOutput::SyncReport(report) => {
                let mut table = Table::new();
                table.set_header(vec!["Operation", "Data Source", "Resolver"]);
                for outcome in &report.outcomes {
                    table.add_row(vec![
                        outcome.operation.to_string(),
                        format!("{:?}", outcome.data_source).to_lowercase(),
                        format!("{:?}", outcome.resolver).to_lowercase(),
                    ]);
                }
                println!("{table}");
                if !report.skipped.is_empty() {
                    eprintln!(
                        "Skipped {} non-root operation(s) declared by the schema.",
                        report.skipped.len()
                    );
                }
            }
            RangerOutput::UpToDate => {
                println!(
                    "{} remote resolvers already match the declared operations.",
                    style("Nothing to do:").green().bold()
                );
            }
        }
    }
}
