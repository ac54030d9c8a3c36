use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use ranger_client::shared::{MappingTemplatePair, MappingTemplates};

use crate::RangerResult;

#[derive(Debug, Parser)]
pub struct TemplateOpt {
    /// File containing the request mapping template applied to every
    /// operation
    #[arg(long = "request-template", env = "REQUEST_TEMPLATE_PATH")]
    request_template: Utf8PathBuf,

    /// File containing the response mapping template for Query
    /// operations
    #[arg(long = "query-response-template", env = "QUERY_RESPONSE_TEMPLATE_PATH")]
    query_response_template: Utf8PathBuf,

    /// File containing the response mapping template for Mutation
    /// operations
    #[arg(
        long = "mutation-response-template",
        env = "MUTATION_RESPONSE_TEMPLATE_PATH"
    )]
    mutation_response_template: Utf8PathBuf,
}

impl TemplateOpt {
    /// Loads the configured template files once for the run; they are
    /// immutable from here on.
    pub(crate) fn load(&self) -> RangerResult<MappingTemplates> {
        let request = read(&self.request_template, "request mapping template")?;
        let query_response = read(&self.query_response_template, "query response template")?;
        let mutation_response =
            read(&self.mutation_response_template, "mutation response template")?;
        Ok(MappingTemplates {
            query: MappingTemplatePair::new(request.clone(), query_response),
            mutation: MappingTemplatePair::new(request, mutation_response),
        })
    }
}

fn read(path: &Utf8PathBuf, description: &str) -> RangerResult<String> {
    Ok(std::fs::read_to_string(path)
        .with_context(|| format!("could not read {description} from {path}"))?)
}
