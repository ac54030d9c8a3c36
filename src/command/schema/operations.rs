use clap::Parser;
use ranger_client::schema::parse;

use crate::command::RangerOutput;
use crate::options::SchemaOpt;
use crate::RangerResult;

#[derive(Debug, Parser)]
pub struct Operations {
    #[command(flatten)]
    schema: SchemaOpt,
}

impl Operations {
    pub fn run(&self) -> RangerResult<RangerOutput> {
        let schema = self
            .schema
            .read_file_descriptor("schema", &mut std::io::stdin())?;
        Ok(RangerOutput::Operations(parse(&schema)))
    }
}
