use std::fmt::Display;
use std::io::Read;

use clap::Parser;

use crate::utils::parsers::{parse_file_descriptor, FileDescriptorType};
use crate::RangerResult;

#[derive(Debug, Parser)]
pub struct SchemaOpt {
    /// The schema file to publish. You can pass `-` to use stdin instead
    /// of a file.
    #[arg(long, short = 's', env = "SCHEMA_PATH", value_parser = parse_file_descriptor)]
    schema: FileDescriptorType,
}

impl SchemaOpt {
    pub(crate) fn read_file_descriptor(
        &self,
        file_description: &str,
        stdin: &mut impl Read,
    ) -> RangerResult<String> {
        self.schema.read_file_descriptor(file_description, stdin)
    }
}

impl Display for SchemaOpt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "--schema {}", self.schema)
    }
}
