use std::fmt::{self, Display};
use std::io::Read;

use anyhow::{anyhow, Context};
use camino::Utf8PathBuf;

use crate::RangerResult;

/// A file argument that may also be `-` for stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileDescriptorType {
    Stdin,
    File(Utf8PathBuf),
}

/// this fn is to be used with clap's `value_parser`.
pub fn parse_file_descriptor(input: &str) -> Result<FileDescriptorType, anyhow::Error> {
    if input == "-" {
        Ok(FileDescriptorType::Stdin)
    } else if input.is_empty() {
        Err(anyhow!("the file path may not be empty"))
    } else {
        Ok(FileDescriptorType::File(Utf8PathBuf::from(input)))
    }
}

/// this fn is to be used with clap's `value_parser` for repeated
/// `--header` arguments.
pub fn parse_header(input: &str) -> Result<(String, String), anyhow::Error> {
    let (key, value) = input
        .split_once(':')
        .ok_or_else(|| anyhow!("headers must be `key:value` pairs"))?;
    Ok((key.trim().to_string(), value.trim().to_string()))
}

impl FileDescriptorType {
    pub fn read_file_descriptor(
        &self,
        file_description: &str,
        stdin: &mut impl Read,
    ) -> RangerResult<String> {
        let contents = match self {
            FileDescriptorType::Stdin => {
                let mut buffer = String::new();
                stdin
                    .read_to_string(&mut buffer)
                    .with_context(|| format!("failed to read {file_description} from stdin"))?;
                buffer
            }
            FileDescriptorType::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("could not read {file_description} from {path}"))?,
        };
        if contents.is_empty() {
            Err(anyhow!("the {file_description} you passed was empty").into())
        } else {
            Ok(contents)
        }
    }
}

impl Display for FileDescriptorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileDescriptorType::Stdin => write!(f, "-"),
            FileDescriptorType::File(path) => write!(f, "{path}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn it_correctly_parses_stdin_flag() {
        assert_eq!(
            parse_file_descriptor("-").unwrap(),
            FileDescriptorType::Stdin
        );
    }

    #[test]
    fn it_errs_with_empty_path() {
        assert!(parse_file_descriptor("").is_err());
    }

    #[test]
    fn it_reads_a_file() {
        let file = assert_fs::NamedTempFile::new("schema.graphql").unwrap();
        file.write_str("type Query { getUser(id: ID!): User }").unwrap();
        let descriptor = parse_file_descriptor(file.path().to_str().unwrap()).unwrap();
        let contents = descriptor
            .read_file_descriptor("schema", &mut std::io::empty())
            .unwrap();
        assert_that!(contents).contains("getUser");
    }

    #[test]
    fn it_reads_from_stdin() {
        let mut stdin = "type Query { getUser(id: ID!): User }".as_bytes();
        let contents = FileDescriptorType::Stdin
            .read_file_descriptor("schema", &mut stdin)
            .unwrap();
        assert_that!(contents).contains("getUser");
    }

    #[test]
    fn it_errs_on_an_empty_file_descriptor() {
        let mut stdin = "".as_bytes();
        let result = FileDescriptorType::Stdin.read_file_descriptor("schema", &mut stdin);
        assert!(result.is_err());
    }

    #[test]
    fn it_parses_header_pairs() {
        assert_eq!(
            parse_header("x-api-key: da-key").unwrap(),
            ("x-api-key".to_string(), "da-key".to_string())
        );
        assert!(parse_header("no-colon-here").is_err());
    }
}
