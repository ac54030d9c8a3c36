mod metadata;

pub use metadata::RangerErrorSuggestion;

pub type RangerResult<T> = std::result::Result<T, RangerError>;

use std::fmt::{self, Display};

use console::style;

/// A specialized `Error` type for ranger that wraps `anyhow` and carries
/// an optional suggestion for the operator, depending on the specific
/// error they encountered.
#[derive(Debug)]
pub struct RangerError {
    error: anyhow::Error,
    suggestion: Option<RangerErrorSuggestion>,
}

impl RangerError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let error = error.into();
        let suggestion = metadata::suggestion(&error);
        Self { error, suggestion }
    }

    pub fn suggestion(&self) -> Option<&RangerErrorSuggestion> {
        self.suggestion.as_ref()
    }
}

impl Display for RangerError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {}", style("error:").red().bold(), self.error)?;
        for cause in self.error.chain().skip(1) {
            write!(formatter, "\n  caused by: {cause}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(formatter, "\n{} {}", style("hint:").cyan().bold(), suggestion)?;
        }
        Ok(())
    }
}

impl<E: Into<anyhow::Error>> From<E> for RangerError {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use ranger_client::RangerClientError;

    use super::*;

    #[test]
    fn client_fetch_errors_suggest_checking_the_api_id() {
        let error = RangerError::new(RangerClientError::Fetch {
            api_id: "abc123".to_string(),
            msg: "access denied".to_string(),
        });
        assert_eq!(
            error.suggestion(),
            Some(&RangerErrorSuggestion::CheckApiId)
        );
    }

    #[test]
    fn adhoc_errors_carry_no_suggestion() {
        let error = RangerError::new(anyhow!("something else"));
        assert_eq!(error.suggestion(), None);
    }
}
