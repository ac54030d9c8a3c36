use std::fmt::{self, Display};

use ranger_client::RangerClientError;

/// An operator-facing hint printed under the error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangerErrorSuggestion {
    CheckApiId,
    CheckGatewayEndpoint,
    CheckSchemaDefinition,
    CheckAuthHeaders,
}

impl Display for RangerErrorSuggestion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suggestion = match self {
            RangerErrorSuggestion::CheckApiId => {
                "make sure the --api-id (or API_ID) matches an API on the gateway"
            }
            RangerErrorSuggestion::CheckGatewayEndpoint => {
                "make sure the --endpoint (or GATEWAY_ENDPOINT) is reachable from this machine"
            }
            RangerErrorSuggestion::CheckSchemaDefinition => {
                "check the schema file for syntax the gateway rejects"
            }
            RangerErrorSuggestion::CheckAuthHeaders => {
                "make sure the --header values carry valid credentials for the gateway"
            }
        };
        write!(formatter, "{suggestion}")
    }
}

/// Maps known client failures to a suggestion. Errors we cannot say
/// anything helpful about get none.
pub(crate) fn suggestion(error: &anyhow::Error) -> Option<RangerErrorSuggestion> {
    match error.downcast_ref::<RangerClientError>()? {
        RangerClientError::SendRequest(_) => Some(RangerErrorSuggestion::CheckGatewayEndpoint),
        RangerClientError::Fetch { .. } => Some(RangerErrorSuggestion::CheckApiId),
        RangerClientError::Publication { .. } => {
            Some(RangerErrorSuggestion::CheckSchemaDefinition)
        }
        RangerClientError::InvalidHeaderName(_) | RangerClientError::InvalidHeaderValue(_) => {
            Some(RangerErrorSuggestion::CheckAuthHeaders)
        }
        _ => None,
    }
}
