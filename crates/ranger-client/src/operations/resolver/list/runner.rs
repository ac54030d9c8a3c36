use crate::gateway::GatewayService;
use crate::operations::resolver::list::{ResolverListInput, ResolverListResponse};
use crate::shared::OperationKind;
use crate::RangerClientError;

/// Fetches every resolver currently attached to the API's root operation
/// types, fully draining pagination before returning. Any failure is
/// fatal for the run: reconciliation never proceeds against a partial
/// snapshot.
pub async fn run(
    input: ResolverListInput,
    client: &dyn GatewayService,
) -> Result<ResolverListResponse, RangerClientError> {
    let mut resolvers = Vec::new();
    for kind in OperationKind::ALL {
        let mut next_token: Option<String> = None;
        loop {
            let page = client
                .list_resolvers(&input.api_id, kind.as_str(), next_token)
                .await
                .map_err(|error| RangerClientError::Fetch {
                    api_id: input.api_id.clone(),
                    msg: error.to_string(),
                })?;
            resolvers.extend(page.resolvers);
            next_token = page.next_token;
            if next_token.is_none() {
                break;
            }
        }
    }
    tracing::debug!(api_id = %input.api_id, count = resolvers.len(), "fetched remote resolvers");
    Ok(ResolverListResponse { resolvers })
}
