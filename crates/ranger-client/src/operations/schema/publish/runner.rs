use crate::gateway::GatewayService;
use crate::operations::schema::publish::{SchemaPublishInput, SchemaPublishResponse};
use crate::shared::PublicationStatus;
use crate::RangerClientError;

/// Submits the schema definition and waits for the asynchronous
/// publication job to reach a terminal state.
///
/// Only `PROCESSING` is an acceptable initial status; anything else
/// aborts before any resolver work begins, since resolvers must not be
/// wired against an unpublished or inconsistent schema. While polling, a
/// `FAILED` status is immediately fatal and carries the remote-supplied
/// detail; transport errors are retried a bounded number of times.
pub async fn run(
    input: SchemaPublishInput,
    client: &dyn GatewayService,
) -> Result<SchemaPublishResponse, RangerClientError> {
    let initial_status = client
        .start_schema_creation(&input.api_id, input.schema.as_bytes())
        .await?;
    if initial_status != PublicationStatus::Processing {
        return Err(RangerClientError::Publication {
            api_id: input.api_id,
            msg: format!("schema creation started with status {initial_status}, expected PROCESSING"),
        });
    }
    tracing::info!(api_id = %input.api_id, "schema creation started");

    let mut consecutive_transport_errors = 0;
    loop {
        match client.get_schema_creation_status(&input.api_id).await {
            Ok(job) => {
                consecutive_transport_errors = 0;
                match job.status {
                    PublicationStatus::Success => {
                        tracing::info!(api_id = %input.api_id, "schema creation completed");
                        return Ok(SchemaPublishResponse {
                            api_id: input.api_id,
                        });
                    }
                    PublicationStatus::Failed => {
                        return Err(RangerClientError::Publication {
                            api_id: input.api_id,
                            msg: job
                                .details
                                .unwrap_or_else(|| "schema creation failed with no details".to_string()),
                        });
                    }
                    PublicationStatus::Processing | PublicationStatus::Pending => {
                        tracing::info!(api_id = %input.api_id, status = %job.status, "schema creation in progress");
                    }
                    PublicationStatus::Unknown => {
                        return Err(RangerClientError::Publication {
                            api_id: input.api_id,
                            msg: "gateway reported an unrecognized schema creation status".to_string(),
                        });
                    }
                }
            }
            Err(error) => {
                consecutive_transport_errors += 1;
                if consecutive_transport_errors > input.max_transport_retries {
                    return Err(RangerClientError::Publication {
                        api_id: input.api_id,
                        msg: format!(
                            "giving up after {consecutive_transport_errors} transport errors while polling: {error}"
                        ),
                    });
                }
                tracing::warn!(api_id = %input.api_id, %error, "could not poll schema creation status, retrying");
            }
        }
        tokio::time::sleep(input.poll_interval).await;
    }
}
