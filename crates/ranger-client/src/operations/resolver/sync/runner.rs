use crate::gateway::{GatewayService, Lookup};
use crate::operations::resolver::sync::{
    OperationOutcome, ResolverSyncInput, ResolverSyncResponse, SyncAction, SyncFailure,
};
use crate::shared::{DataSourceRef, OperationDeclaration, OperationKind, RemoteResolver};
use crate::RangerClientError;

/// Drives remote state toward the declared operations: for each Query or
/// Mutation operation, ensures a backing data source exists and ensures a
/// resolver exists with the kind-selected mapping templates, both via the
/// idempotent create-or-update pattern.
///
/// Operations are reconciled independently; a failure on one is recorded
/// and the loop continues with the rest.
pub async fn run(
    input: ResolverSyncInput,
    client: &dyn GatewayService,
) -> Result<ResolverSyncResponse, RangerClientError> {
    let mut response = ResolverSyncResponse::default();

    for operation in &input.declared {
        let Some(kind) = operation.kind() else {
            tracing::debug!(%operation, "not a root operation type, skipping");
            response.skipped.push(operation.clone());
            continue;
        };

        match reconcile_operation(&input, operation, kind, client).await {
            Ok(outcome) => {
                tracing::info!(
                    %operation,
                    data_source = ?outcome.data_source,
                    resolver = ?outcome.resolver,
                    "reconciled operation"
                );
                response.outcomes.push(outcome);
            }
            Err(error) => {
                tracing::error!(%operation, %error, "could not reconcile operation");
                response.failures.push(SyncFailure {
                    operation: operation.clone(),
                    message: error.to_string(),
                });
            }
        }
    }

    Ok(response)
}

async fn reconcile_operation(
    input: &ResolverSyncInput,
    operation: &OperationDeclaration,
    kind: OperationKind,
    client: &dyn GatewayService,
) -> Result<OperationOutcome, RangerClientError> {
    let data_source = DataSourceRef::lambda(
        operation.data_source_name(),
        &input.lambda_function_arn,
        &input.service_role_arn,
    );

    // probe, then branch: absence selects create, presence selects an
    // unconditional update to the same target
    let data_source_action = match client
        .get_data_source(&input.api_id, &data_source.name)
        .await
        .map_err(|error| reconcile_error(operation, error))?
    {
        Lookup::Found(_) => {
            client
                .update_data_source(&input.api_id, &data_source)
                .await
                .map_err(|error| reconcile_error(operation, error))?;
            SyncAction::Updated
        }
        Lookup::NotFound => {
            client
                .create_data_source(&input.api_id, &data_source)
                .await
                .map_err(|error| reconcile_error(operation, error))?;
            SyncAction::Created
        }
    };

    // same pattern one layer up: try the update, create on NotFound
    let templates = input.templates.pair_for(kind);
    let resolver = RemoteResolver {
        type_name: operation.type_name.clone(),
        field_name: operation.field_name.clone(),
        data_source_name: data_source.name,
        request_mapping_template: templates.request.clone(),
        response_mapping_template: templates.response.clone(),
    };
    let resolver_action = match client
        .update_resolver(&input.api_id, &resolver)
        .await
        .map_err(|error| reconcile_error(operation, error))?
    {
        Lookup::Found(()) => SyncAction::Updated,
        Lookup::NotFound => {
            client
                .create_resolver(&input.api_id, &resolver)
                .await
                .map_err(|error| reconcile_error(operation, error))?;
            SyncAction::Created
        }
    };

    Ok(OperationOutcome {
        operation: operation.clone(),
        data_source: data_source_action,
        resolver: resolver_action,
    })
}

fn reconcile_error(
    operation: &OperationDeclaration,
    error: RangerClientError,
) -> RangerClientError {
    RangerClientError::Reconcile {
        type_name: operation.type_name.clone(),
        field_name: operation.field_name.clone(),
        msg: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use crate::gateway::ResolverPage;
    use crate::shared::{
        MappingTemplatePair, MappingTemplates, OperationDeclaration, PublicationStatus,
        SchemaCreationStatus,
    };

    use super::*;

    /// An in-memory gateway that remembers what was created, so the
    /// create/update branch can be observed across repeated runs.
    #[derive(Default)]
    struct FakeGateway {
        data_sources: Mutex<HashMap<String, DataSourceRef>>,
        resolvers: Mutex<HashMap<(String, String), RemoteResolver>>,
        data_source_creates: Mutex<Vec<String>>,
        data_source_updates: Mutex<Vec<String>>,
        resolver_creates: Mutex<Vec<(String, String)>>,
        resolver_updates: Mutex<Vec<(String, String)>>,
        broken_data_sources: HashSet<String>,
    }

    #[async_trait]
    impl GatewayService for FakeGateway {
        async fn start_schema_creation(
            &self,
            _api_id: &str,
            _definition: &[u8],
        ) -> Result<PublicationStatus, RangerClientError> {
            unimplemented!("not exercised by resolver sync")
        }

        async fn get_schema_creation_status(
            &self,
            _api_id: &str,
        ) -> Result<SchemaCreationStatus, RangerClientError> {
            unimplemented!("not exercised by resolver sync")
        }

        async fn get_data_source(
            &self,
            _api_id: &str,
            name: &str,
        ) -> Result<Lookup<DataSourceRef>, RangerClientError> {
            if self.broken_data_sources.contains(name) {
                return Err(RangerClientError::HandleResponse {
                    msg: "access denied".to_string(),
                });
            }
            Ok(match self.data_sources.lock().unwrap().get(name) {
                Some(data_source) => Lookup::Found(data_source.clone()),
                None => Lookup::NotFound,
            })
        }

        async fn create_data_source(
            &self,
            _api_id: &str,
            data_source: &DataSourceRef,
        ) -> Result<(), RangerClientError> {
            self.data_source_creates
                .lock()
                .unwrap()
                .push(data_source.name.clone());
            self.data_sources
                .lock()
                .unwrap()
                .insert(data_source.name.clone(), data_source.clone());
            Ok(())
        }

        async fn update_data_source(
            &self,
            _api_id: &str,
            data_source: &DataSourceRef,
        ) -> Result<(), RangerClientError> {
            self.data_source_updates
                .lock()
                .unwrap()
                .push(data_source.name.clone());
            self.data_sources
                .lock()
                .unwrap()
                .insert(data_source.name.clone(), data_source.clone());
            Ok(())
        }

        async fn update_resolver(
            &self,
            _api_id: &str,
            resolver: &RemoteResolver,
        ) -> Result<Lookup<()>, RangerClientError> {
            let key = (resolver.type_name.clone(), resolver.field_name.clone());
            let mut resolvers = self.resolvers.lock().unwrap();
            if resolvers.contains_key(&key) {
                self.resolver_updates.lock().unwrap().push(key.clone());
                resolvers.insert(key, resolver.clone());
                Ok(Lookup::Found(()))
            } else {
                Ok(Lookup::NotFound)
            }
        }

        async fn create_resolver(
            &self,
            _api_id: &str,
            resolver: &RemoteResolver,
        ) -> Result<(), RangerClientError> {
            let key = (resolver.type_name.clone(), resolver.field_name.clone());
            self.resolver_creates.lock().unwrap().push(key.clone());
            self.resolvers.lock().unwrap().insert(key, resolver.clone());
            Ok(())
        }

        async fn list_resolvers(
            &self,
            _api_id: &str,
            _type_name: &str,
            _next_token: Option<String>,
        ) -> Result<ResolverPage, RangerClientError> {
            unimplemented!("not exercised by resolver sync")
        }
    }

    fn input(declared: Vec<OperationDeclaration>) -> ResolverSyncInput {
        ResolverSyncInput {
            api_id: "abc123".to_string(),
            declared,
            templates: MappingTemplates {
                query: MappingTemplatePair::new("query request", "query response"),
                mutation: MappingTemplatePair::new("mutation request", "mutation response"),
            },
            lambda_function_arn: "arn:lambda".to_string(),
            service_role_arn: "arn:role".to_string(),
        }
    }

    #[tokio::test]
    async fn fresh_remote_state_gets_creates_then_updates() {
        let gateway = FakeGateway::default();
        let declared = vec![OperationDeclaration::new("Query", "getUser")];

        let first = run(input(declared.clone()), &gateway).await.unwrap();
        assert_eq!(first.outcomes[0].data_source, SyncAction::Created);
        assert_eq!(first.outcomes[0].resolver, SyncAction::Created);

        let second = run(input(declared), &gateway).await.unwrap();
        assert_eq!(second.outcomes[0].data_source, SyncAction::Updated);
        assert_eq!(second.outcomes[0].resolver, SyncAction::Updated);

        // exactly one create followed by one update across the two runs
        assert_eq!(
            *gateway.data_source_creates.lock().unwrap(),
            vec!["Query_getUser_DataSource".to_string()]
        );
        assert_eq!(
            *gateway.data_source_updates.lock().unwrap(),
            vec!["Query_getUser_DataSource".to_string()]
        );
    }

    #[tokio::test]
    async fn end_to_end_two_operations_with_correct_templates() {
        let gateway = FakeGateway::default();
        let declared = vec![
            OperationDeclaration::new("Query", "getUser"),
            OperationDeclaration::new("Mutation", "updateUser"),
        ];

        let response = run(input(declared), &gateway).await.unwrap();
        assert_eq!(response.outcomes.len(), 2);
        assert!(!response.has_failures());

        let data_sources = gateway.data_sources.lock().unwrap();
        assert!(data_sources.contains_key("Query_getUser_DataSource"));
        assert!(data_sources.contains_key("Mutation_updateUser_DataSource"));

        let resolvers = gateway.resolvers.lock().unwrap();
        assert_eq!(resolvers.len(), 2);
        let query = &resolvers[&("Query".to_string(), "getUser".to_string())];
        assert_eq!(query.request_mapping_template, "query request");
        assert_eq!(query.response_mapping_template, "query response");
        assert_eq!(query.data_source_name, "Query_getUser_DataSource");
        let mutation = &resolvers[&("Mutation".to_string(), "updateUser".to_string())];
        assert_eq!(mutation.request_mapping_template, "mutation request");
        assert_eq!(mutation.response_mapping_template, "mutation response");
    }

    #[tokio::test]
    async fn one_failing_operation_does_not_block_the_rest() {
        let gateway = FakeGateway {
            broken_data_sources: HashSet::from(["Query_getUser_DataSource".to_string()]),
            ..FakeGateway::default()
        };
        let declared = vec![
            OperationDeclaration::new("Query", "getUser"),
            OperationDeclaration::new("Mutation", "updateUser"),
        ];

        let response = run(input(declared), &gateway).await.unwrap();

        assert_eq!(response.failures.len(), 1);
        assert_eq!(
            response.failures[0].operation,
            OperationDeclaration::new("Query", "getUser")
        );
        assert!(response.failures[0].message.contains("getUser"));
        assert_eq!(response.outcomes.len(), 1);
        assert_eq!(
            response.outcomes[0].operation,
            OperationDeclaration::new("Mutation", "updateUser")
        );
    }

    #[tokio::test]
    async fn non_root_operations_are_skipped_untouched() {
        let gateway = FakeGateway::default();
        let declared = vec![
            OperationDeclaration::new("User", "friends"),
            OperationDeclaration::new("Query", "getUser"),
        ];

        let response = run(input(declared), &gateway).await.unwrap();

        assert_eq!(response.skipped, vec![OperationDeclaration::new("User", "friends")]);
        assert_eq!(response.outcomes.len(), 1);
        assert!(!gateway
            .data_sources
            .lock()
            .unwrap()
            .contains_key("User_friends_DataSource"));
    }
}
