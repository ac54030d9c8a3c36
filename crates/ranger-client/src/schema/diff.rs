use crate::shared::OperationSet;

/// Whether remote state needs to be driven toward the declared state.
///
/// True unless the two sets are exactly equal as sets of
/// `(type_name, field_name)` pairs. This detects structural drift only
/// (operations added or removed), never content drift in templates or
/// data-source configuration; callers that want to reconcile content
/// drift bypass this check and always reconcile.
pub fn needs_reconciliation(declared: &OperationSet, remote: &OperationSet) -> bool {
    declared != remote
}

#[cfg(test)]
mod tests {
    use crate::shared::OperationDeclaration;

    use super::*;

    fn set(pairs: &[(&str, &str)]) -> OperationSet {
        pairs
            .iter()
            .map(|(type_name, field_name)| OperationDeclaration::new(*type_name, *field_name))
            .collect()
    }

    #[test]
    fn identical_sets_need_no_reconciliation() {
        let declared = set(&[("Query", "getUser"), ("Mutation", "updateUser")]);
        assert!(!needs_reconciliation(&declared, &declared.clone()));
    }

    #[test]
    fn ordering_never_changes_the_result() {
        let declared = set(&[("Query", "getUser"), ("Query", "listUsers")]);
        let remote = set(&[("Query", "listUsers"), ("Query", "getUser")]);
        assert!(!needs_reconciliation(&declared, &remote));
    }

    #[test]
    fn an_added_operation_triggers_reconciliation() {
        let declared = set(&[("Query", "getUser"), ("Query", "listUsers")]);
        let remote = set(&[("Query", "getUser")]);
        assert!(needs_reconciliation(&declared, &remote));
    }

    #[test]
    fn a_removed_operation_triggers_reconciliation() {
        let declared = set(&[("Query", "getUser")]);
        let remote = set(&[("Query", "getUser"), ("Mutation", "updateUser")]);
        assert!(needs_reconciliation(&declared, &remote));
    }

    #[test]
    fn empty_versus_empty_is_converged() {
        assert!(!needs_reconciliation(&OperationSet::new(), &OperationSet::new()));
    }
}
