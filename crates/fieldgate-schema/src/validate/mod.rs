//! Rule-table validation orchestration and shared helpers.

pub mod naming;
pub mod uniqueness;

use crate::{
    error::ErrorTree,
    node::RuleSet,
    visit::{ValidateVisitor, VisitableNode},
};

/// Run full table validation in a staged, deterministic order.
pub(crate) fn validate_rule_set(rules: &RuleSet) -> Result<(), ErrorTree> {
    // Phase 1: validate each node (structural + local invariants).
    let mut errors = validate_nodes(rules);

    // Phase 2: enforce table-wide invariants.
    validate_global(rules, &mut errors);

    errors.result()
}

// Validate all nodes via the visitor to retain route-aware error aggregation.
fn validate_nodes(rules: &RuleSet) -> ErrorTree {
    let mut visitor = ValidateVisitor::new();
    rules.accept(&mut visitor);

    visitor.errors
}

// Run global validation passes that require a full table view.
fn validate_global(rules: &RuleSet, errors: &mut ErrorTree) {
    uniqueness::validate_type_keys(rules, errors);
    uniqueness::validate_field_idents(rules, errors);
}
