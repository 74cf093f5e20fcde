use crate::{Error, error::ErrorTree, node::RuleSet, tables, validate::validate_rule_set};
use std::sync::OnceLock;
use thiserror::Error as ThisError;

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}

static RULES_VALIDATED: OnceLock<bool> = OnceLock::new();

/// The builtin table without validation. Resolution is total and does
/// not depend on the table having been checked.
#[must_use]
pub const fn rule_set_unchecked() -> &'static RuleSet {
    tables::builtin()
}

/// The builtin table, validating it exactly once per process.
pub fn rule_set() -> Result<&'static RuleSet, Error> {
    let rules = rule_set_unchecked();
    validate(rules).map_err(BuildError::Validation)?;

    Ok(rules)
}

// validate
fn validate(rules: &RuleSet) -> Result<(), ErrorTree> {
    if RULES_VALIDATED.get().copied().unwrap_or(false) {
        return Ok(());
    }

    validate_rule_set(rules)?;

    RULES_VALIDATED.set(true).ok();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{rule_set, rule_set_unchecked};

    #[test]
    fn rule_set_validates_and_returns_the_builtin_table() {
        let rules = rule_set().expect("builtin table should validate");
        assert!(std::ptr::eq(rules, rule_set_unchecked()));

        // second call hits the validated fast path
        assert!(rule_set().is_ok());
    }

    #[test]
    fn builtin_table_serializes_to_json() {
        let rules = rule_set_unchecked();
        let json = serde_json::to_value(rules).expect("table should serialize");

        let properties = json
            .get("properties")
            .and_then(|v| v.as_array())
            .expect("properties array");
        assert_eq!(properties.len(), 5);

        let units = json
            .get("units")
            .and_then(|v| v.as_array())
            .expect("units array");
        assert_eq!(units.len(), 5);
    }
}
