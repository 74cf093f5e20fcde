use crate::{err, error::ErrorTree, node::RuleSet};
use std::collections::BTreeSet;

// Duplicate type keys would make later rows unreachable.
pub(crate) fn validate_type_keys(rules: &RuleSet, errs: &mut ErrorTree) {
    let mut seen = BTreeSet::new();
    for row in rules.properties {
        if !seen.insert(row.ty.to_string()) {
            err!(errs, "duplicate rules for property type '{}'", row.ty);
        }
    }

    let mut seen = BTreeSet::new();
    for row in rules.units {
        if !seen.insert(row.ty.to_string()) {
            err!(errs, "duplicate rules for unit type '{}'", row.ty);
        }
    }
}

// Field idents must be unique within every (type, category) pair.
// Lookups resolve by ident alone, so the builtin table keeps idents
// unique per type as well; this pass enforces the hard invariant only.
pub(crate) fn validate_field_idents(rules: &RuleSet, errs: &mut ErrorTree) {
    for row in rules.properties {
        let mut seen = BTreeSet::new();
        for field in row.fields.fields {
            if !seen.insert(format!("{}/{}", field.category, field.ident)) {
                err!(
                    errs,
                    "duplicate field '{}' in category '{}' for property type '{}'",
                    field.ident,
                    field.category,
                    row.ty
                );
            }
        }
    }

    for row in rules.units {
        let mut seen = BTreeSet::new();
        for field in row.fields.fields {
            if !seen.insert(format!("{}/{}", field.category, field.ident)) {
                err!(
                    errs,
                    "duplicate field '{}' in category '{}' for unit type '{}'",
                    field.ident,
                    field.category,
                    row.ty
                );
            }
        }
    }
}
