//! The builtin rule table.
//!
//! Pure declarative data, compiled in and never mutated. Declaration
//! order within each list is the render order the consuming forms use.

mod property;
mod unit;

use crate::node::RuleSet;

pub(crate) static BUILTIN: RuleSet = RuleSet {
    properties: property::RULES,
    units: unit::RULES,
};

/// The compiled-in table. Validation lives in `build`, not here.
#[must_use]
pub const fn builtin() -> &'static RuleSet {
    &BUILTIN
}
