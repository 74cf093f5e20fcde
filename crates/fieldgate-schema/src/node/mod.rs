mod field;
mod rule_set;
mod unit_field;

pub use field::{PropertyField, PropertyFieldList};
pub use rule_set::{PropertyRules, RuleSet, UnitRules};
pub use unit_field::{UnitField, UnitFieldList};
