use fieldgate_schema::{
    build,
    node::RuleSet,
    types::{UnitCategory, UnitType},
};

///
/// UnitTypeManager
///
/// Unit-side counterpart of [`super::PropertyTypeManager`]. Units have
/// no capacity dimension: visibility is plain membership in the type's
/// list. The unknown-type defaults follow the same asymmetric policy.
///

#[derive(Clone, Copy, Debug)]
pub struct UnitTypeManager {
    rules: &'static RuleSet,
}

impl UnitTypeManager {
    #[must_use]
    pub const fn new(rules: &'static RuleSet) -> Self {
        Self { rules }
    }

    /// Manager over the compiled-in table.
    #[must_use]
    pub const fn builtin() -> Self {
        Self::new(build::rule_set_unchecked())
    }

    /// A supplied category must match the descriptor's or the lookup
    /// degrades to "no descriptor", which is visible.
    ///
    /// Unit descriptors carry no visibility rule, so every resolution
    /// path lands on visible today. The lookup is kept symmetric with
    /// the property side so a rule dimension can be added to the table
    /// without touching callers.
    #[must_use]
    pub fn is_field_visible(
        &self,
        ty: UnitType,
        field: &str,
        category: Option<UnitCategory>,
    ) -> bool {
        let Some(fields) = self.rules.unit_fields(ty) else {
            return true;
        };
        let Some(desc) = fields.get(field) else {
            return true;
        };
        if category.is_some_and(|c| c != desc.category) {
            return true;
        }

        // membership in the type's list is the whole visibility rule
        true
    }

    /// The descriptor's static flag; unknown fields are never required.
    #[must_use]
    pub fn is_field_required(&self, ty: UnitType, field: &str) -> bool {
        self.rules
            .unit_fields(ty)
            .and_then(|fields| fields.get(field))
            .is_some_and(|desc| desc.required)
    }

    /// Field names for one category in declaration order. Empty for
    /// unknown types.
    #[must_use]
    pub fn visible_fields(&self, ty: UnitType, category: UnitCategory) -> Vec<&'static str> {
        let Some(fields) = self.rules.unit_fields(ty) else {
            return Vec::new();
        };

        fields
            .fields
            .iter()
            .filter(|f| f.category == category)
            .map(|f| f.ident)
            .collect()
    }

    /// Whether the category has anything to render.
    #[must_use]
    pub fn is_category_visible(&self, ty: UnitType, category: UnitCategory) -> bool {
        self.rules
            .unit_fields(ty)
            .is_some_and(|fields| fields.fields.iter().any(|f| f.category == category))
    }

    /// Descriptor help text; empty when there is no descriptor.
    #[must_use]
    pub fn help_text(&self, ty: UnitType, field: &str) -> &'static str {
        self.rules
            .unit_fields(ty)
            .and_then(|fields| fields.get(field))
            .map_or("", |desc| desc.help)
    }
}

// Managers are interchangeable exactly when they resolve over the same
// table instance.
impl PartialEq for UnitTypeManager {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.rules, other.rules)
    }
}

impl Eq for UnitTypeManager {}
