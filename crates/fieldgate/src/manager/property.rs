use fieldgate_schema::{
    build,
    node::RuleSet,
    types::{Capacity, PropertyCategory, PropertyType},
};

///
/// PropertyTypeManager
///
/// Stateless resolution over the property side of a rule table. Every
/// method is total: unknown types, fields, and categories degrade to
/// the documented defaults instead of failing.
///
/// The defaults are deliberately asymmetric. Field-level lookups are
/// permissive (an unknown field is shown, never required) so ad-hoc
/// fields pass through, while enumeration is empty for unknown types
/// so forms never render sections for nonsense type values.
///

#[derive(Clone, Copy, Debug)]
pub struct PropertyTypeManager {
    rules: &'static RuleSet,
}

impl PropertyTypeManager {
    #[must_use]
    pub const fn new(rules: &'static RuleSet) -> Self {
        Self { rules }
    }

    /// Manager over the compiled-in table.
    #[must_use]
    pub const fn builtin() -> Self {
        Self::new(build::rule_set_unchecked())
    }

    /// Whether the field shows for this type at this capacity. A
    /// supplied category must match the descriptor's or the lookup
    /// degrades to "no descriptor", which is visible.
    #[must_use]
    pub fn is_field_visible(
        &self,
        ty: PropertyType,
        field: &str,
        capacity: Capacity,
        category: Option<PropertyCategory>,
    ) -> bool {
        let Some(fields) = self.rules.property_fields(ty) else {
            return true;
        };
        let Some(desc) = fields.get(field) else {
            return true;
        };
        if category.is_some_and(|c| c != desc.category) {
            return true;
        }

        desc.is_visible_at(capacity)
    }

    /// The descriptor's static flag; unknown fields are never required.
    #[must_use]
    pub fn is_field_required(&self, ty: PropertyType, field: &str) -> bool {
        self.rules
            .property_fields(ty)
            .and_then(|fields| fields.get(field))
            .is_some_and(|desc| desc.required)
    }

    /// Field names for one category in declaration order, filtered by
    /// visibility at the given capacity. Empty for unknown types.
    #[must_use]
    pub fn visible_fields(
        &self,
        ty: PropertyType,
        category: PropertyCategory,
        capacity: Capacity,
    ) -> Vec<&'static str> {
        let Some(fields) = self.rules.property_fields(ty) else {
            return Vec::new();
        };

        fields
            .fields
            .iter()
            .filter(|f| f.category == category && f.is_visible_at(capacity))
            .map(|f| f.ident)
            .collect()
    }

    /// Whether the category has anything to render.
    #[must_use]
    pub fn is_category_visible(
        &self,
        ty: PropertyType,
        category: PropertyCategory,
        capacity: Capacity,
    ) -> bool {
        self.rules.property_fields(ty).is_some_and(|fields| {
            fields
                .fields
                .iter()
                .any(|f| f.category == category && f.is_visible_at(capacity))
        })
    }

    /// Descriptor help text, selecting the capacity-aware variant when
    /// one is declared; empty when there is no descriptor.
    #[must_use]
    pub fn help_text(&self, ty: PropertyType, field: &str, capacity: Capacity) -> &'static str {
        self.rules
            .property_fields(ty)
            .and_then(|fields| fields.get(field))
            .map_or("", |desc| desc.help.resolve(capacity))
    }
}

// Managers are interchangeable exactly when they resolve over the same
// table instance.
impl PartialEq for PropertyTypeManager {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.rules, other.rules)
    }
}

impl Eq for PropertyTypeManager {}
