use crate::{
    prelude::*,
    validate::naming::{validate_help, validate_ident},
};

///
/// PropertyFieldList
///

#[derive(Clone, Debug, Serialize)]
pub struct PropertyFieldList {
    pub fields: &'static [PropertyField],
}

impl PropertyFieldList {
    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&PropertyField> {
        self.fields.iter().find(|f| f.ident == ident)
    }
}

impl ValidateNode for PropertyFieldList {}

impl VisitableNode for PropertyFieldList {
    fn drive<V: Visitor>(&self, v: &mut V) {
        for node in self.fields {
            node.accept(v);
        }
    }
}

///
/// PropertyField
///

#[derive(Clone, Debug, Serialize)]
pub struct PropertyField {
    pub ident: &'static str,
    pub category: PropertyCategory,
    pub required: bool,
    pub help: HelpText,
    pub visibility: VisibilityRule,
}

impl PropertyField {
    /// Whether the field shows at the given capacity.
    #[must_use]
    pub const fn is_visible_at(&self, capacity: Capacity) -> bool {
        self.visibility.matches(capacity)
    }
}

impl ValidateNode for PropertyField {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        validate_ident(&mut errs, self.ident);
        validate_help(&mut errs, self.help);

        // a zero threshold is every capacity, the rule would be dead weight
        if self.visibility == VisibilityRule::CapacityAbove(0) {
            err!(errs, "capacity threshold 0 is always satisfied, use Always");
        }

        errs.result()
    }
}

impl VisitableNode for PropertyField {
    fn route_key(&self) -> String {
        self.ident.to_string()
    }
}
