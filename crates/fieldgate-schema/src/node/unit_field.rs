use crate::{
    prelude::*,
    validate::naming::{validate_help_str, validate_ident},
};

///
/// UnitFieldList
///

#[derive(Clone, Debug, Serialize)]
pub struct UnitFieldList {
    pub fields: &'static [UnitField],
}

impl UnitFieldList {
    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&UnitField> {
        self.fields.iter().find(|f| f.ident == ident)
    }
}

impl ValidateNode for UnitFieldList {}

impl VisitableNode for UnitFieldList {
    fn drive<V: Visitor>(&self, v: &mut V) {
        for node in self.fields {
            node.accept(v);
        }
    }
}

///
/// UnitField
///
/// Unit fields have no capacity dimension: visibility is plain
/// membership in the type's list, and help text is a flat string.
///

#[derive(Clone, Debug, Serialize)]
pub struct UnitField {
    pub ident: &'static str,
    pub category: UnitCategory,
    pub required: bool,

    #[serde(skip_serializing_if = "str::is_empty")]
    pub help: &'static str,
}

impl ValidateNode for UnitField {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        validate_ident(&mut errs, self.ident);
        validate_help_str(&mut errs, self.help);

        errs.result()
    }
}

impl VisitableNode for UnitField {
    fn route_key(&self) -> String {
        self.ident.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{UnitField, UnitFieldList};
    use crate::types::UnitCategory;

    const FIELDS: &[UnitField] = &[
        UnitField {
            ident: "baseRent",
            category: UnitCategory::Fees,
            required: true,
            help: "",
        },
        UnitField {
            ident: "internet",
            category: UnitCategory::Utilities,
            required: false,
            help: "Included in rent unless metered separately",
        },
    ];

    #[test]
    fn get_finds_fields_by_ident() {
        let list = UnitFieldList { fields: FIELDS };

        assert!(list.get("baseRent").is_some_and(|f| f.required));
        assert!(list.get("internet").is_some_and(|f| !f.help.is_empty()));
        assert!(list.get("parking").is_none());
    }
}
