use crate::prelude::*;

///
/// RuleSet
///
/// The full compiled-in rule table. The property and unit sides never
/// cross-contaminate: a field name may exist in both with different
/// requirement and visibility semantics.
///

#[derive(Clone, Debug, Serialize)]
pub struct RuleSet {
    pub properties: &'static [PropertyRules],
    pub units: &'static [UnitRules],
}

impl RuleSet {
    #[must_use]
    pub fn property_fields(&self, ty: PropertyType) -> Option<&PropertyFieldList> {
        self.properties.iter().find(|r| r.ty == ty).map(|r| &r.fields)
    }

    #[must_use]
    pub fn unit_fields(&self, ty: UnitType) -> Option<&UnitFieldList> {
        self.units.iter().find(|r| r.ty == ty).map(|r| &r.fields)
    }
}

impl ValidateNode for RuleSet {}

impl VisitableNode for RuleSet {
    fn drive<V: Visitor>(&self, v: &mut V) {
        for node in self.properties {
            node.accept(v);
        }
        for node in self.units {
            node.accept(v);
        }
    }
}

///
/// PropertyRules
///

#[derive(Clone, Debug, Serialize)]
pub struct PropertyRules {
    pub ty: PropertyType,
    pub fields: PropertyFieldList,
}

impl ValidateNode for PropertyRules {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        // rows keyed by Other would contradict the unknown-type policy
        if self.ty == PropertyType::Other {
            err!(errs, "rules may not be keyed by the catch-all property type");
        }

        errs.result()
    }
}

impl VisitableNode for PropertyRules {
    fn route_key(&self) -> String {
        format!("property/{}", self.ty)
    }

    fn drive<V: Visitor>(&self, v: &mut V) {
        self.fields.accept(v);
    }
}

///
/// UnitRules
///

#[derive(Clone, Debug, Serialize)]
pub struct UnitRules {
    pub ty: UnitType,
    pub fields: UnitFieldList,
}

impl ValidateNode for UnitRules {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.ty == UnitType::Other {
            err!(errs, "rules may not be keyed by the catch-all unit type");
        }

        errs.result()
    }
}

impl VisitableNode for UnitRules {
    fn route_key(&self) -> String {
        format!("unit/{}", self.ty)
    }

    fn drive<V: Visitor>(&self, v: &mut V) {
        self.fields.accept(v);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        tables,
        types::{PropertyType, UnitType},
    };

    #[test]
    fn lookup_by_type_finds_declared_rows() {
        let rules = tables::builtin();

        assert!(rules.property_fields(PropertyType::House).is_some());
        assert!(rules.property_fields(PropertyType::Industrial).is_some());
        assert!(rules.property_fields(PropertyType::Other).is_none());

        assert!(rules.unit_fields(UnitType::Studio).is_some());
        assert!(rules.unit_fields(UnitType::Other).is_none());
    }
}
