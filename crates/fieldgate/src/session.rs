use crate::manager::{PropertyTypeManager, UnitTypeManager};
use fieldgate_schema::types::{Capacity, PropertyCategory, PropertyType, UnitCategory, UnitType};
use std::str::FromStr;

///
/// SessionInput
///
/// Raw form-session inputs as the client supplies them. `unit_type`
/// takes priority over `property_type` when both are present; that is
/// documented precedence, not an error.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct SessionInput<'a> {
    pub unit_type: Option<&'a str>,
    pub property_type: Option<&'a str>,
    pub max_allowed_units: Option<u32>,
}

///
/// FormSession
///
/// Facade bound to one entity type and capacity for the lifetime of a
/// form render pass. Cheap to copy; sessions built from equal inputs
/// compare equal, so consumers can keep one handle per form tree.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormSession {
    binding: Binding,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Binding {
    Unit {
        manager: UnitTypeManager,
        ty: UnitType,
    },
    Property {
        manager: PropertyTypeManager,
        ty: PropertyType,
        capacity: Capacity,
    },

    /// No type configured. Generic and legacy forms keep working:
    /// everything is visible, nothing is required, nothing enumerates.
    Unconstrained,
}

// Outcome of parsing an optional category filter string.
enum Filter<C> {
    Unfiltered,
    Match(C),
    NoMatch,
}

fn parse_filter<C: FromStr>(category: Option<&str>) -> Filter<C> {
    match category {
        None => Filter::Unfiltered,
        Some(s) => s.parse().map_or(Filter::NoMatch, Filter::Match),
    }
}

impl FormSession {
    #[must_use]
    pub fn new(input: SessionInput<'_>) -> Self {
        let binding = if let Some(unit_type) = input.unit_type {
            Binding::Unit {
                manager: UnitTypeManager::builtin(),
                ty: UnitType::resolve(unit_type),
            }
        } else if let Some(property_type) = input.property_type {
            Binding::Property {
                manager: PropertyTypeManager::builtin(),
                ty: PropertyType::resolve(property_type),
                capacity: Capacity::new(input.max_allowed_units.unwrap_or(1)),
            }
        } else {
            Binding::Unconstrained
        };

        Self { binding }
    }

    /// Whether the field should render. An unparseable category string
    /// can match no descriptor, which is visible by policy.
    #[must_use]
    pub fn is_visible(&self, field: &str, category: Option<&str>) -> bool {
        match self.binding {
            Binding::Unit { manager, ty } => match parse_filter::<UnitCategory>(category) {
                Filter::Unfiltered => manager.is_field_visible(ty, field, None),
                Filter::Match(c) => manager.is_field_visible(ty, field, Some(c)),
                Filter::NoMatch => true,
            },
            Binding::Property {
                manager,
                ty,
                capacity,
            } => match parse_filter::<PropertyCategory>(category) {
                Filter::Unfiltered => manager.is_field_visible(ty, field, capacity, None),
                Filter::Match(c) => manager.is_field_visible(ty, field, capacity, Some(c)),
                Filter::NoMatch => true,
            },
            Binding::Unconstrained => true,
        }
    }

    #[must_use]
    pub fn is_required(&self, field: &str) -> bool {
        match self.binding {
            Binding::Unit { manager, ty } => manager.is_field_required(ty, field),
            Binding::Property { manager, ty, .. } => manager.is_field_required(ty, field),
            Binding::Unconstrained => false,
        }
    }

    /// Field names for one category in declaration order. Empty when
    /// the session is unconstrained or the category does not parse.
    #[must_use]
    pub fn visible_fields(&self, category: &str) -> Vec<&'static str> {
        match self.binding {
            Binding::Unit { manager, ty } => category
                .parse::<UnitCategory>()
                .map_or_else(|_| Vec::new(), |c| manager.visible_fields(ty, c)),
            Binding::Property {
                manager,
                ty,
                capacity,
            } => category
                .parse::<PropertyCategory>()
                .map_or_else(|_| Vec::new(), |c| manager.visible_fields(ty, c, capacity)),
            Binding::Unconstrained => Vec::new(),
        }
    }

    /// Whether to render the whole section. Unconstrained sessions show
    /// every section even though they enumerate nothing.
    #[must_use]
    pub fn is_category_visible(&self, category: &str) -> bool {
        match self.binding {
            Binding::Unit { manager, ty } => category
                .parse::<UnitCategory>()
                .is_ok_and(|c| manager.is_category_visible(ty, c)),
            Binding::Property {
                manager,
                ty,
                capacity,
            } => category
                .parse::<PropertyCategory>()
                .is_ok_and(|c| manager.is_category_visible(ty, c, capacity)),
            Binding::Unconstrained => true,
        }
    }

    #[must_use]
    pub fn help_text(&self, field: &str) -> &'static str {
        match self.binding {
            Binding::Unit { manager, ty } => manager.help_text(ty, field),
            Binding::Property {
                manager,
                ty,
                capacity,
            } => manager.help_text(ty, field, capacity),
            Binding::Unconstrained => "",
        }
    }

    /// Reserved for role-based gating; fixed today.
    #[must_use]
    pub const fn can_edit(&self) -> bool {
        true
    }

    /// Reserved for role-based gating; fixed today.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{FormSession, SessionInput};

    fn property_session(ty: &str, max_allowed_units: u32) -> FormSession {
        FormSession::new(SessionInput {
            property_type: Some(ty),
            max_allowed_units: Some(max_allowed_units),
            ..SessionInput::default()
        })
    }

    #[test]
    fn property_sessions_resolve_through_the_property_table() {
        let session = property_session("house", 1);

        assert!(session.is_required("bedrooms"));
        assert!(session.is_visible("bedrooms", Some("specifications")));
        assert!(session.is_category_visible("financial"));
        assert!(!session.is_category_visible("unit"));
    }

    #[test]
    fn unit_type_takes_precedence_over_property_type() {
        let session = FormSession::new(SessionInput {
            unit_type: Some("studio"),
            property_type: Some("apartment"),
            max_allowed_units: Some(1),
        });

        // the apartment table gates totalUnits at capacity 1; the unit
        // table does not know it, so the permissive unit outcome wins
        assert!(session.is_visible("totalUnits", Some("specifications")));
        assert_eq!(
            session.visible_fields("fees"),
            ["baseRent", "securityDeposit", "cleaningFee"]
        );

        // and the same input through the property table would hide it
        assert!(!property_session("apartment", 1).is_visible("totalUnits", Some("specifications")));
    }

    #[test]
    fn unconstrained_sessions_are_fully_permissive() {
        let session = FormSession::new(SessionInput::default());

        assert!(session.is_visible("anything", None));
        assert!(session.is_visible("anything", Some("no-such-category")));
        assert!(!session.is_required("anything"));
        assert!(session.visible_fields("financial").is_empty());
        assert!(session.is_category_visible("financial"));
        assert!(session.is_category_visible("not-a-category"));
        assert_eq!(session.help_text("anything"), "");
    }

    #[test]
    fn unparseable_categories_degrade_per_policy() {
        let session = property_session("apartment", 1);

        // field-level stays permissive
        assert!(session.is_visible("totalUnits", Some("garbage")));
        // enumeration stays empty and the section stays hidden
        assert!(session.visible_fields("garbage").is_empty());
        assert!(!session.is_category_visible("garbage"));
    }

    #[test]
    fn capacity_defaults_to_single_when_unspecified() {
        let session = FormSession::new(SessionInput {
            property_type: Some("apartment"),
            ..SessionInput::default()
        });

        assert!(!session.is_visible("totalUnits", Some("specifications")));
    }

    #[test]
    fn sessions_from_equal_inputs_compare_equal() {
        assert_eq!(property_session("apartment", 4), property_session("apartment", 4));
        assert_ne!(property_session("apartment", 4), property_session("apartment", 1));
        assert_ne!(
            property_session("apartment", 4),
            FormSession::new(SessionInput::default())
        );
    }

    #[test]
    fn gating_stubs_are_fixed() {
        let session = FormSession::new(SessionInput::default());

        assert!(session.can_edit());
        assert!(!session.is_disabled());
    }
}
