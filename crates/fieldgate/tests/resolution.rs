//! End-to-end resolution scenarios and property-based invariants.

use fieldgate::prelude::*;
use proptest::prelude::*;

fn property_manager() -> PropertyTypeManager {
    PropertyTypeManager::builtin()
}

fn unit_manager() -> UnitTypeManager {
    UnitTypeManager::builtin()
}

#[test]
fn bedrooms_requirement_differs_by_property_type() {
    let mgr = property_manager();

    assert!(mgr.is_field_required(PropertyType::House, "bedrooms"));
    assert!(!mgr.is_field_required(PropertyType::Commercial, "bedrooms"));
}

#[test]
fn apartment_specifications_at_capacity_one_and_five() {
    let mgr = property_manager();

    assert_eq!(
        mgr.visible_fields(
            PropertyType::Apartment,
            PropertyCategory::Specifications,
            Capacity::new(1)
        ),
        ["totalArea", "bedrooms", "bathrooms", "floors", "maxOccupants"]
    );
    assert_eq!(
        mgr.visible_fields(
            PropertyType::Apartment,
            PropertyCategory::Specifications,
            Capacity::new(5)
        ),
        [
            "totalArea",
            "totalUnits",
            "bedrooms",
            "bathrooms",
            "floors",
            "maxOccupants"
        ]
    );
}

#[test]
fn industrial_amenities_section_stays_hidden() {
    let mgr = property_manager();

    assert!(!mgr.is_category_visible(
        PropertyType::Industrial,
        PropertyCategory::Amenities,
        Capacity::new(1)
    ));
}

#[test]
fn nonexistent_type_is_field_permissive_but_enumerates_nothing() {
    let mgr = property_manager();
    let ty = PropertyType::resolve("nonexistent-type");

    assert!(mgr.is_field_visible(ty, "anyField", Capacity::new(1), None));
    assert!(
        mgr.visible_fields(ty, PropertyCategory::Core, Capacity::new(1))
            .is_empty()
    );
}

#[test]
fn form_session_round_trip_for_a_multi_unit_apartment() {
    let session = FormSession::new(SessionInput {
        property_type: Some("apartment"),
        max_allowed_units: Some(12),
        ..SessionInput::default()
    });

    assert!(session.is_visible("totalUnits", Some("specifications")));
    assert!(session.is_category_visible("unit"));
    assert_eq!(
        session.visible_fields("unit"),
        ["unitPrefix", "defaultUnitType"]
    );
    assert_eq!(
        session.help_text("maxOccupants"),
        "Maximum occupants per individual unit"
    );
}

//
// strategies
//

const KNOWN_PROPERTY_TYPES: [&str; 5] = [
    "apartment",
    "commercial",
    "condominium",
    "house",
    "industrial",
];

fn arb_known_property_type() -> impl Strategy<Value = PropertyType> {
    prop_oneof![
        Just(PropertyType::Apartment),
        Just(PropertyType::Commercial),
        Just(PropertyType::Condominium),
        Just(PropertyType::House),
        Just(PropertyType::Industrial),
    ]
}

fn arb_property_category() -> impl Strategy<Value = PropertyCategory> {
    prop_oneof![
        Just(PropertyCategory::Amenities),
        Just(PropertyCategory::Core),
        Just(PropertyCategory::Documents),
        Just(PropertyCategory::Financial),
        Just(PropertyCategory::Specifications),
        Just(PropertyCategory::Unit),
    ]
}

fn arb_unit_category() -> impl Strategy<Value = UnitCategory> {
    prop_oneof![
        Just(UnitCategory::Amenities),
        Just(UnitCategory::Fees),
        Just(UnitCategory::Specifications),
        Just(UnitCategory::Utilities),
    ]
}

fn arb_capacity() -> impl Strategy<Value = Capacity> {
    (0u32..1_000).prop_map(Capacity::new)
}

fn arb_field_name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{0,16}"
}

proptest! {
    #[test]
    fn resolution_is_deterministic(
        ty in arb_known_property_type(),
        field in arb_field_name(),
        category in arb_property_category(),
        capacity in arb_capacity(),
    ) {
        let mgr = property_manager();

        prop_assert_eq!(
            mgr.is_field_visible(ty, &field, capacity, Some(category)),
            mgr.is_field_visible(ty, &field, capacity, Some(category))
        );
        prop_assert_eq!(
            mgr.is_field_required(ty, &field),
            mgr.is_field_required(ty, &field)
        );
        prop_assert_eq!(
            mgr.visible_fields(ty, category, capacity),
            mgr.visible_fields(ty, category, capacity)
        );
        prop_assert_eq!(
            mgr.help_text(ty, &field, capacity),
            mgr.help_text(ty, &field, capacity)
        );
    }

    #[test]
    fn unrecognized_type_strings_never_restrict(
        raw in "[a-z-]{1,24}",
        field in arb_field_name(),
        category in arb_property_category(),
        capacity in arb_capacity(),
    ) {
        prop_assume!(!KNOWN_PROPERTY_TYPES.contains(&raw.as_str()));

        let mgr = property_manager();
        let ty = PropertyType::resolve(&raw);

        prop_assert!(mgr.is_field_visible(ty, &field, capacity, None));
        prop_assert!(!mgr.is_field_required(ty, &field));
        prop_assert!(mgr.visible_fields(ty, category, capacity).is_empty());
        prop_assert!(!mgr.is_category_visible(ty, category, capacity));
    }

    #[test]
    fn enumerated_fields_report_visible_under_the_same_category(
        ty in arb_known_property_type(),
        category in arb_property_category(),
        capacity in arb_capacity(),
    ) {
        let mgr = property_manager();

        for field in mgr.visible_fields(ty, category, capacity) {
            prop_assert!(mgr.is_field_visible(ty, field, capacity, Some(category)));
        }
    }

    #[test]
    fn category_visibility_agrees_with_enumeration(
        ty in arb_known_property_type(),
        category in arb_property_category(),
        capacity in arb_capacity(),
    ) {
        let mgr = property_manager();

        prop_assert_eq!(
            mgr.is_category_visible(ty, category, capacity),
            !mgr.visible_fields(ty, category, capacity).is_empty()
        );
    }

    #[test]
    fn capacity_gated_fields_flip_exactly_at_the_boundary(capacity in arb_capacity()) {
        let mgr = property_manager();
        let visible = mgr.is_field_visible(
            PropertyType::Apartment,
            "totalUnits",
            capacity,
            Some(PropertyCategory::Specifications),
        );

        prop_assert_eq!(visible, capacity.get() > 1);
    }

    #[test]
    fn unit_enumeration_matches_unit_category_visibility(
        raw in "[a-z]{1,16}",
        category in arb_unit_category(),
    ) {
        let mgr = unit_manager();
        let ty = UnitType::resolve(&raw);

        prop_assert_eq!(
            mgr.is_category_visible(ty, category),
            !mgr.visible_fields(ty, category).is_empty()
        );
    }
}
