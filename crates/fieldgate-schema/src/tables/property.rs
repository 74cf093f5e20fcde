use crate::{
    node::{PropertyField, PropertyFieldList, PropertyRules},
    types::{
        HelpText,
        PropertyCategory::{Amenities, Core, Documents, Financial, Specifications, Unit},
        PropertyType,
        VisibilityRule::{Always, CapacityAbove},
    },
};

pub(crate) static RULES: &[PropertyRules] = &[
    PropertyRules {
        ty: PropertyType::Apartment,
        fields: PropertyFieldList { fields: APARTMENT },
    },
    PropertyRules {
        ty: PropertyType::Commercial,
        fields: PropertyFieldList { fields: COMMERCIAL },
    },
    PropertyRules {
        ty: PropertyType::Condominium,
        fields: PropertyFieldList {
            fields: CONDOMINIUM,
        },
    },
    PropertyRules {
        ty: PropertyType::House,
        fields: PropertyFieldList { fields: HOUSE },
    },
    PropertyRules {
        ty: PropertyType::Industrial,
        fields: PropertyFieldList { fields: INDUSTRIAL },
    },
];

static APARTMENT: &[PropertyField] = &[
    // core
    PropertyField {
        ident: "name",
        category: Core,
        required: true,
        help: HelpText::Fixed("Display name used across listings and dashboards"),
        visibility: Always,
    },
    PropertyField {
        ident: "addressLine1",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "addressLine2",
        category: Core,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "city",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "state",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "postalCode",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "country",
        category: Core,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "yearBuilt",
        category: Core,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    // specifications
    PropertyField {
        ident: "totalArea",
        category: Specifications,
        required: true,
        help: HelpText::Fixed("Total interior area in square meters"),
        visibility: Always,
    },
    PropertyField {
        ident: "totalUnits",
        category: Specifications,
        required: false,
        help: HelpText::Fixed("Number of rentable units in the building"),
        visibility: CapacityAbove(1),
    },
    PropertyField {
        ident: "bedrooms",
        category: Specifications,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "bathrooms",
        category: Specifications,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "floors",
        category: Specifications,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "maxOccupants",
        category: Specifications,
        required: false,
        help: HelpText::PerCapacity {
            single: "Maximum occupants for the dwelling",
            multi: "Maximum occupants per individual unit",
        },
        visibility: Always,
    },
    // financial
    PropertyField {
        ident: "monthlyRent",
        category: Financial,
        required: true,
        help: HelpText::PerCapacity {
            single: "Asking rent for the dwelling",
            multi: "Default asking rent, can be overridden per unit",
        },
        visibility: Always,
    },
    PropertyField {
        ident: "securityDeposit",
        category: Financial,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "marketValue",
        category: Financial,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "propertyTax",
        category: Financial,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "insurancePremium",
        category: Financial,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    // amenities
    PropertyField {
        ident: "elevator",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "gym",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "pool",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "laundry",
        category: Amenities,
        required: false,
        help: HelpText::Fixed("Shared laundry room on the premises"),
        visibility: Always,
    },
    PropertyField {
        ident: "airConditioning",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "heating",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "furnished",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "petFriendly",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "balcony",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    // documents
    PropertyField {
        ident: "deed",
        category: Documents,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "insuranceCertificate",
        category: Documents,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "inspectionReport",
        category: Documents,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "floorPlan",
        category: Documents,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    // unit defaults, only meaningful for multi-unit buildings
    PropertyField {
        ident: "unitPrefix",
        category: Unit,
        required: false,
        help: HelpText::Fixed("Prefix used when generating unit labels, e.g. 'A-'"),
        visibility: CapacityAbove(1),
    },
    PropertyField {
        ident: "defaultUnitType",
        category: Unit,
        required: false,
        help: HelpText::Fixed("Unit type preselected when adding new units"),
        visibility: CapacityAbove(1),
    },
];

static HOUSE: &[PropertyField] = &[
    // core
    PropertyField {
        ident: "name",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "addressLine1",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "addressLine2",
        category: Core,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "city",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "state",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "postalCode",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "country",
        category: Core,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "yearBuilt",
        category: Core,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    // specifications
    PropertyField {
        ident: "totalArea",
        category: Specifications,
        required: true,
        help: HelpText::Fixed("Total interior area in square meters"),
        visibility: Always,
    },
    PropertyField {
        ident: "bedrooms",
        category: Specifications,
        required: true,
        help: HelpText::Fixed("Bedroom count drives comparable pricing"),
        visibility: Always,
    },
    PropertyField {
        ident: "bathrooms",
        category: Specifications,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "floors",
        category: Specifications,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "lotSize",
        category: Specifications,
        required: false,
        help: HelpText::Fixed("Lot size in square meters, including structures"),
        visibility: Always,
    },
    PropertyField {
        ident: "parkingSpaces",
        category: Specifications,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "maxOccupants",
        category: Specifications,
        required: false,
        help: HelpText::Fixed("Maximum occupants for the dwelling"),
        visibility: Always,
    },
    // financial
    PropertyField {
        ident: "monthlyRent",
        category: Financial,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "securityDeposit",
        category: Financial,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "purchasePrice",
        category: Financial,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "marketValue",
        category: Financial,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "propertyTax",
        category: Financial,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "insurancePremium",
        category: Financial,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    // amenities
    PropertyField {
        ident: "garden",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "garage",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "airConditioning",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "heating",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "furnished",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "petFriendly",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "pool",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    // documents
    PropertyField {
        ident: "deed",
        category: Documents,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "insuranceCertificate",
        category: Documents,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "inspectionReport",
        category: Documents,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
];

static CONDOMINIUM: &[PropertyField] = &[
    // core
    PropertyField {
        ident: "name",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "addressLine1",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "addressLine2",
        category: Core,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "city",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "state",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "postalCode",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "yearBuilt",
        category: Core,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    // specifications
    PropertyField {
        ident: "totalArea",
        category: Specifications,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "bedrooms",
        category: Specifications,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "bathrooms",
        category: Specifications,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "floorNumber",
        category: Specifications,
        required: false,
        help: HelpText::Fixed("Floor the condominium sits on"),
        visibility: Always,
    },
    PropertyField {
        ident: "maxOccupants",
        category: Specifications,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    // financial
    PropertyField {
        ident: "monthlyRent",
        category: Financial,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "securityDeposit",
        category: Financial,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "hoaFee",
        category: Financial,
        required: true,
        help: HelpText::Fixed("Monthly homeowners association fee"),
        visibility: Always,
    },
    PropertyField {
        ident: "marketValue",
        category: Financial,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "propertyTax",
        category: Financial,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    // amenities
    PropertyField {
        ident: "elevator",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "gym",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "pool",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "concierge",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "balcony",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "furnished",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    // documents
    PropertyField {
        ident: "deed",
        category: Documents,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "hoaBylaws",
        category: Documents,
        required: false,
        help: HelpText::Fixed("Association bylaws shared with tenants on request"),
        visibility: Always,
    },
    PropertyField {
        ident: "insuranceCertificate",
        category: Documents,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
];

static COMMERCIAL: &[PropertyField] = &[
    // core
    PropertyField {
        ident: "name",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "addressLine1",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "addressLine2",
        category: Core,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "city",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "state",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "postalCode",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "yearBuilt",
        category: Core,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    // specifications, deliberately no residential fields
    PropertyField {
        ident: "totalArea",
        category: Specifications,
        required: true,
        help: HelpText::Fixed("Gross leasable area in square meters"),
        visibility: Always,
    },
    PropertyField {
        ident: "totalUnits",
        category: Specifications,
        required: false,
        help: HelpText::Fixed("Number of leasable suites"),
        visibility: CapacityAbove(1),
    },
    PropertyField {
        ident: "floors",
        category: Specifications,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "parkingSpaces",
        category: Specifications,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "zoningClass",
        category: Specifications,
        required: true,
        help: HelpText::Fixed("Municipal zoning classification, e.g. C-2"),
        visibility: Always,
    },
    // financial
    PropertyField {
        ident: "monthlyRent",
        category: Financial,
        required: true,
        help: HelpText::PerCapacity {
            single: "Asking rent for the premises",
            multi: "Default asking rent, can be overridden per suite",
        },
        visibility: Always,
    },
    PropertyField {
        ident: "securityDeposit",
        category: Financial,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "camCharges",
        category: Financial,
        required: false,
        help: HelpText::Fixed("Common area maintenance, billed monthly"),
        visibility: Always,
    },
    PropertyField {
        ident: "propertyTax",
        category: Financial,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "insurancePremium",
        category: Financial,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    // amenities
    PropertyField {
        ident: "elevator",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "loadingDock",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "securitySystem",
        category: Amenities,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "signage",
        category: Amenities,
        required: false,
        help: HelpText::Fixed("Street-facing signage rights included in the lease"),
        visibility: Always,
    },
    // documents
    PropertyField {
        ident: "deed",
        category: Documents,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "occupancyCertificate",
        category: Documents,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "insuranceCertificate",
        category: Documents,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "floorPlan",
        category: Documents,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    // unit defaults
    PropertyField {
        ident: "unitPrefix",
        category: Unit,
        required: false,
        help: HelpText::Fixed("Prefix used when generating suite labels"),
        visibility: CapacityAbove(1),
    },
    PropertyField {
        ident: "defaultUnitType",
        category: Unit,
        required: false,
        help: HelpText::None,
        visibility: CapacityAbove(1),
    },
];

// Industrial declares no amenities at all; the amenities tab must not
// render for this type.
static INDUSTRIAL: &[PropertyField] = &[
    // core
    PropertyField {
        ident: "name",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "addressLine1",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "city",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "state",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "postalCode",
        category: Core,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "yearBuilt",
        category: Core,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    // specifications
    PropertyField {
        ident: "totalArea",
        category: Specifications,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "ceilingHeight",
        category: Specifications,
        required: false,
        help: HelpText::Fixed("Clear ceiling height in meters"),
        visibility: Always,
    },
    PropertyField {
        ident: "loadingDocks",
        category: Specifications,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "powerCapacity",
        category: Specifications,
        required: false,
        help: HelpText::Fixed("Available electrical capacity in kVA"),
        visibility: Always,
    },
    PropertyField {
        ident: "railAccess",
        category: Specifications,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    // financial
    PropertyField {
        ident: "monthlyRent",
        category: Financial,
        required: true,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "propertyTax",
        category: Financial,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "insurancePremium",
        category: Financial,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    // documents
    PropertyField {
        ident: "deed",
        category: Documents,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
    PropertyField {
        ident: "environmentalPermit",
        category: Documents,
        required: true,
        help: HelpText::Fixed("Required before any lease can start"),
        visibility: Always,
    },
    PropertyField {
        ident: "insuranceCertificate",
        category: Documents,
        required: false,
        help: HelpText::None,
        visibility: Always,
    },
];
