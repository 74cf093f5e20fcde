use crate::{
    node::{UnitField, UnitFieldList, UnitRules},
    types::{
        UnitCategory::{Amenities, Fees, Specifications, Utilities},
        UnitType,
    },
};

pub(crate) static RULES: &[UnitRules] = &[
    UnitRules {
        ty: UnitType::Office,
        fields: UnitFieldList { fields: OFFICE },
    },
    UnitRules {
        ty: UnitType::Penthouse,
        fields: UnitFieldList { fields: PENTHOUSE },
    },
    UnitRules {
        ty: UnitType::Standard,
        fields: UnitFieldList { fields: STANDARD },
    },
    UnitRules {
        ty: UnitType::Storage,
        fields: UnitFieldList { fields: STORAGE },
    },
    UnitRules {
        ty: UnitType::Studio,
        fields: UnitFieldList { fields: STUDIO },
    },
];

static STUDIO: &[UnitField] = &[
    // specifications
    UnitField {
        ident: "floorArea",
        category: Specifications,
        required: true,
        help: "Interior area in square meters",
    },
    UnitField {
        ident: "floorNumber",
        category: Specifications,
        required: false,
        help: "",
    },
    UnitField {
        ident: "maxOccupants",
        category: Specifications,
        required: false,
        help: "",
    },
    // amenities
    UnitField {
        ident: "furnished",
        category: Amenities,
        required: false,
        help: "",
    },
    UnitField {
        ident: "airConditioning",
        category: Amenities,
        required: false,
        help: "",
    },
    UnitField {
        ident: "balcony",
        category: Amenities,
        required: false,
        help: "",
    },
    // utilities
    UnitField {
        ident: "electricity",
        category: Utilities,
        required: true,
        help: "",
    },
    UnitField {
        ident: "water",
        category: Utilities,
        required: true,
        help: "",
    },
    UnitField {
        ident: "internet",
        category: Utilities,
        required: false,
        help: "Included in rent unless metered separately",
    },
    // fees
    UnitField {
        ident: "baseRent",
        category: Fees,
        required: true,
        help: "",
    },
    UnitField {
        ident: "securityDeposit",
        category: Fees,
        required: true,
        help: "",
    },
    UnitField {
        ident: "cleaningFee",
        category: Fees,
        required: false,
        help: "One-time fee charged at move-out",
    },
];

static STANDARD: &[UnitField] = &[
    // specifications
    UnitField {
        ident: "floorArea",
        category: Specifications,
        required: true,
        help: "",
    },
    UnitField {
        ident: "bedrooms",
        category: Specifications,
        required: true,
        help: "",
    },
    UnitField {
        ident: "bathrooms",
        category: Specifications,
        required: true,
        help: "",
    },
    UnitField {
        ident: "floorNumber",
        category: Specifications,
        required: false,
        help: "",
    },
    // amenities
    UnitField {
        ident: "furnished",
        category: Amenities,
        required: false,
        help: "",
    },
    UnitField {
        ident: "airConditioning",
        category: Amenities,
        required: false,
        help: "",
    },
    UnitField {
        ident: "balcony",
        category: Amenities,
        required: false,
        help: "",
    },
    UnitField {
        ident: "storageRoom",
        category: Amenities,
        required: false,
        help: "Dedicated storage space outside the unit",
    },
    // utilities
    UnitField {
        ident: "electricity",
        category: Utilities,
        required: true,
        help: "",
    },
    UnitField {
        ident: "water",
        category: Utilities,
        required: true,
        help: "",
    },
    UnitField {
        ident: "gas",
        category: Utilities,
        required: false,
        help: "",
    },
    UnitField {
        ident: "internet",
        category: Utilities,
        required: false,
        help: "",
    },
    // fees
    UnitField {
        ident: "baseRent",
        category: Fees,
        required: true,
        help: "",
    },
    UnitField {
        ident: "securityDeposit",
        category: Fees,
        required: true,
        help: "",
    },
    UnitField {
        ident: "petFee",
        category: Fees,
        required: false,
        help: "Monthly surcharge per registered pet",
    },
];

static PENTHOUSE: &[UnitField] = &[
    // specifications
    UnitField {
        ident: "floorArea",
        category: Specifications,
        required: true,
        help: "",
    },
    UnitField {
        ident: "bedrooms",
        category: Specifications,
        required: true,
        help: "",
    },
    UnitField {
        ident: "bathrooms",
        category: Specifications,
        required: true,
        help: "",
    },
    UnitField {
        ident: "terraceArea",
        category: Specifications,
        required: false,
        help: "Private terrace area in square meters",
    },
    // amenities
    UnitField {
        ident: "furnished",
        category: Amenities,
        required: false,
        help: "",
    },
    UnitField {
        ident: "privateElevator",
        category: Amenities,
        required: false,
        help: "",
    },
    UnitField {
        ident: "terrace",
        category: Amenities,
        required: false,
        help: "",
    },
    UnitField {
        ident: "airConditioning",
        category: Amenities,
        required: false,
        help: "",
    },
    // utilities
    UnitField {
        ident: "electricity",
        category: Utilities,
        required: true,
        help: "",
    },
    UnitField {
        ident: "water",
        category: Utilities,
        required: true,
        help: "",
    },
    UnitField {
        ident: "gas",
        category: Utilities,
        required: false,
        help: "",
    },
    UnitField {
        ident: "internet",
        category: Utilities,
        required: false,
        help: "",
    },
    // fees
    UnitField {
        ident: "baseRent",
        category: Fees,
        required: true,
        help: "",
    },
    UnitField {
        ident: "securityDeposit",
        category: Fees,
        required: true,
        help: "",
    },
    UnitField {
        ident: "premiumServiceFee",
        category: Fees,
        required: false,
        help: "Covers concierge and priority maintenance",
    },
];

static OFFICE: &[UnitField] = &[
    // specifications
    UnitField {
        ident: "floorArea",
        category: Specifications,
        required: true,
        help: "",
    },
    UnitField {
        ident: "workstations",
        category: Specifications,
        required: false,
        help: "Workstation count the fit-out supports",
    },
    UnitField {
        ident: "conferenceRooms",
        category: Specifications,
        required: false,
        help: "",
    },
    // amenities
    UnitField {
        ident: "reception",
        category: Amenities,
        required: false,
        help: "",
    },
    UnitField {
        ident: "kitchenette",
        category: Amenities,
        required: false,
        help: "",
    },
    UnitField {
        ident: "serverRoom",
        category: Amenities,
        required: false,
        help: "",
    },
    // utilities
    UnitField {
        ident: "electricity",
        category: Utilities,
        required: true,
        help: "",
    },
    UnitField {
        ident: "internet",
        category: Utilities,
        required: true,
        help: "",
    },
    UnitField {
        ident: "hvac",
        category: Utilities,
        required: false,
        help: "",
    },
    // fees
    UnitField {
        ident: "baseRent",
        category: Fees,
        required: true,
        help: "",
    },
    UnitField {
        ident: "serviceCharge",
        category: Fees,
        required: true,
        help: "Building services, billed with rent",
    },
];

static STORAGE: &[UnitField] = &[
    // specifications
    UnitField {
        ident: "floorArea",
        category: Specifications,
        required: true,
        help: "",
    },
    UnitField {
        ident: "ceilingHeight",
        category: Specifications,
        required: false,
        help: "",
    },
    // amenities
    UnitField {
        ident: "climateControl",
        category: Amenities,
        required: false,
        help: "",
    },
    // utilities
    UnitField {
        ident: "electricity",
        category: Utilities,
        required: false,
        help: "",
    },
    // fees
    UnitField {
        ident: "baseRent",
        category: Fees,
        required: true,
        help: "",
    },
];
