use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// PropertyType
///
/// Property classification as it arrives from the client. Values the
/// table does not know resolve to `Other` rather than failing, since
/// type strings may originate from API responses newer than this build.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum PropertyType {
    #[display("apartment")]
    Apartment,
    #[display("commercial")]
    Commercial,
    #[display("condominium")]
    Condominium,
    #[display("house")]
    House,
    #[display("industrial")]
    Industrial,
    #[display("other")]
    Other,
}

impl PropertyType {
    /// Total conversion from the wire string.
    #[must_use]
    pub fn resolve(s: &str) -> Self {
        match s {
            "apartment" => Self::Apartment,
            "commercial" => Self::Commercial,
            "condominium" => Self::Condominium,
            "house" => Self::House,
            "industrial" => Self::Industrial,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Other)
    }
}

impl From<&str> for PropertyType {
    fn from(s: &str) -> Self {
        Self::resolve(s)
    }
}

///
/// UnitType
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum UnitType {
    #[display("office")]
    Office,
    #[display("other")]
    Other,
    #[display("penthouse")]
    Penthouse,
    #[display("standard")]
    Standard,
    #[display("storage")]
    Storage,
    #[display("studio")]
    Studio,
}

impl UnitType {
    /// Total conversion from the wire string.
    #[must_use]
    pub fn resolve(s: &str) -> Self {
        match s {
            "office" => Self::Office,
            "penthouse" => Self::Penthouse,
            "standard" => Self::Standard,
            "storage" => Self::Storage,
            "studio" => Self::Studio,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Other)
    }
}

impl From<&str> for UnitType {
    fn from(s: &str) -> Self {
        Self::resolve(s)
    }
}

///
/// PropertyCategory
///
/// Form section tags for property fields. Parsing is strict; callers
/// treat an unknown category string as "matches nothing".
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum PropertyCategory {
    #[display("amenities")]
    Amenities,
    #[display("core")]
    Core,
    #[display("documents")]
    Documents,
    #[display("financial")]
    Financial,
    #[display("specifications")]
    Specifications,
    #[display("unit")]
    Unit,
}

///
/// UnitCategory
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum UnitCategory {
    #[display("amenities")]
    Amenities,
    #[display("fees")]
    Fees,
    #[display("specifications")]
    Specifications,
    #[display("utilities")]
    Utilities,
}

///
/// Capacity
///
/// Maximum allowed units for a property, clamped to at least one.
/// Fixed for the lifetime of a form session.
///

#[derive(Clone, Copy, Debug, Display, Eq, Ord, PartialEq, PartialOrd)]
pub struct Capacity(u32);

impl Capacity {
    pub const SINGLE: Self = Self(1);

    #[must_use]
    pub const fn new(max_allowed_units: u32) -> Self {
        if max_allowed_units == 0 {
            Self::SINGLE
        } else {
            Self(max_allowed_units)
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_multi_unit(self) -> bool {
        self.0 > 1
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::SINGLE
    }
}

impl From<u32> for Capacity {
    fn from(max_allowed_units: u32) -> Self {
        Self::new(max_allowed_units)
    }
}

///
/// VisibilityRule
///
/// Predicate attached to each property field, evaluated uniformly by
/// the managers. Unit fields have no capacity dimension and carry no
/// rule; presence in the table is their visibility.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum VisibilityRule {
    Always,

    /// Visible only when capacity is strictly above the threshold.
    CapacityAbove(u32),
}

impl VisibilityRule {
    #[must_use]
    pub const fn matches(self, capacity: Capacity) -> bool {
        match self {
            Self::Always => true,
            Self::CapacityAbove(threshold) => capacity.get() > threshold,
        }
    }
}

///
/// HelpText
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum HelpText {
    None,
    Fixed(&'static str),

    /// Different guidance for single-unit and multi-unit properties.
    PerCapacity {
        single: &'static str,
        multi: &'static str,
    },
}

impl HelpText {
    #[must_use]
    pub const fn resolve(self, capacity: Capacity) -> &'static str {
        match self {
            Self::None => "",
            Self::Fixed(text) => text,
            Self::PerCapacity { single, multi } => {
                if capacity.is_multi_unit() {
                    multi
                } else {
                    single
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Capacity, HelpText, PropertyCategory, PropertyType, UnitType, VisibilityRule};

    #[test]
    fn property_type_resolve_is_total() {
        assert_eq!(PropertyType::resolve("house"), PropertyType::House);
        assert_eq!(PropertyType::resolve("apartment"), PropertyType::Apartment);
        assert_eq!(PropertyType::resolve("castle"), PropertyType::Other);
        assert_eq!(PropertyType::resolve(""), PropertyType::Other);
    }

    #[test]
    fn unit_type_resolve_is_total() {
        assert_eq!(UnitType::resolve("studio"), UnitType::Studio);
        assert_eq!(UnitType::resolve("warehouse-bay"), UnitType::Other);
    }

    #[test]
    fn type_display_round_trips_known_values() {
        for ty in [
            PropertyType::Apartment,
            PropertyType::Commercial,
            PropertyType::Condominium,
            PropertyType::House,
            PropertyType::Industrial,
        ] {
            assert_eq!(PropertyType::resolve(&ty.to_string()), ty);
        }
    }

    #[test]
    fn category_parse_rejects_unknown_strings() {
        assert_eq!(
            "specifications".parse::<PropertyCategory>().ok(),
            Some(PropertyCategory::Specifications)
        );
        assert!("rooftop".parse::<PropertyCategory>().is_err());
        assert!("".parse::<PropertyCategory>().is_err());
    }

    #[test]
    fn capacity_clamps_to_one() {
        assert_eq!(Capacity::new(0), Capacity::SINGLE);
        assert_eq!(Capacity::new(1).get(), 1);
        assert_eq!(Capacity::new(40).get(), 40);
        assert!(!Capacity::new(1).is_multi_unit());
        assert!(Capacity::new(2).is_multi_unit());
    }

    #[test]
    fn visibility_rule_flips_strictly_above_threshold() {
        let rule = VisibilityRule::CapacityAbove(1);

        assert!(!rule.matches(Capacity::new(1)));
        assert!(rule.matches(Capacity::new(2)));
        assert!(rule.matches(Capacity::new(500)));
        assert!(VisibilityRule::Always.matches(Capacity::SINGLE));
    }

    #[test]
    fn help_text_resolves_capacity_variant() {
        let help = HelpText::PerCapacity {
            single: "one dwelling",
            multi: "per unit",
        };

        assert_eq!(help.resolve(Capacity::new(1)), "one dwelling");
        assert_eq!(help.resolve(Capacity::new(2)), "per unit");
        assert_eq!(HelpText::None.resolve(Capacity::SINGLE), "");
        assert_eq!(HelpText::Fixed("hint").resolve(Capacity::SINGLE), "hint");
    }
}
