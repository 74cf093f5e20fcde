mod property;
mod unit;

pub use property::PropertyTypeManager;
pub use unit::UnitTypeManager;
