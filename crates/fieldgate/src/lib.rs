//! ## Crate layout
//! - `manager`: pure, total resolution over the compiled-in rule table.
//! - `session`: the per-form facade binding one entity type and capacity
//!   for the lifetime of a render pass.
//!
//! The `prelude` module mirrors the surface consuming forms use.

pub use fieldgate_schema as schema;

pub mod manager;
pub mod session;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        manager::{PropertyTypeManager, UnitTypeManager},
        session::{FormSession, SessionInput},
    };
    pub use fieldgate_schema::types::{
        Capacity, PropertyCategory, PropertyType, UnitCategory, UnitType,
    };
}
