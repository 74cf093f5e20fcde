pub mod build;
pub mod error;
pub mod node;
pub mod tables;
pub mod types;
pub mod validate;
pub mod visit;

/// Maximum length for form field identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

/// Maximum length for a single help-text string.
pub const MAX_HELP_TEXT_LEN: usize = 256;

use crate::build::BuildError;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        types::{
            Capacity, HelpText, PropertyCategory, PropertyType, UnitCategory, UnitType,
            VisibilityRule,
        },
        visit::{ValidateNode, VisitableNode, Visitor},
    };
    pub use serde::Serialize;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    BuildError(#[from] BuildError),
}
