use alloc::string::String;

use thiserror::Error;

use crate::options::OptionKey;

// -----------------------------------------------------------------------------
// Error

/// Rejected property configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DefinitionError {
    #[error("Property `{name}` is configured as both a collection and a hash")]
    ConflictingShape { name: String },
    #[error("Property `{name}` has an invalid `{option}` option, expected {expected}")]
    InvalidOption {
        name: String,
        option: OptionKey,
        expected: &'static str,
    },
}
