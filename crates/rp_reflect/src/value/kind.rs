use alloc::string::String;
use core::{error, fmt};

use crate::access::AccessError;

// -----------------------------------------------------------------------------
// ValueKind

/// The kind of a [`Value`](crate::Value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Nil,
    Bool,
    Int,
    Float,
    Str,
    List,
    Map,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.pad("nil"),
            Self::Bool => f.pad("bool"),
            Self::Int => f.pad("int"),
            Self::Float => f.pad("float"),
            Self::Str => f.pad("str"),
            Self::List => f.pad("list"),
            Self::Map => f.pad("map"),
        }
    }
}

// -----------------------------------------------------------------------------
// KindError

/// Error returned when a [`Value`](crate::Value) cannot be converted
/// into the requested field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindError {
    /// The value has the wrong kind.
    Mismatch {
        expected: ValueKind,
        received: ValueKind,
    },
    /// The value has the right kind but does not fit the field type.
    OutOfRange {
        type_name: &'static str,
        value: i64,
    },
}

impl KindError {
    #[inline]
    pub const fn new(expected: ValueKind, received: ValueKind) -> Self {
        Self::Mismatch { expected, received }
    }

    #[inline]
    pub const fn out_of_range(type_name: &'static str, value: i64) -> Self {
        Self::OutOfRange { type_name, value }
    }

    /// Attaches the accessor name the conversion happened for.
    pub fn at(self, accessor: &str) -> AccessError {
        let accessor = String::from(accessor);
        match self {
            Self::Mismatch { expected, received } => AccessError::MismatchedKinds {
                accessor,
                expected,
                received,
            },
            Self::OutOfRange { type_name, value } => AccessError::OutOfRange {
                accessor,
                type_name,
                value,
            },
        }
    }
}

impl fmt::Display for KindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch { expected, received } => {
                write!(f, "value kind mismatch: expected {expected}, received {received}")
            }
            Self::OutOfRange { type_name, value } => {
                write!(f, "value {value} is out of range for `{type_name}`")
            }
        }
    }
}

impl error::Error for KindError {}
