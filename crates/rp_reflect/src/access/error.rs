use alloc::boxed::Box;
use alloc::string::String;
use core::{error, fmt};

use crate::value::{KindError, ValueKind};

/// A enumeration of all error outcomes that might happen when reading
/// from or writing to a [`Represented`](crate::Represented) object.
#[derive(Debug)]
pub enum AccessError {
    /// The object has no getter with this name.
    UnknownGetter {
        type_path: &'static str,
        getter: String,
    },
    /// The object has no setter with this name.
    UnknownSetter {
        type_path: &'static str,
        setter: String,
    },
    /// The value handed to a setter has the wrong kind.
    MismatchedKinds {
        accessor: String,
        expected: ValueKind,
        received: ValueKind,
    },
    /// The value handed to a setter does not fit the field type.
    OutOfRange {
        accessor: String,
        type_name: &'static str,
        value: i64,
    },
    /// Tried to write through a shared borrow of the object.
    ReadOnly {
        type_path: &'static str,
        setter: String,
    },
    /// Failure raised by caller-supplied accessor logic.
    Custom(Box<dyn error::Error + Send + Sync>),
}

impl AccessError {
    #[cold]
    pub fn unknown_getter(type_path: &'static str, getter: &str) -> Self {
        Self::UnknownGetter {
            type_path,
            getter: String::from(getter),
        }
    }

    #[cold]
    pub fn unknown_setter(type_path: &'static str, setter: &str) -> Self {
        Self::UnknownSetter {
            type_path,
            setter: String::from(setter),
        }
    }

    /// Wraps an arbitrary error from custom accessor code.
    #[inline]
    pub fn custom(error: impl Into<Box<dyn error::Error + Send + Sync>>) -> Self {
        Self::Custom(error.into())
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownGetter { type_path, getter } => {
                write!(f, "type `{type_path}` has no getter `{getter}`")
            }
            Self::UnknownSetter { type_path, setter } => {
                write!(f, "type `{type_path}` has no setter `{setter}`")
            }
            Self::MismatchedKinds {
                accessor,
                expected,
                received,
            } => {
                write!(
                    f,
                    "attempted to assign {received} through `{accessor}`, expected {expected}"
                )
            }
            Self::OutOfRange {
                accessor,
                type_name,
                value,
            } => {
                write!(
                    f,
                    "attempted to assign {value} through `{accessor}`, out of range for `{type_name}`"
                )
            }
            Self::ReadOnly { type_path, setter } => {
                write!(
                    f,
                    "cannot call `{setter}` on a shared borrow of `{type_path}`"
                )
            }
            Self::Custom(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl error::Error for AccessError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Custom(error) => error.source(),
            _ => None,
        }
    }
}

impl From<KindError> for AccessError {
    /// Prefer [`KindError::at`], which keeps the accessor name.
    #[inline]
    fn from(value: KindError) -> Self {
        value.at("")
    }
}
