//! The dynamic [`Value`] and its conversions.

// -----------------------------------------------------------------------------
// Modules

mod convert;
mod kind;

// -----------------------------------------------------------------------------
// Exports

pub use convert::{FromValue, ToValue};
pub use kind::{KindError, ValueKind};

use alloc::string::String;
use alloc::vec::Vec;

// -----------------------------------------------------------------------------
// Value

/// A dynamically typed property value.
///
/// [`Value::Nil`] is *absence*. Note that `Bool(false)` is a regular,
/// present value and is never treated as missing.
///
/// Maps keep their entries in insertion order.
///
/// # Examples
///
/// ```
/// use rp_reflect::{Value, ValueKind};
///
/// let value = Value::from("Insider");
/// assert_eq!(value.kind(), ValueKind::Str);
/// assert_eq!(value.as_str(), Some("Insider"));
///
/// assert!(Value::Nil.is_nil());
/// assert!(!Value::Bool(false).is_nil());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(Vec<(String, Value)>),
}

impl Value {
    /// An empty list, the implicit default of collection properties.
    #[inline]
    pub const fn empty_list() -> Self {
        Self::List(Vec::new())
    }

    /// Returns the [`ValueKind`] of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Nil => ValueKind::Nil,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map,
        }
    }

    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns `false` only for [`Value::Nil`] and `Bool(false)`.
    #[inline]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Looks up `key` in a map value.
    ///
    /// Returns `None` for non-map values and missing keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// From

macro_rules! impl_from_for_value {
    ($($ty:ty => |$v:ident| $expr:expr),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from($v: $ty) -> Self {
                    $expr
                }
            }
        )*
    };
}

impl_from_for_value! {
    bool => |v| Value::Bool(v),
    i32 => |v| Value::Int(v as i64),
    i64 => |v| Value::Int(v),
    u32 => |v| Value::Int(v as i64),
    f64 => |v| Value::Float(v),
    String => |v| Value::Str(v),
    &str => |v| Value::Str(String::from(v)),
    Vec<Value> => |v| Value::List(v),
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Nil,
        }
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::List(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use super::{Value, ValueKind};

    #[test]
    fn false_is_present_but_falsy() {
        let value = Value::Bool(false);
        assert!(!value.is_nil());
        assert!(!value.is_truthy());
        assert!(Value::Int(0).is_truthy());
        assert!(Value::empty_list().is_truthy());
    }

    #[test]
    fn option_converts_to_nil() {
        assert_eq!(Value::from(None::<i64>), Value::Nil);
        assert_eq!(Value::from(Some("Fatal Flu")), Value::Str(String::from("Fatal Flu")));
    }

    #[test]
    fn map_lookup() {
        let map: Value = vec![
            (String::from("title"), Value::from("Disconnect")),
            (String::from("track"), Value::from(2)),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.kind(), ValueKind::Map);
        assert_eq!(map.get("track"), Some(&Value::Int(2)));
        assert_eq!(map.get("length"), None);
        assert_eq!(Value::from(1).get("track"), None);
    }
}
