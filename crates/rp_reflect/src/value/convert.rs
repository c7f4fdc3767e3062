use alloc::string::String;
use alloc::vec::Vec;

use super::{KindError, Value, ValueKind};

// -----------------------------------------------------------------------------
// ToValue / FromValue

/// Reads a field into a [`Value`].
///
/// Used by [`impl_represented!`](crate::impl_represented) for getters.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

/// Builds a field from a [`Value`].
///
/// Used by [`impl_represented!`](crate::impl_represented) for setters.
///
/// # Examples
///
/// ```
/// use rp_reflect::{FromValue, KindError, Value, ValueKind};
///
/// assert_eq!(Option::<i64>::from_value(Value::Nil), Ok(None));
/// assert_eq!(i64::from_value(Value::Int(9)), Ok(9));
///
/// let err = bool::from_value(Value::from("yes")).unwrap_err();
/// assert_eq!(err, KindError::new(ValueKind::Bool, ValueKind::Str));
/// ```
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, KindError>;
}

// -----------------------------------------------------------------------------
// Implementations

impl ToValue for Value {
    #[inline]
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FromValue for Value {
    #[inline]
    fn from_value(value: Value) -> Result<Self, KindError> {
        Ok(value)
    }
}

impl ToValue for bool {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, KindError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(KindError::new(ValueKind::Bool, other.kind())),
        }
    }
}

macro_rules! impl_int {
    ($($ty:ty),*) => {
        $(
            impl ToValue for $ty {
                #[inline]
                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }
            }

            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, KindError> {
                    match value {
                        Value::Int(i) => <$ty>::try_from(i)
                            .map_err(|_| KindError::out_of_range(::core::stringify!($ty), i)),
                        other => Err(KindError::new(ValueKind::Int, other.kind())),
                    }
                }
            }
        )*
    };
}

impl_int!(i64, i32, u32);

impl ToValue for f64 {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, KindError> {
        match value {
            Value::Float(f) => Ok(f),
            Value::Int(i) => Ok(i as f64),
            other => Err(KindError::new(ValueKind::Float, other.kind())),
        }
    }
}

impl ToValue for String {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, KindError> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(KindError::new(ValueKind::Str, other.kind())),
        }
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Nil,
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, KindError> {
        match value {
            Value::Nil => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, KindError> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(KindError::new(ValueKind::List, other.kind())),
        }
    }
}
