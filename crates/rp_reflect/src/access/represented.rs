use core::any::{Any, type_name};

use super::AccessError;
use crate::Value;

// -----------------------------------------------------------------------------
// Represented

/// An object whose properties can be read and written by accessor name.
///
/// This is the reflective half of property bindings: a binding resolves the
/// getter and setter names of a property definition and calls [`read`] and
/// [`write`] with them.
///
/// Setter names follow the `name=` convention, e.g. the setter of `title`
/// is `title=`.
///
/// It's recommended to use [`impl_represented!`](crate::impl_represented)
/// rather than implementing this trait by hand.
///
/// # Examples
///
/// ```
/// use rp_reflect::{Represented, Value, impl_represented};
///
/// #[derive(Default)]
/// struct Song {
///     title: String,
///     track: Option<i64>,
/// }
///
/// impl_represented!(Song { title, track });
///
/// let mut song = Song::default();
/// song.write("title=", Value::from("Insider")).unwrap();
/// assert_eq!(song.read("title").unwrap(), Value::from("Insider"));
/// assert_eq!(song.read("track").unwrap(), Value::Nil);
/// assert!(song.read("length").is_err());
/// ```
///
/// [`read`]: Represented::read
/// [`write`]: Represented::write
pub trait Represented: Any + 'static {
    /// Reads the property exposed under `getter`.
    fn read(&self, getter: &str) -> Result<Value, AccessError>;

    /// Writes `value` through the setter named `setter`.
    fn write(&mut self, setter: &str, value: Value) -> Result<(), AccessError>;

    /// Returns the type path of the object, used in error messages.
    fn type_path(&self) -> &'static str {
        type_name::<Self>()
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl dyn Represented {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Represented>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcasts the object to `&T`.
    #[inline]
    pub fn downcast_ref<T: Represented>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Downcasts the object to `&mut T`.
    #[inline]
    pub fn downcast_mut<T: Represented>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

// -----------------------------------------------------------------------------
// impl_represented

/// Implements [`Represented`] for a struct by listing its fields.
///
/// Every listed field gets a getter named after the field and a setter named
/// `field=`. Field types must implement [`ToValue`](crate::ToValue) and
/// [`FromValue`](crate::FromValue).
///
/// Fields can be exposed under another accessor name with `field as "name"`.
///
/// ```
/// use rp_reflect::{Represented, Value, impl_represented};
///
/// struct Band {
///     label: String,
/// }
///
/// impl_represented!(Band { label as "record_label" });
///
/// let mut band = Band { label: String::from("Epitaph") };
/// band.write("record_label=", Value::from("Fat Wreck")).unwrap();
/// assert_eq!(band.label, "Fat Wreck");
/// assert!(band.read("label").is_err());
/// ```
#[macro_export]
macro_rules! impl_represented {
    ($ty:ty { $($field:ident $(as $name:literal)?),* $(,)? }) => {
        impl $crate::Represented for $ty {
            fn read(
                &self,
                getter: &str,
            ) -> ::core::result::Result<$crate::Value, $crate::AccessError> {
                match getter {
                    $(
                        $crate::impl_represented!(@getter $field $($name)?) => {
                            ::core::result::Result::Ok($crate::ToValue::to_value(&self.$field))
                        }
                    )*
                    _ => ::core::result::Result::Err($crate::AccessError::unknown_getter(
                        $crate::Represented::type_path(self),
                        getter,
                    )),
                }
            }

            fn write(
                &mut self,
                setter: &str,
                value: $crate::Value,
            ) -> ::core::result::Result<(), $crate::AccessError> {
                match setter {
                    $(
                        $crate::impl_represented!(@setter $field $($name)?) => {
                            self.$field = $crate::FromValue::from_value(value)
                                .map_err(|err| err.at(setter))?;
                            ::core::result::Result::Ok(())
                        }
                    )*
                    _ => ::core::result::Result::Err($crate::AccessError::unknown_setter(
                        $crate::Represented::type_path(self),
                        setter,
                    )),
                }
            }

            #[inline]
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            #[inline]
            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }
        }
    };
    (@getter $field:ident) => { ::core::stringify!($field) };
    (@getter $field:ident $name:literal) => { $name };
    (@setter $field:ident) => { ::core::concat!(::core::stringify!($field), "=") };
    (@setter $field:ident $name:literal) => { ::core::concat!($name, "=") };
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::{AccessError, Represented, Value, ValueKind};

    #[derive(Default, Debug, PartialEq)]
    struct Album {
        name: String,
        songs: Vec<String>,
        year: Option<i64>,
        live: bool,
    }

    impl_represented!(Album { name, songs, year, live });

    #[test]
    fn reads_every_listed_field() {
        let album = Album {
            name: String::from("Black And Blue"),
            songs: vec![String::from("Fatal Flu")],
            year: None,
            live: false,
        };

        assert_eq!(album.read("name").unwrap(), Value::from("Black And Blue"));
        assert_eq!(
            album.read("songs").unwrap(),
            Value::List(vec![Value::from("Fatal Flu")])
        );
        assert_eq!(album.read("year").unwrap(), Value::Nil);
        assert_eq!(album.read("live").unwrap(), Value::Bool(false));
    }

    #[test]
    fn writes_through_setter_names() {
        let mut album = Album::default();
        album.write("year=", Value::Int(2003)).unwrap();
        album.write("live=", Value::Bool(true)).unwrap();

        assert_eq!(album.year, Some(2003));
        assert!(album.live);
    }

    #[test]
    fn getter_name_is_not_a_setter() {
        let mut album = Album::default();
        let err = album.write("name", Value::from("Insider")).unwrap_err();
        assert!(matches!(err, AccessError::UnknownSetter { ref setter, .. } if setter == "name"));
    }

    #[test]
    fn kind_mismatch_names_the_setter() {
        let mut album = Album::default();
        let err = album.write("live=", Value::from("yes")).unwrap_err();
        match err {
            AccessError::MismatchedKinds {
                accessor,
                expected,
                received,
            } => {
                assert_eq!(accessor, "live=");
                assert_eq!(expected, ValueKind::Bool);
                assert_eq!(received, ValueKind::Str);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(album, Album::default());
    }

    #[derive(Default)]
    struct Track {
        number: u32,
    }

    impl_represented!(Track { number });

    #[test]
    fn out_of_range_names_the_setter() {
        let mut track = Track::default();
        let err = track.write("number=", Value::Int(-3)).unwrap_err();
        match err {
            AccessError::OutOfRange {
                ref accessor,
                type_name,
                value,
            } => {
                assert_eq!(accessor, "number=");
                assert_eq!(type_name, "u32");
                assert_eq!(value, -3);
            }
            ref other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            err.to_string(),
            "attempted to assign -3 through `number=`, out of range for `u32`"
        );
        assert_eq!(track.number, 0);
    }

    #[test]
    fn downcast_through_dyn() {
        let mut album = Album::default();
        let object: &mut dyn Represented = &mut album;
        assert!(object.is::<Album>());
        object.downcast_mut::<Album>().unwrap().live = true;
        assert!(album.live);
    }
}
