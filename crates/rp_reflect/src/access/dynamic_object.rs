use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;

use rp_utils::hash::{FixedHashState, HashMap};

use super::{AccessError, Represented};
use crate::info::TypeHandle;
use crate::Value;

// -----------------------------------------------------------------------------
// DynamicObject

/// A represented object backed by named, ordered fields.
///
/// Getters read fields by name; setters follow the `name=` convention and
/// create the field if it does not exist yet. This makes `DynamicObject` a
/// target for map-keyed properties and a stand-in for typed objects that
/// were not decoded into a Rust struct.
///
/// A `DynamicObject` can optionally represent a specific type through
/// [`set_represented_type`], which is reported by [`Represented::type_path`].
///
/// # Examples
///
/// ```
/// use rp_reflect::{DynamicObject, Represented, Value};
///
/// let mut object = DynamicObject::new();
/// object.write("title=", Value::from("Insider")).unwrap();
/// object.insert("track", 2);
///
/// assert_eq!(object.read("title").unwrap(), Value::from("Insider"));
/// assert_eq!(object.field_len(), 2);
/// assert!(object.read("length").is_err());
/// ```
///
/// [`set_represented_type`]: DynamicObject::set_represented_type
#[derive(Debug, Clone, Default)]
pub struct DynamicObject {
    represented: Option<TypeHandle>,
    field_names: Vec<String>,
    fields: Vec<Value>,
    field_indices: HashMap<String, usize>,
}

impl DynamicObject {
    /// Creates an empty `DynamicObject`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            represented: None,
            field_names: Vec::new(),
            fields: Vec::new(),
            field_indices: HashMap::with_hasher(FixedHashState),
        }
    }

    /// Creates a new empty `DynamicObject` with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            represented: None,
            field_names: Vec::with_capacity(capacity),
            fields: Vec::with_capacity(capacity),
            field_indices: HashMap::with_capacity_and_hasher(capacity, FixedHashState),
        }
    }

    /// Sets the type this object stands in for.
    #[inline]
    pub fn set_represented_type(&mut self, ty: Option<TypeHandle>) {
        self.represented = ty;
    }

    #[inline]
    pub fn represented_type(&self) -> Option<TypeHandle> {
        self.represented
    }

    /// Sets the field `name`, overwriting an existing value in place.
    ///
    /// Returns the previous value of the field, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name: String = name.into();
        let value: Value = value.into();
        if let Some(&index) = self.field_indices.get(name.as_str()) {
            return Some(core::mem::replace(&mut self.fields[index], value));
        }
        self.field_indices.insert(name.clone(), self.fields.len());
        self.field_names.push(name);
        self.fields.push(value);
        None
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.field_indices.get(name).map(|&index| &self.fields[index])
    }

    #[inline]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.field_indices
            .get(name)
            .map(|&index| &mut self.fields[index])
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.field_indices.contains_key(name)
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns an iterator over the fields in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> {
        self.field_names
            .iter()
            .map(String::as_str)
            .zip(self.fields.iter())
    }

    /// Converts the object into a [`Value::Map`], keeping field order.
    pub fn into_value(self) -> Value {
        Value::Map(self.field_names.into_iter().zip(self.fields).collect())
    }
}

impl Represented for DynamicObject {
    fn read(&self, getter: &str) -> Result<Value, AccessError> {
        self.get(getter)
            .cloned()
            .ok_or_else(|| AccessError::unknown_getter(self.type_path(), getter))
    }

    fn write(&mut self, setter: &str, value: Value) -> Result<(), AccessError> {
        match setter.strip_suffix('=') {
            Some(name) if !name.is_empty() => {
                self.insert(name, value);
                Ok(())
            }
            _ => Err(AccessError::unknown_setter(self.type_path(), setter)),
        }
    }

    fn type_path(&self) -> &'static str {
        match self.represented {
            Some(ty) => ty.type_path(),
            None => "rp_reflect::access::DynamicObject",
        }
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use super::DynamicObject;
    use crate::{AccessError, Represented, TypeHandle, Value};

    struct Song;

    #[test]
    fn overwrite_keeps_position() {
        let mut object = DynamicObject::new();
        object.insert("title", "Insider");
        object.insert("track", 1);
        assert_eq!(object.insert("title", "Fatal Flu"), Some(Value::from("Insider")));

        assert_eq!(
            object.into_value(),
            Value::Map(vec![
                (String::from("title"), Value::from("Fatal Flu")),
                (String::from("track"), Value::Int(1)),
            ])
        );
    }

    #[test]
    fn setter_requires_assignment_suffix() {
        let mut object = DynamicObject::new();
        assert!(matches!(
            object.write("title", Value::Nil),
            Err(AccessError::UnknownSetter { .. })
        ));
        assert!(object.write("=", Value::Nil).is_err());
        assert_eq!(object.field_len(), 0);
    }

    #[test]
    fn reports_represented_type() {
        let mut object = DynamicObject::with_capacity(1);
        object.set_represented_type(Some(TypeHandle::of::<Song>()));
        let err = object.read("title").unwrap_err();
        match err {
            AccessError::UnknownGetter { type_path, getter } => {
                assert!(type_path.ends_with("::Song"));
                assert_eq!(getter, "title");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
