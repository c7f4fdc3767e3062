//! The open options bag carried by every [`Definition`](crate::Definition).
//!
//! Options are an ordered mapping from [`OptionKey`] to [`OptionValue`].
//! Recognized keys have typed accessors on `Definition`; unknown keys are
//! kept verbatim as [`OptionKey::Custom`] for downstream consumers such as
//! format encoders.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use rp_reflect::{TypeHandle, Value};
use rp_utils::hash::{FixedHashState, HashMap};

use crate::binding::BindingFactory;

// -----------------------------------------------------------------------------
// OptionKey

/// The name of a property option.
///
/// Converting from a string maps the recognized option names to their
/// variants, so `OptionKey::from("class") == OptionKey::Class`. Any other
/// name becomes [`OptionKey::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Class,
    Extend,
    Instance,
    Collection,
    Hash,
    Default,
    RenderNil,
    Readable,
    Writeable,
    Getter,
    Setter,
    Binding,
    Tag,
    /// An option this crate does not interpret.
    Custom(String),
}

impl OptionKey {
    /// Returns the option name, e.g. `"render_nil"`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Class => "class",
            Self::Extend => "extend",
            Self::Instance => "instance",
            Self::Collection => "collection",
            Self::Hash => "hash",
            Self::Default => "default",
            Self::RenderNil => "render_nil",
            Self::Readable => "readable",
            Self::Writeable => "writeable",
            Self::Getter => "getter",
            Self::Setter => "setter",
            Self::Binding => "binding",
            Self::Tag => "tag",
            Self::Custom(name) => name,
        }
    }

    #[inline]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    fn recognize(name: &str) -> Option<Self> {
        Some(match name {
            "class" => Self::Class,
            "extend" => Self::Extend,
            "instance" => Self::Instance,
            "collection" => Self::Collection,
            "hash" => Self::Hash,
            "default" => Self::Default,
            "render_nil" => Self::RenderNil,
            "readable" => Self::Readable,
            "writeable" => Self::Writeable,
            "getter" => Self::Getter,
            "setter" => Self::Setter,
            "binding" => Self::Binding,
            "tag" => Self::Tag,
            _ => return None,
        })
    }
}

impl From<&str> for OptionKey {
    fn from(name: &str) -> Self {
        Self::recognize(name).unwrap_or_else(|| Self::Custom(String::from(name)))
    }
}

impl From<String> for OptionKey {
    fn from(name: String) -> Self {
        Self::recognize(&name).unwrap_or(Self::Custom(name))
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// Prototype

/// A shared prototype instance, the value of the `instance` option.
#[derive(Clone)]
pub struct Prototype(Arc<dyn Any + Send + Sync>);

impl Prototype {
    #[inline]
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns `true` if both point to the same instance.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Prototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Prototype(..)")
    }
}

// -----------------------------------------------------------------------------
// OptionValue

/// The value of a property option.
///
/// Plain data lives in [`OptionValue::Value`]; the other variants carry the
/// non-data options (types, prototypes, binding factories).
#[derive(Debug, Clone)]
pub enum OptionValue {
    Value(Value),
    Type(TypeHandle),
    Types(Vec<TypeHandle>),
    Instance(Prototype),
    Binding(BindingFactory),
}

impl OptionValue {
    /// An explicit nil.
    pub const NIL: Self = Self::Value(Value::Nil);

    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Value(Value::Nil))
    }

    /// Everything except nil and `false` is truthy.
    #[inline]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Value(value) => value.is_truthy(),
            _ => true,
        }
    }

    #[inline]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        self.as_value().and_then(Value::as_str)
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Value(value) => value.as_bool(),
            _ => None,
        }
    }
}

impl PartialEq for OptionValue {
    /// Data and types compare by value, prototypes and factories by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Type(a), Self::Type(b)) => a == b,
            (Self::Types(a), Self::Types(b)) => a == b,
            (Self::Instance(a), Self::Instance(b)) => a.ptr_eq(b),
            (Self::Binding(a), Self::Binding(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

macro_rules! impl_from_data {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for OptionValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

impl_from_data!(bool, i32, i64, f64, String, &str, Vec<Value>, Option<bool>);

impl From<Value> for OptionValue {
    #[inline]
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<TypeHandle> for OptionValue {
    #[inline]
    fn from(value: TypeHandle) -> Self {
        Self::Type(value)
    }
}

impl From<Vec<TypeHandle>> for OptionValue {
    #[inline]
    fn from(value: Vec<TypeHandle>) -> Self {
        Self::Types(value)
    }
}

impl From<Prototype> for OptionValue {
    #[inline]
    fn from(value: Prototype) -> Self {
        Self::Instance(value)
    }
}

impl From<BindingFactory> for OptionValue {
    #[inline]
    fn from(value: BindingFactory) -> Self {
        Self::Binding(value)
    }
}

// -----------------------------------------------------------------------------
// Options

/// An ordered, mutable mapping of property options.
///
/// Entries keep their first-insertion position; overwriting a key replaces
/// the value in place.
///
/// # Examples
///
/// ```
/// use rp_property::{OptionKey, OptionValue, Options};
///
/// let mut options = Options::new()
///     .collection(true)
///     .tag("song")
///     .with("volume", 9);
///
/// assert_eq!(options.get(OptionKey::Tag).and_then(OptionValue::as_str), Some("song"));
/// assert_eq!(options.get("volume"), Some(&OptionValue::from(9)));
///
/// options.insert("collection", false);
/// let keys: Vec<&str> = options.iter().map(|(key, _)| key.as_str()).collect();
/// assert_eq!(keys, ["collection", "tag", "volume"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    keys: Vec<OptionKey>,
    values: Vec<OptionValue>,
    indices: HashMap<OptionKey, usize>,
}

impl Options {
    /// Creates an empty `Options`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            indices: HashMap::with_hasher(FixedHashState),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            indices: HashMap::with_capacity_and_hasher(capacity, FixedHashState),
        }
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<OptionKey>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        let key: OptionKey = key.into();
        let value: OptionValue = value.into();
        if let Some(&index) = self.indices.get(&key) {
            return Some(core::mem::replace(&mut self.values[index], value));
        }
        self.indices.insert(key.clone(), self.keys.len());
        self.keys.push(key);
        self.values.push(value);
        None
    }

    #[inline]
    pub fn get(&self, key: impl Into<OptionKey>) -> Option<&OptionValue> {
        self.indices
            .get(&key.into())
            .map(|&index| &self.values[index])
    }

    #[inline]
    pub fn get_mut(&mut self, key: impl Into<OptionKey>) -> Option<&mut OptionValue> {
        self.indices
            .get(&key.into())
            .map(|&index| &mut self.values[index])
    }

    /// Returns `true` if `key` is present, whatever its value (nil included).
    #[inline]
    pub fn contains_key(&self, key: impl Into<OptionKey>) -> bool {
        self.indices.contains_key(&key.into())
    }

    /// Removes `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: impl Into<OptionKey>) -> Option<OptionValue> {
        let removed = self.indices.remove(&key.into())?;
        self.keys.remove(removed);
        let value = self.values.remove(removed);
        for index in self.indices.values_mut() {
            if *index > removed {
                *index -= 1;
            }
        }
        Some(value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&OptionKey, &OptionValue)> {
        self.keys.iter().zip(self.values.iter())
    }

    /// Copies every entry of `other` into `self`, overriding existing keys.
    pub fn merge(&mut self, other: Options) {
        for (key, value) in other.keys.into_iter().zip(other.values) {
            self.insert(key, value);
        }
    }

    // -------------------------------------------------------------------------
    // Builders

    /// Sets an arbitrary option.
    #[inline]
    pub fn with(mut self, key: impl Into<OptionKey>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Declares the expected value type (`class`).
    #[inline]
    pub fn class<T: ?Sized + 'static>(self) -> Self {
        self.with(OptionKey::Class, TypeHandle::of::<T>())
    }

    /// Adds a representer module applied to decoded instances (`extend`).
    ///
    /// Repeated calls accumulate modules in order.
    pub fn extend<T: ?Sized + 'static>(mut self) -> Self {
        let handle = TypeHandle::of::<T>();
        match self.get_mut(OptionKey::Extend) {
            Some(OptionValue::Types(handles)) => handles.push(handle),
            Some(OptionValue::Type(first)) => {
                let first = *first;
                self.insert(OptionKey::Extend, vec![first, handle]);
            }
            _ => {
                self.insert(OptionKey::Extend, vec![handle]);
            }
        }
        self
    }

    /// Sets the prototype instance (`instance`).
    #[inline]
    pub fn instance<T: Any + Send + Sync>(self, prototype: T) -> Self {
        self.with(OptionKey::Instance, Prototype::new(prototype))
    }

    #[inline]
    pub fn collection(self, enabled: bool) -> Self {
        self.with(OptionKey::Collection, enabled)
    }

    #[inline]
    pub fn hash(self, enabled: bool) -> Self {
        self.with(OptionKey::Hash, enabled)
    }

    /// Sets the `default` option; a nil default still counts as configured.
    #[inline]
    pub fn default_value(self, value: impl Into<Value>) -> Self {
        self.with(OptionKey::Default, value.into())
    }

    #[inline]
    pub fn render_nil(self, enabled: bool) -> Self {
        self.with(OptionKey::RenderNil, enabled)
    }

    /// Sets `readable`; `None` stores an explicit nil.
    #[inline]
    pub fn readable(self, flag: impl Into<Option<bool>>) -> Self {
        self.with(OptionKey::Readable, flag.into())
    }

    /// Sets `writeable`; `None` stores an explicit nil.
    #[inline]
    pub fn writeable(self, flag: impl Into<Option<bool>>) -> Self {
        self.with(OptionKey::Writeable, flag.into())
    }

    #[inline]
    pub fn getter(self, name: impl Into<String>) -> Self {
        self.with(OptionKey::Getter, name.into())
    }

    #[inline]
    pub fn setter(self, name: impl Into<String>) -> Self {
        self.with(OptionKey::Setter, name.into())
    }

    #[inline]
    pub fn tag(self, name: impl Into<String>) -> Self {
        self.with(OptionKey::Tag, name.into())
    }

    #[inline]
    pub fn binding(self, factory: BindingFactory) -> Self {
        self.with(OptionKey::Binding, factory)
    }
}
