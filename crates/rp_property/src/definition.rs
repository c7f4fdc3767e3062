use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::slice;

use rp_reflect::{TypeHandle, Value};

use crate::binding::{Binding, BindingFactory, ReflectBinding, Target};
use crate::error::DefinitionError;
use crate::options::{OptionKey, OptionValue, Options, Prototype};

// -----------------------------------------------------------------------------
// Definition

/// The declaration of one named property of a represented type.
///
/// A definition answers every question an encoder or decoder asks about a
/// property: accessor names, expected type and shape, default and nil
/// handling. All of it is derived from its [`Options`] on demand, so the
/// options stay the single source of truth.
///
/// Cloning a definition copies its options; the clone can be reconfigured
/// without affecting the original.
///
/// # Examples
///
/// ```
/// use rp_property::{Definition, Options};
/// use rp_reflect::Value;
///
/// let songs = Definition::new("songs", Options::new().collection(true).tag("song")).unwrap();
///
/// assert_eq!(songs.getter(), "songs");
/// assert_eq!(songs.setter(), "songs=");
/// assert_eq!(songs.wire_name(), "song");
/// assert!(songs.is_array());
/// assert!(songs.has_default());
/// assert_eq!(songs.default_for(Value::Nil), Value::empty_list());
/// ```
#[derive(Debug, Clone)]
pub struct Definition {
    name: String,
    options: Options,
}

impl Definition {
    /// Creates a definition.
    ///
    /// Rejects options that declare both a collection and a hash, a `class`
    /// that is not a type, and non-boolean `readable` or `writeable` flags.
    pub fn new(name: impl Into<String>, options: Options) -> Result<Self, DefinitionError> {
        let name: String = name.into();
        validate(&name, &options)?;
        Ok(Self { name, options })
    }

    /// Creates a definition without options.
    #[inline]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Options::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the options for in-place changes.
    ///
    /// Changes made here are not validated; use [`merge`](Self::merge) to
    /// have them checked.
    #[inline]
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Merges `options` over the current ones.
    ///
    /// The merge is all or nothing: if the result is invalid the definition
    /// is left unchanged.
    pub fn merge(&mut self, options: Options) -> Result<(), DefinitionError> {
        let overrides_binding =
            self.binding().is_some() && options.contains_key(OptionKey::Binding);
        let mut merged = self.options.clone();
        merged.merge(options);
        validate(&self.name, &merged)?;
        if overrides_binding {
            log::debug!("property `{}` overrides its binding factory", self.name);
        }
        self.options = merged;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Accessors

    /// The name of the reader, the `getter` option or the property name.
    pub fn getter(&self) -> &str {
        self.str_option(OptionKey::Getter).unwrap_or(&self.name)
    }

    /// The name of the writer, the `setter` option or `name=`.
    pub fn setter(&self) -> Cow<'_, str> {
        match self.str_option(OptionKey::Setter) {
            Some(setter) => Cow::Borrowed(setter),
            None => Cow::Owned(format!("{}=", self.name)),
        }
    }

    #[inline]
    pub fn tag(&self) -> Option<&str> {
        self.str_option(OptionKey::Tag)
    }

    /// The name used on the wire: the tag if set, else the property name.
    #[inline]
    pub fn wire_name(&self) -> &str {
        self.tag().unwrap_or(&self.name)
    }

    // -------------------------------------------------------------------------
    // Type

    /// Returns `true` if any of `class`, `extend` or `instance` is set.
    pub fn is_typed(&self) -> bool {
        [OptionKey::Class, OptionKey::Extend, OptionKey::Instance]
            .into_iter()
            .any(|key| self.is_enabled(key))
    }

    /// The type to instantiate when decoding, from the `class` option only.
    ///
    /// Validated definitions only hold types under `class`, so this is
    /// `Some` exactly when `class` is set.
    pub fn sought_type(&self) -> Option<&TypeHandle> {
        match self.options.get(OptionKey::Class) {
            Some(OptionValue::Type(ty)) => Some(ty),
            _ => None,
        }
    }

    /// The representer modules of the `extend` option, in declaration order.
    pub fn representer_modules(&self) -> &[TypeHandle] {
        match self.options.get(OptionKey::Extend) {
            Some(OptionValue::Type(ty)) => slice::from_ref(ty),
            Some(OptionValue::Types(types)) => types,
            _ => &[],
        }
    }

    /// The first representer module, if any.
    #[inline]
    pub fn representer_module(&self) -> Option<&TypeHandle> {
        self.representer_modules().first()
    }

    pub fn instance(&self) -> Option<&Prototype> {
        match self.options.get(OptionKey::Instance) {
            Some(OptionValue::Instance(prototype)) => Some(prototype),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Shape

    #[inline]
    pub fn is_array(&self) -> bool {
        self.is_enabled(OptionKey::Collection)
    }

    #[inline]
    pub fn is_hash(&self) -> bool {
        self.is_enabled(OptionKey::Hash)
    }

    // -------------------------------------------------------------------------
    // Defaults

    /// Returns `true` if the `default` option is present, even when nil, or
    /// the property is a collection.
    pub fn has_default(&self) -> bool {
        self.options.contains_key(OptionKey::Default) || self.is_array()
    }

    /// The configured default, `[]` for collections without one, else nil.
    ///
    /// A non-data `default` option counts as nil.
    pub fn default_value(&self) -> Value {
        match self.options.get(OptionKey::Default) {
            Some(option) => option.as_value().cloned().unwrap_or_default(),
            None if self.is_array() => Value::empty_list(),
            None => Value::Nil,
        }
    }

    #[inline]
    pub fn renders_nil(&self) -> bool {
        self.is_enabled(OptionKey::RenderNil)
    }

    /// Substitutes the default for a nil value.
    ///
    /// With `render_nil` the value is returned as is, nil included. `false`
    /// is a present value and is never replaced.
    ///
    /// ```
    /// use rp_property::{Definition, Options};
    /// use rp_reflect::Value;
    ///
    /// let song = Definition::new("song", Options::new().default_value("Insider")).unwrap();
    /// assert_eq!(song.default_for(Value::Nil), Value::from("Insider"));
    /// assert_eq!(song.default_for(Value::Bool(false)), Value::Bool(false));
    /// assert_eq!(song.default_for(Value::from("Black And Blue")), Value::from("Black And Blue"));
    /// ```
    pub fn default_for(&self, value: Value) -> Value {
        match value {
            value if self.renders_nil() => value,
            Value::Nil => self.default_value(),
            value => value,
        }
    }

    /// Returns `true` for a nil value that is omitted when rendering.
    #[inline]
    pub fn is_skipable_nil_value(&self, value: &Value) -> bool {
        value.is_nil() && !self.renders_nil()
    }

    // -------------------------------------------------------------------------
    // Flags

    /// Whether the property is rendered.
    ///
    /// `Some(true)` when unset, the flag itself when set, `None` when
    /// explicitly nil. A non-boolean flag, only reachable through
    /// [`options_mut`](Self::options_mut), also reads as `None`.
    #[inline]
    pub fn readable(&self) -> Option<bool> {
        self.flag(OptionKey::Readable)
    }

    /// Whether the property is parsed.
    ///
    /// `Some(true)` when unset, the flag itself when set, `None` when
    /// explicitly nil. A non-boolean flag, only reachable through
    /// [`options_mut`](Self::options_mut), also reads as `None`.
    #[inline]
    pub fn writeable(&self) -> Option<bool> {
        self.flag(OptionKey::Writeable)
    }

    // -------------------------------------------------------------------------
    // Binding

    pub fn binding(&self) -> Option<&BindingFactory> {
        match self.options.get(OptionKey::Binding) {
            Some(OptionValue::Binding(factory)) => Some(factory),
            _ => None,
        }
    }

    /// Creates a binding of this property to `target`.
    ///
    /// See [`create_binding_with`](Self::create_binding_with).
    #[inline]
    pub fn create_binding<'a>(&'a self, target: impl Into<Target<'a>>) -> Box<dyn Binding + 'a> {
        self.create_binding_with(target, &[])
    }

    /// Creates a binding of this property to `target`, forwarding
    /// `user_options` to a custom factory.
    ///
    /// With a `binding` option the factory result is returned as is;
    /// otherwise a [`ReflectBinding`] is created.
    pub fn create_binding_with<'a>(
        &'a self,
        target: impl Into<Target<'a>>,
        user_options: &'a [Value],
    ) -> Box<dyn Binding + 'a> {
        let target = target.into();
        match self.binding() {
            Some(factory) => {
                log::trace!("creating custom binding for property `{}`", self.name);
                factory.call(self, user_options, target)
            }
            None => {
                log::trace!("creating reflect binding for property `{}`", self.name);
                ReflectBinding::boxed(self, user_options, target)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Helpers

    #[inline]
    fn str_option(&self, key: OptionKey) -> Option<&str> {
        self.options.get(key).and_then(OptionValue::as_str)
    }

    #[inline]
    fn is_enabled(&self, key: OptionKey) -> bool {
        self.options.get(key).is_some_and(OptionValue::is_truthy)
    }

    fn flag(&self, key: OptionKey) -> Option<bool> {
        match self.options.get(key) {
            None => Some(true),
            Some(option) => option.as_bool(),
        }
    }
}

fn validate(name: &str, options: &Options) -> Result<(), DefinitionError> {
    let enabled = |key: OptionKey| options.get(key).is_some_and(OptionValue::is_truthy);
    if enabled(OptionKey::Collection) && enabled(OptionKey::Hash) {
        return Err(DefinitionError::ConflictingShape {
            name: String::from(name),
        });
    }

    let invalid = |option: OptionKey, expected: &'static str| DefinitionError::InvalidOption {
        name: String::from(name),
        option,
        expected,
    };
    match options.get(OptionKey::Class) {
        Some(OptionValue::Type(_)) | None => {}
        Some(option) if !option.is_truthy() => {}
        Some(_) => return Err(invalid(OptionKey::Class, "a type")),
    }
    for key in [OptionKey::Readable, OptionKey::Writeable] {
        match options.get(key.clone()) {
            Some(option) if !option.is_nil() && option.as_bool().is_none() => {
                return Err(invalid(key, "a boolean or nil"));
            }
            _ => {}
        }
    }
    Ok(())
}
