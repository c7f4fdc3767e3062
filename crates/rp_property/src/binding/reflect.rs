use alloc::boxed::Box;

use rp_reflect::{AccessError, Represented, Value};

use super::{Binding, BindingKind, Target, read_only};
use crate::Definition;

// -----------------------------------------------------------------------------
// ReflectBinding

/// The default binding: calls the getter and setter named by the definition
/// on the represented object.
///
/// # Examples
///
/// ```
/// use rp_property::{Binding, Definition, Options, ReflectBinding};
/// use rp_reflect::{DynamicObject, Value};
///
/// let definition = Definition::new("title", Options::new().getter("name")).unwrap();
/// let mut song = DynamicObject::new();
/// song.insert("name", "Insider");
///
/// let mut binding = ReflectBinding::new(&definition, &mut song);
/// assert_eq!(binding.get().unwrap(), Value::from("Insider"));
///
/// binding.set(Value::from("Fatal Flu")).unwrap();
/// assert_eq!(song.get("title"), Some(&Value::from("Fatal Flu")));
/// ```
#[derive(Debug)]
pub struct ReflectBinding<'a> {
    definition: &'a Definition,
    user_options: &'a [Value],
    target: Target<'a>,
}

impl<'a> ReflectBinding<'a> {
    #[inline]
    pub fn new(definition: &'a Definition, target: impl Into<Target<'a>>) -> Self {
        Self {
            definition,
            user_options: &[],
            target: target.into(),
        }
    }

    /// Attaches extra creation arguments.
    #[inline]
    pub fn with_user_options(mut self, user_options: &'a [Value]) -> Self {
        self.user_options = user_options;
        self
    }
}

impl ReflectBinding<'_> {
    /// Creates a boxed binding, the shape returned by
    /// [`Definition::create_binding`] and binding factories.
    ///
    /// Usable directly as a factory: `BindingFactory::new(ReflectBinding::boxed)`.
    #[inline]
    pub fn boxed<'b>(
        definition: &'b Definition,
        user_options: &'b [Value],
        target: Target<'b>,
    ) -> Box<dyn Binding + 'b> {
        Box::new(ReflectBinding {
            definition,
            user_options,
            target,
        })
    }
}

impl Binding for ReflectBinding<'_> {
    #[inline]
    fn definition(&self) -> &Definition {
        self.definition
    }

    #[inline]
    fn represented(&self) -> &dyn Represented {
        self.target.get()
    }

    #[inline]
    fn user_options(&self) -> &[Value] {
        self.user_options
    }

    #[inline]
    fn kind(&self) -> BindingKind {
        BindingKind::Reflect
    }

    fn get(&self) -> Result<Value, AccessError> {
        self.target.get().read(self.definition.getter())
    }

    fn set(&mut self, value: Value) -> Result<(), AccessError> {
        let setter = self.definition.setter();
        match self.target.get_mut() {
            Some(object) => object.write(&setter, value),
            None => Err(read_only(self.definition, &self.target)),
        }
    }
}
