//! Runtime adapters between a [`Definition`] and a represented object.
//!
//! A [`Binding`] is created per property and per object whenever the
//! property is rendered or parsed, and dropped right after. It is never
//! cached and never shared.
//!
//! - [`ReflectBinding`] reads and writes through the accessor names of the
//!   definition, using the [`Represented`] capability of the object.
//! - [`FnBinding`] calls an injected getter/setter pair.
//! - Anything else can be plugged in through a [`BindingFactory`].

mod factory;
mod func;
mod reflect;
mod target;

pub use factory::BindingFactory;
pub use func::FnBinding;
pub use reflect::ReflectBinding;
pub use target::Target;

use alloc::string::String;

use rp_reflect::{AccessError, Represented, Value};

use crate::Definition;

// -----------------------------------------------------------------------------
// BindingKind

/// The strategy a [`Binding`] uses to reach the represented object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    /// Accessor names resolved through [`Represented`].
    Reflect,
    /// An injected getter/setter pair.
    Accessor,
    /// A caller-defined binding type.
    Custom,
}

// -----------------------------------------------------------------------------
// Binding

/// Reads and writes one property of one represented object.
///
/// Implementors provide [`get`] and [`set`]; the default-substitution and
/// nil-omission policy of the definition is applied by [`value_for_render`]
/// and [`apply_fragment`].
///
/// Accessor failures are returned unchanged.
///
/// [`get`]: Binding::get
/// [`set`]: Binding::set
/// [`value_for_render`]: Binding::value_for_render
/// [`apply_fragment`]: Binding::apply_fragment
pub trait Binding {
    /// The definition this binding was created from.
    fn definition(&self) -> &Definition;

    /// The object this binding reads from and writes to.
    fn represented(&self) -> &dyn Represented;

    /// Extra arguments given at creation time.
    fn user_options(&self) -> &[Value] {
        &[]
    }

    fn kind(&self) -> BindingKind {
        BindingKind::Custom
    }

    /// Reads the raw property value.
    fn get(&self) -> Result<Value, AccessError>;

    /// Writes the property value.
    fn set(&mut self, value: Value) -> Result<(), AccessError>;

    /// Reads the value to emit while rendering.
    ///
    /// Applies [`Definition::default_for`] to the raw value and returns
    /// `None` when the result is a nil that should be left out.
    fn value_for_render(&self) -> Result<Option<Value>, AccessError> {
        let definition = self.definition();
        let value = definition.default_for(self.get()?);
        if definition.is_skipable_nil_value(&value) {
            Ok(None)
        } else {
            Ok(Some(value))
        }
    }

    /// Writes a parsed fragment, or the default when the fragment is missing.
    ///
    /// Returns `false` if nothing was written: the fragment is missing and
    /// the definition has no default.
    fn apply_fragment(&mut self, fragment: Option<Value>) -> Result<bool, AccessError> {
        let value = match fragment {
            Some(value) => value,
            None if self.definition().has_default() => self.definition().default_value(),
            None => return Ok(false),
        };
        self.set(value)?;
        Ok(true)
    }
}

#[cold]
fn read_only(definition: &Definition, target: &Target<'_>) -> AccessError {
    AccessError::ReadOnly {
        type_path: target.get().type_path(),
        setter: String::from(definition.setter()),
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use rp_reflect::{AccessError, DynamicObject, Value, impl_represented};

    use super::{Binding, BindingKind, ReflectBinding};
    use crate::{Definition, Options};

    #[derive(Default)]
    struct Song {
        title: Option<String>,
        composers: Vec<String>,
        live: bool,
    }

    impl_represented!(Song { title, composers, live });

    #[test]
    fn render_skips_nil() {
        let song = Song::default();
        let definition = Definition::named("title");
        let binding = definition.create_binding(&song);

        assert_eq!(binding.kind(), BindingKind::Reflect);
        assert_eq!(binding.get().unwrap(), Value::Nil);
        assert_eq!(binding.value_for_render().unwrap(), None);
    }

    #[test]
    fn render_nil_emits_nil() {
        let song = Song::default();
        let definition =
            Definition::new("title", Options::new().render_nil(true).default_value("Insider"))
                .unwrap();

        let binding = definition.create_binding(&song);
        assert_eq!(binding.value_for_render().unwrap(), Some(Value::Nil));
    }

    #[test]
    fn render_substitutes_default() {
        let song = Song::default();
        let definition =
            Definition::new("title", Options::new().default_value("Insider")).unwrap();
        let binding = definition.create_binding(&song);
        assert_eq!(binding.value_for_render().unwrap(), Some(Value::from("Insider")));

        let song = Song {
            title: Some(String::from("The Quest")),
            ..Song::default()
        };
        let binding = definition.create_binding(&song);
        assert_eq!(binding.value_for_render().unwrap(), Some(Value::from("The Quest")));
    }

    #[test]
    fn render_keeps_false() {
        let song = Song::default();
        let definition = Definition::new("live", Options::new().default_value(true)).unwrap();
        let binding = definition.create_binding(&song);
        assert_eq!(binding.value_for_render().unwrap(), Some(Value::Bool(false)));
    }

    #[test]
    fn apply_present_fragment() {
        let mut song = Song::default();
        let definition = Definition::named("title");
        let mut binding = definition.create_binding(&mut song);

        assert!(binding.apply_fragment(Some(Value::from("Fatal Flu"))).unwrap());
        drop(binding);
        assert_eq!(song.title.as_deref(), Some("Fatal Flu"));
    }

    #[test]
    fn apply_missing_fragment_without_default() {
        let mut song = Song {
            title: Some(String::from("Insider")),
            ..Song::default()
        };
        let definition = Definition::named("title");
        let mut binding = definition.create_binding(&mut song);

        assert!(!binding.apply_fragment(None).unwrap());
        drop(binding);
        assert_eq!(song.title.as_deref(), Some("Insider"));
    }

    #[test]
    fn apply_missing_fragment_with_default() {
        let mut song = Song {
            composers: vec![String::from("Greg Graffin")],
            ..Song::default()
        };
        let definition =
            Definition::new("composers", Options::new().collection(true)).unwrap();
        let mut binding = definition.create_binding(&mut song);

        assert!(binding.apply_fragment(None).unwrap());
        drop(binding);
        assert!(song.composers.is_empty());

        let definition = Definition::new("title", Options::new().default_value(Value::Nil)).unwrap();
        let mut binding = definition.create_binding(&mut song);
        assert!(binding.apply_fragment(None).unwrap());
    }

    #[test]
    fn shared_target_is_read_only() {
        let song = Song::default();
        let definition = Definition::named("title");
        let mut binding = definition.create_binding(&song);

        let err = binding.set(Value::from("Insider")).unwrap_err();
        match err {
            AccessError::ReadOnly { type_path, setter } => {
                assert!(type_path.ends_with("::Song"));
                assert_eq!(setter, "title=");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn accessor_overrides_are_used() {
        let mut object = DynamicObject::new();
        object.insert("song_title", "Insider");
        let definition = Definition::new(
            "title",
            Options::new().getter("song_title").setter("name="),
        )
        .unwrap();

        let mut binding = ReflectBinding::new(&definition, &mut object);
        assert_eq!(binding.get().unwrap(), Value::from("Insider"));
        binding.set(Value::from("Fatal Flu")).unwrap();
        drop(binding);

        assert_eq!(object.get("name"), Some(&Value::from("Fatal Flu")));
        assert_eq!(object.get("song_title"), Some(&Value::from("Insider")));
    }

    #[test]
    fn accessor_errors_propagate() {
        let mut song = Song::default();
        let definition = Definition::named("live");
        let mut binding = definition.create_binding(&mut song);
        assert!(matches!(
            binding.set(Value::from("yes")),
            Err(AccessError::MismatchedKinds { .. })
        ));
        drop(binding);

        let definition = Definition::named("length");
        let binding = definition.create_binding(&song);
        assert!(matches!(binding.get(), Err(AccessError::UnknownGetter { .. })));
        assert!(binding.represented().is::<Song>());
    }
}
