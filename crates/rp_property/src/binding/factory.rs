use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;

use rp_reflect::{AccessError, Represented, Value};

use super::func::{Accessors, FnBinding};
use super::{Binding, Target};
use crate::Definition;

type FactoryFn = dyn for<'a> Fn(&'a Definition, &'a [Value], Target<'a>) -> Box<dyn Binding + 'a>
    + Send
    + Sync;

// -----------------------------------------------------------------------------
// BindingFactory

/// A custom binding constructor, the value of the `binding` option.
///
/// The factory is called with the definition, the extra creation arguments
/// and the represented object, in that order. Whatever it returns is handed
/// to the caller of [`Definition::create_binding`] unchanged.
///
/// Cloning a factory is cheap and keeps its identity, see [`ptr_eq`].
///
/// # Examples
///
/// ```
/// use rp_property::{BindingFactory, BindingKind, Definition, Options};
/// use rp_reflect::{DynamicObject, Represented, Value};
///
/// let upcase = BindingFactory::from_fns(
///     |object| {
///         let title = object.read("title")?;
///         Ok(title.as_str().map(str::to_uppercase).into())
///     },
///     |object, value| object.write("title=", value),
/// );
///
/// let definition = Definition::new("title", Options::new().binding(upcase)).unwrap();
/// let mut song = DynamicObject::new();
/// song.insert("title", "Insider");
///
/// let binding = definition.create_binding(&song);
/// assert_eq!(binding.kind(), BindingKind::Accessor);
/// assert_eq!(binding.get().unwrap(), Value::from("INSIDER"));
/// ```
///
/// [`ptr_eq`]: BindingFactory::ptr_eq
#[derive(Clone)]
pub struct BindingFactory(Arc<FactoryFn>);

impl BindingFactory {
    /// Creates a factory from a binding constructor.
    #[inline]
    pub fn new<F>(factory: F) -> Self
    where
        F: for<'a> Fn(&'a Definition, &'a [Value], Target<'a>) -> Box<dyn Binding + 'a>
            + Send
            + Sync
            + 'static,
    {
        Self(Arc::new(factory))
    }

    /// Creates a factory producing [`FnBinding`]s over a getter/setter pair.
    pub fn from_fns<G, S>(getter: G, setter: S) -> Self
    where
        G: Fn(&dyn Represented) -> Result<Value, AccessError> + Send + Sync + 'static,
        S: Fn(&mut dyn Represented, Value) -> Result<(), AccessError> + Send + Sync + 'static,
    {
        let accessors = Arc::new(Accessors {
            getter: Box::new(getter),
            setter: Box::new(setter),
        });
        Self::new(move |definition, user_options, target| {
            FnBinding::boxed(definition, user_options, target, Arc::clone(&accessors))
        })
    }

    /// Runs the factory.
    #[inline]
    pub fn call<'a>(
        &self,
        definition: &'a Definition,
        user_options: &'a [Value],
        target: Target<'a>,
    ) -> Box<dyn Binding + 'a> {
        (self.0)(definition, user_options, target)
    }

    /// Returns `true` if both are clones of the same factory.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for BindingFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BindingFactory(..)")
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::sync::Arc;
    use core::sync::atomic::{AtomicUsize, Ordering};

    use rp_reflect::{AccessError, DynamicObject, Represented, Value, impl_represented};

    use super::BindingFactory;
    use crate::binding::{Binding, BindingKind, ReflectBinding, Target};
    use crate::{Definition, Options};

    #[derive(Default)]
    struct Song {
        title: String,
    }

    impl_represented!(Song { title });

    /// A custom binding that keeps everything it was created with.
    struct Recorder<'a> {
        definition: &'a Definition,
        user_options: &'a [Value],
        target: Target<'a>,
    }

    impl Binding for Recorder<'_> {
        fn definition(&self) -> &Definition {
            self.definition
        }

        fn represented(&self) -> &dyn Represented {
            self.target.get()
        }

        fn user_options(&self) -> &[Value] {
            self.user_options
        }

        fn get(&self) -> Result<Value, AccessError> {
            Ok(Value::from("recorded"))
        }

        fn set(&mut self, _value: Value) -> Result<(), AccessError> {
            Err(AccessError::custom("recorder is read only"))
        }
    }

    fn recorder<'a>(
        definition: &'a Definition,
        user_options: &'a [Value],
        target: Target<'a>,
    ) -> Box<dyn Binding + 'a> {
        Box::new(Recorder {
            definition,
            user_options,
            target,
        })
    }

    fn address(binding: &dyn Binding) -> usize {
        core::ptr::from_ref(binding).addr()
    }

    #[test]
    fn custom_binding_is_returned_unchanged() {
        let created = Arc::new(AtomicUsize::new(0));
        let record = Arc::clone(&created);
        let factory = BindingFactory::new(move |definition, user_options, target| {
            let binding = recorder(definition, user_options, target);
            record.store(address(&*binding), Ordering::SeqCst);
            binding
        });

        let definition = Definition::new("title", Options::new().binding(factory)).unwrap();
        let song = Song {
            title: String::from("Insider"),
        };
        let user_options = [Value::from("--pretty")];
        let binding = definition.create_binding_with(&song, &user_options);

        assert_eq!(address(&*binding), created.load(Ordering::SeqCst));
        assert_eq!(binding.kind(), BindingKind::Custom);
        assert!(core::ptr::eq(binding.definition(), &definition));
        assert_eq!(binding.user_options(), &user_options);
        assert!(binding.represented().downcast_ref::<Song>().is_some());
        assert_eq!(binding.get().unwrap(), Value::from("recorded"));
    }

    #[test]
    fn custom_errors_propagate() {
        let definition =
            Definition::new("title", Options::new().binding(BindingFactory::new(recorder)))
                .unwrap();
        let mut song = Song::default();
        let mut binding = definition.create_binding(&mut song);

        let err = binding.set(Value::from("Insider")).unwrap_err();
        assert!(matches!(err, AccessError::Custom(_)));
        assert_eq!(err.to_string(), "recorder is read only");
    }

    #[test]
    fn factory_can_wrap_reflect_binding() {
        let factory = BindingFactory::new(ReflectBinding::boxed);
        let definition = Definition::new("title", Options::new().binding(factory)).unwrap();
        let mut song = Song::default();

        let mut binding = definition.create_binding(&mut song);
        binding.set(Value::from("Fatal Flu")).unwrap();
        drop(binding);
        assert_eq!(song.title, "Fatal Flu");
    }

    #[test]
    fn fn_binding_reads_and_writes() {
        let factory = BindingFactory::from_fns(
            |object| object.read("title"),
            |object, value| {
                let title = value.as_str().map(|s| s.trim()).unwrap_or_default();
                object.write("title=", Value::from(title))
            },
        );
        let definition = Definition::new("name", Options::new().binding(factory)).unwrap();
        let mut song = DynamicObject::new();

        let mut binding = definition.create_binding(&mut song);
        assert_eq!(binding.kind(), BindingKind::Accessor);
        binding.set(Value::from("  Insider ")).unwrap();
        assert_eq!(binding.get().unwrap(), Value::from("Insider"));
        drop(binding);
        assert!(!song.contains("name"));

        let mut binding = definition.create_binding(&song);
        assert!(matches!(
            binding.apply_fragment(Some(Value::Nil)),
            Err(AccessError::ReadOnly { .. })
        ));
    }

    #[test]
    fn clones_share_identity() {
        let factory = BindingFactory::new(ReflectBinding::boxed);
        assert!(factory.ptr_eq(&factory.clone()));
        assert!(!factory.ptr_eq(&BindingFactory::new(ReflectBinding::boxed)));
    }
}
