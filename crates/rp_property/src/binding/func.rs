use alloc::boxed::Box;
use alloc::sync::Arc;

use rp_reflect::{AccessError, Represented, Value};

use super::{Binding, BindingKind, Target, read_only};
use crate::Definition;

pub(super) type GetterFn = dyn Fn(&dyn Represented) -> Result<Value, AccessError> + Send + Sync;
pub(super) type SetterFn =
    dyn Fn(&mut dyn Represented, Value) -> Result<(), AccessError> + Send + Sync;

/// An injected getter/setter pair, shared by every binding a factory creates.
pub(super) struct Accessors {
    pub(super) getter: Box<GetterFn>,
    pub(super) setter: Box<SetterFn>,
}

// -----------------------------------------------------------------------------
// FnBinding

/// A binding that delegates to caller-supplied accessor closures.
///
/// Created through [`BindingFactory::from_fns`](super::BindingFactory::from_fns).
pub struct FnBinding<'a> {
    definition: &'a Definition,
    user_options: &'a [Value],
    target: Target<'a>,
    accessors: Arc<Accessors>,
}

impl<'a> FnBinding<'a> {
    pub(super) fn boxed(
        definition: &'a Definition,
        user_options: &'a [Value],
        target: Target<'a>,
        accessors: Arc<Accessors>,
    ) -> Box<dyn Binding + 'a> {
        Box::new(Self {
            definition,
            user_options,
            target,
            accessors,
        })
    }
}

impl Binding for FnBinding<'_> {
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
        BindingKind::Accessor
    }

    fn get(&self) -> Result<Value, AccessError> {
        (self.accessors.getter)(self.target.get())
    }

    fn set(&mut self, value: Value) -> Result<(), AccessError> {
        match self.target.get_mut() {
            Some(object) => (self.accessors.setter)(object, value),
            None => Err(read_only(self.definition, &self.target)),
        }
    }
}

impl core::fmt::Debug for FnBinding<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnBinding")
            .field("definition", &self.definition.name())
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
