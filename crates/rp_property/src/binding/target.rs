use rp_reflect::Represented;

// -----------------------------------------------------------------------------
// Target

/// The represented object a binding operates on.
///
/// Rendering only needs a shared borrow; parsing needs an exclusive one. A
/// binding created over [`Target::Ref`] can read but every write fails with
/// [`AccessError::ReadOnly`](rp_reflect::AccessError::ReadOnly).
pub enum Target<'a> {
    Ref(&'a dyn Represented),
    Mut(&'a mut dyn Represented),
}

impl Target<'_> {
    #[inline]
    pub fn get(&self) -> &dyn Represented {
        match self {
            Self::Ref(object) => *object,
            Self::Mut(object) => &**object,
        }
    }

    /// Returns the object mutably, or `None` for a shared target.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut dyn Represented> {
        match self {
            Self::Ref(_) => None,
            Self::Mut(object) => Some(&mut **object),
        }
    }

    #[inline]
    pub const fn is_mut(&self) -> bool {
        matches!(self, Self::Mut(_))
    }
}

impl<'a, T: Represented> From<&'a T> for Target<'a> {
    #[inline]
    fn from(value: &'a T) -> Self {
        Self::Ref(value)
    }
}

impl<'a, T: Represented> From<&'a mut T> for Target<'a> {
    #[inline]
    fn from(value: &'a mut T) -> Self {
        Self::Mut(value)
    }
}

impl core::fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let variant = if self.is_mut() { "Mut" } else { "Ref" };
        f.debug_tuple(variant).field(&self.get().type_path()).finish()
    }
}
