use core::any::{TypeId, type_name};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// TypeHandle

/// A queryable handle to a Rust type.
///
/// Used as the value of the `class` and `extend` property options.
///
/// The path comes from [`core::any::type_name`], so it is meant for
/// diagnostics and wire naming, not as a stable identifier. Equality and
/// hashing only look at the [`TypeId`].
///
/// # Examples
///
/// ```
/// use rp_reflect::TypeHandle;
///
/// struct Song;
///
/// let handle = TypeHandle::of::<Song>();
/// assert!(handle.type_is::<Song>());
/// assert_eq!(handle.type_ident(), "Song");
/// assert_eq!(handle, TypeHandle::of::<Song>());
/// assert_ne!(handle, TypeHandle::of::<i32>());
/// ```
#[derive(Clone, Copy)]
pub struct TypeHandle {
    ty_id: TypeId,
    type_path: &'static str,
}

impl TypeHandle {
    /// Creates a [`TypeHandle`] for `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            type_path: type_name::<T>(),
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: ?Sized + 'static>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the full type path, e.g. `my_crate::model::Song`.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the type name without module path and generics.
    pub fn type_ident(&self) -> &'static str {
        let path = self.type_path;
        let end = path.find('<').unwrap_or(path.len());
        let head = &path[..end];
        match head.rfind("::") {
            Some(index) => &head[index + 2..],
            None => head,
        }
    }
}

impl PartialEq for TypeHandle {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ty_id == other.ty_id
    }
}

impl Eq for TypeHandle {}

impl Hash for TypeHandle {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ty_id.hash(state);
    }
}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeHandle").field(&self.type_path).finish()
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.type_path)
    }
}
