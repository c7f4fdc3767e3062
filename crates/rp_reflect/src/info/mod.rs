//! Type identity for typed properties.
//!
//! - [`TypeHandle`]: a `TypeId` plus the type's path, comparable and hashable
//!   by `TypeId` only.

mod type_handle;

pub use type_handle::TypeHandle;
