//! Reflective access to represented objects.
//!
//! - [`Represented`]: read/write a property by accessor name.
//! - [`impl_represented!`](crate::impl_represented): generates `Represented` for structs.
//! - [`DynamicObject`]: an ordered, name-indexed represented object.
//! - [`AccessError`]: everything that can go wrong while doing so.

// -----------------------------------------------------------------------------
// Modules

mod dynamic_object;
mod error;
mod represented;

// -----------------------------------------------------------------------------
// Exports

pub use dynamic_object::DynamicObject;
pub use error::AccessError;
pub use represented::Represented;
