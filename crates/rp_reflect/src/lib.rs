//! Dynamic values and reflective accessors for represented objects.
//!
//! - [`value`]: the [`Value`] moved in and out of represented objects, and the
//!   conversions between `Value` and plain Rust field types.
//! - [`info`]: [`TypeHandle`], a queryable type identity.
//! - [`access`]: the [`Represented`] capability, the [`impl_represented!`]
//!   accessor generator and [`DynamicObject`].
//! - [`serde`]: `serde` support for [`Value`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod access;
pub mod info;
pub mod serde;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use access::{AccessError, DynamicObject, Represented};
pub use info::TypeHandle;
pub use value::{FromValue, KindError, ToValue, Value, ValueKind};
