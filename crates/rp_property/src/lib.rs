//! Property definitions and bindings.
//!
//! A [`Definition`] declares one property of a represented type: its name,
//! its accessor names and an open [`Options`] bag from which the type,
//! shape, default and nil policies are derived. [`Definitions`] keeps the
//! ordered schema of a type.
//!
//! To move a value in or out of an object, a definition creates a
//! [`Binding`] for it. The default [`ReflectBinding`] goes through the
//! [`Represented`](rp_reflect::Represented) accessors of the object; a
//! [`BindingFactory`] in the `binding` option replaces it.
//!
//! ```
//! use rp_property::{Binding, Definitions, Options};
//! use rp_reflect::{Value, impl_represented};
//!
//! #[derive(Default)]
//! struct Song {
//!     title: Option<String>,
//!     composers: Vec<String>,
//! }
//!
//! impl_represented!(Song { title, composers });
//!
//! let mut schema = Definitions::new();
//! schema.property("title", Options::new()).unwrap();
//! schema.property("composers", Options::new().collection(true).tag("composer")).unwrap();
//!
//! let song = Song::default();
//! let rendered: Vec<_> = schema
//!     .iter()
//!     .filter_map(|definition| {
//!         let value = definition.create_binding(&song).value_for_render().unwrap()?;
//!         Some((definition.wire_name(), value))
//!     })
//!     .collect();
//!
//! assert_eq!(rendered, [("composer", Value::List(vec![]))]);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod binding;
pub mod options;

mod definition;
mod definitions;
mod error;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use binding::{Binding, BindingFactory, BindingKind, FnBinding, ReflectBinding, Target};
pub use definition::Definition;
pub use definitions::Definitions;
pub use error::DefinitionError;
pub use options::{OptionKey, OptionValue, Options, Prototype};
