//! Declarative property definitions for object serialization.
//!
//! This crate bundles the `rp_*` crates:
//!
//! - [`reflect`]: dynamic values and accessors of represented objects.
//! - [`property`]: property definitions, option bags and bindings.
//! - [`utils`]: fixed-seed hash containers.
//!
//! ```
//! use rp_core::property::{Binding, Definition, Options};
//! use rp_core::reflect::{DynamicObject, Value};
//!
//! let title = Definition::new("title", Options::new().default_value("Insider")).unwrap();
//! let mut song = DynamicObject::new();
//! assert!(title.create_binding(&song).get().is_err());
//!
//! title.create_binding(&mut song).apply_fragment(None).unwrap();
//! assert_eq!(song.get("title"), Some(&Value::from("Insider")));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use rp_property as property;
pub use rp_reflect as reflect;
pub use rp_utils as utils;
