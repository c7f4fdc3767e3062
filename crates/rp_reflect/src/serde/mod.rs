//! `serde` support for [`Value`](crate::Value).
//!
//! Values serialize to the natural data model: `Nil` as unit, lists as
//! sequences and maps as maps with their entry order kept. Deserializing
//! accepts any self-describing format.

mod de;
mod ser;
