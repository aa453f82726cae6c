//! Model to entity mappers
//!
//! `From<Model> for Entity` converts database rows to domain objects. Rows
//! whose text columns may not map onto a domain enum use `TryFrom` instead.

mod conference;
mod preference;
mod submission;
mod talk;
mod user;

pub use preference::preference_map;
