//! Deserialized input forms and their validated payload counterparts.

pub mod categories;
