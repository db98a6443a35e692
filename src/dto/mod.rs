//! Plain serializable views of domain entities.

pub mod categories;
