//! Domain entities and the value objects backing their invariants.

pub mod category;
pub mod types;
