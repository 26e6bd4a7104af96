//! Shared types for the bakery domain.

mod types;

pub use types::{EntityId, IdSequence};
