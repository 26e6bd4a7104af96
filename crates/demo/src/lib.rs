//! Sample bakery built on the domain model.
//!
//! The domain crate leaves entity registries to its caller; [`Bakery`] is
//! that caller for the demo binary.

pub mod bakery;
pub mod config;
pub mod error;

pub use bakery::{Bakery, Highlights, report, seed};
pub use config::{Config, LogFormat};
pub use error::{DemoError, Result};
