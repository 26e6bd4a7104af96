//! Demo error types.

use common::EntityId;
use domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while building or reporting on the sample bakery.
#[derive(Debug, Error)]
pub enum DemoError {
    /// An entity rejected its input.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A sample date could not be parsed.
    #[error("Invalid date: {0}")]
    Date(#[from] chrono::ParseError),

    /// A registry lookup found nothing.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: EntityId },
}

/// Result type for demo operations.
pub type Result<T> = std::result::Result<T, DemoError>;
