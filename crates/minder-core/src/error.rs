//! Error taxonomy for todo operations.
//!
//! Three disjoint classes: validation failures (raised before any store
//! access), not-found (an id that matches no row), and opaque store
//! failures. Frontends map these to 422, 404, and 500 respectively.

use thiserror::Error;
use uuid::Uuid;

/// Input validation failure for a todo name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("name is {len} characters long (maximum is {max})", max = crate::todo::NAME_MAX_CHARS)]
    NameTooLong { len: usize },
}

/// Any failure a todo operation can produce.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("todo {0} not found")]
    NotFound(Uuid),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl TodoError {
    /// True when this error is the distinct not-found outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
