//! Todo input types, validation, and derived view data.

pub mod service;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use minder_db::models::Todo;

use crate::error::ValidationError;

/// Maximum todo name length, counted in Unicode scalar values.
pub const NAME_MAX_CHARS: usize = 255;

/// Request to create a todo.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub name: String,
}

/// Request to rename a todo.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodo {
    pub id: Uuid,
    pub name: String,
}

/// Result of a delete: idempotent, so a miss is reported rather than raised.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeleteOutcome {
    pub deleted: bool,
}

/// The derived completed/total pair shown on the list view. Computed at
/// render time from a fetched list, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionCounts {
    pub completed: usize,
    pub total: usize,
}

impl CompletionCounts {
    pub fn of(todos: &[Todo]) -> Self {
        Self {
            completed: todos.iter().filter(|t| t.is_complete).count(),
            total: todos.len(),
        }
    }
}

/// Validate a todo name: 1 to [`NAME_MAX_CHARS`] characters.
///
/// Names are not trimmed; whitespace counts toward the bound and a
/// whitespace-only name is accepted.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let len = name.chars().count();
    if len > NAME_MAX_CHARS {
        return Err(ValidationError::NameTooLong { len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn empty_name_rejected() {
        assert_eq!(validate_name(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn single_char_accepted() {
        assert_eq!(validate_name("x"), Ok(()));
    }

    #[test]
    fn boundary_255_accepted_256_rejected() {
        assert_eq!(validate_name(&"a".repeat(255)), Ok(()));
        assert_eq!(
            validate_name(&"a".repeat(256)),
            Err(ValidationError::NameTooLong { len: 256 })
        );
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 255 three-byte characters: 765 bytes, exactly at the char bound.
        let name = "\u{3042}".repeat(255);
        assert_eq!(validate_name(&name), Ok(()));
        let name = "\u{3042}".repeat(256);
        assert_eq!(
            validate_name(&name),
            Err(ValidationError::NameTooLong { len: 256 })
        );
    }

    #[test]
    fn whitespace_only_name_accepted() {
        assert_eq!(validate_name("   "), Ok(()));
    }

    fn todo(is_complete: bool) -> Todo {
        Todo {
            id: Uuid::new_v4(),
            name: "t".to_string(),
            is_complete,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn completion_counts_empty() {
        assert_eq!(
            CompletionCounts::of(&[]),
            CompletionCounts {
                completed: 0,
                total: 0
            }
        );
    }

    #[test]
    fn completion_counts_mixed() {
        let todos = [todo(true), todo(false), todo(true)];
        assert_eq!(
            CompletionCounts::of(&todos),
            CompletionCounts {
                completed: 2,
                total: 3
            }
        );
    }
}
