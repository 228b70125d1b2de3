use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A todo row.
///
/// `id` and `created_at` are server-generated at insert and never change;
/// `name` and `is_complete` are the only mutable columns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: Uuid,
    pub name: String,
    pub is_complete: bool,
    pub created_at: DateTime<Utc>,
}
