//! Database query functions for the `todos` table.
//!
//! One function per statement. Row mutations return `Option<Todo>` (via
//! `UPDATE ... RETURNING *`) so a missing id is always visible to the
//! caller; the not-found policy lives in the service layer, not here.

use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Todo;

/// Insert a new todo row. Returns the inserted row with server-generated
/// defaults (id, is_complete, created_at).
pub async fn insert_todo(pool: &PgPool, name: &str) -> Result<Todo> {
    let todo = sqlx::query_as::<_, Todo>(
        "INSERT INTO todos (name) \
         VALUES ($1) \
         RETURNING *",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .context("failed to insert todo")?;

    Ok(todo)
}

/// Fetch a single todo by ID.
pub async fn get_todo(pool: &PgPool, id: Uuid) -> Result<Option<Todo>> {
    let todo = sqlx::query_as::<_, Todo>("SELECT * FROM todos WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch todo")?;

    Ok(todo)
}

/// List all todos in creation order. The id tiebreak keeps rows inserted
/// with equal timestamps in a stable order.
pub async fn list_todos(pool: &PgPool) -> Result<Vec<Todo>> {
    let todos =
        sqlx::query_as::<_, Todo>("SELECT * FROM todos ORDER BY created_at ASC, id ASC")
            .fetch_all(pool)
            .await
            .context("failed to list todos")?;

    Ok(todos)
}

/// Overwrite the name of a todo. Returns the updated row, or `None` when no
/// row matches the id.
pub async fn update_todo_name(pool: &PgPool, id: Uuid, name: &str) -> Result<Option<Todo>> {
    let todo = sqlx::query_as::<_, Todo>(
        "UPDATE todos SET name = $1 WHERE id = $2 \
         RETURNING *",
    )
    .bind(name)
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("failed to update todo name")?;

    Ok(todo)
}

/// Overwrite the completion flag of a todo. Returns the updated row, or
/// `None` when no row matches the id.
pub async fn set_todo_complete(pool: &PgPool, id: Uuid, is_complete: bool) -> Result<Option<Todo>> {
    let todo = sqlx::query_as::<_, Todo>(
        "UPDATE todos SET is_complete = $1 WHERE id = $2 \
         RETURNING *",
    )
    .bind(is_complete)
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("failed to update todo completion")?;

    Ok(todo)
}

/// Delete a todo. Returns `true` when a row was removed, `false` when the
/// id matched nothing.
pub async fn delete_todo(pool: &PgPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM todos WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .context("failed to delete todo")?;

    Ok(result.rows_affected() > 0)
}
