//! Todo service layer.
//!
//! Each operation validates its input, issues exactly one statement against
//! the store, and maps a missed id to [`TodoError::NotFound`] — except
//! delete, which stays idempotent and reports the miss in its outcome.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use minder_db::models::Todo;
use minder_db::queries::todos;

use super::{CreateTodo, DeleteOutcome, UpdateTodo, validate_name};
use crate::error::TodoError;

/// Create a todo. The row starts incomplete with a server-generated id and
/// creation timestamp.
pub async fn create_todo(pool: &PgPool, req: CreateTodo) -> Result<Todo, TodoError> {
    validate_name(&req.name)?;

    let todo = todos::insert_todo(pool, &req.name).await?;
    info!(id = %todo.id, "todo created");
    Ok(todo)
}

/// Overwrite a todo's name, leaving every other column untouched.
pub async fn update_todo(pool: &PgPool, req: UpdateTodo) -> Result<Todo, TodoError> {
    validate_name(&req.name)?;

    let todo = todos::update_todo_name(pool, req.id, &req.name)
        .await?
        .ok_or(TodoError::NotFound(req.id))?;
    info!(id = %todo.id, "todo renamed");
    Ok(todo)
}

/// Overwrite a todo's completion flag.
pub async fn set_complete(pool: &PgPool, id: Uuid, complete: bool) -> Result<Todo, TodoError> {
    let todo = todos::set_todo_complete(pool, id, complete)
        .await?
        .ok_or(TodoError::NotFound(id))?;
    info!(id = %todo.id, complete, "todo completion set");
    Ok(todo)
}

/// Delete a todo. Idempotent: a missing id reports `deleted = false`
/// rather than failing.
pub async fn delete_todo(pool: &PgPool, id: Uuid) -> Result<DeleteOutcome, TodoError> {
    let deleted = todos::delete_todo(pool, id).await?;
    if deleted {
        info!(%id, "todo deleted");
    }
    Ok(DeleteOutcome { deleted })
}

/// Fetch a single todo for the edit view. A missing id is the distinct
/// not-found outcome.
pub async fn get_todo(pool: &PgPool, id: Uuid) -> Result<Todo, TodoError> {
    todos::get_todo(pool, id)
        .await?
        .ok_or(TodoError::NotFound(id))
}

/// List all todos in creation order.
pub async fn list_todos(pool: &PgPool) -> Result<Vec<Todo>, TodoError> {
    Ok(todos::list_todos(pool).await?)
}
