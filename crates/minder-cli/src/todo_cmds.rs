//! Operator CRUD commands: `add`, `list`, `rename`, `done`, `undone`, `rm`.

use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use minder_core::todo::service;
use minder_core::todo::{CompletionCounts, CreateTodo, UpdateTodo};

fn parse_id(id_str: &str) -> Result<Uuid> {
    Uuid::parse_str(id_str).with_context(|| format!("invalid todo ID: {id_str}"))
}

/// Run the add command: create a todo and print the new row.
pub async fn run_add(pool: &PgPool, name: &str) -> Result<()> {
    let todo = service::create_todo(
        pool,
        CreateTodo {
            name: name.to_string(),
        },
    )
    .await?;

    println!("Added {} ({})", todo.name, todo.id);
    Ok(())
}

/// Run the list command: print all todos in creation order plus the
/// completed/total pair.
pub async fn run_list(pool: &PgPool) -> Result<()> {
    let todos = service::list_todos(pool).await?;

    if todos.is_empty() {
        println!("No todos found.");
        return Ok(());
    }

    println!("{:<38} {:<6} {:<50}", "ID", "DONE", "NAME");
    println!("{}", "-".repeat(96));

    for todo in &todos {
        let done_mark = if todo.is_complete { "[x]" } else { "[ ]" };
        let name_display = if todo.name.chars().count() > 48 {
            let truncated: String = todo.name.chars().take(45).collect();
            format!("{truncated}...")
        } else {
            todo.name.clone()
        };
        println!("{:<38} {:<6} {:<50}", todo.id, done_mark, name_display);
    }

    let counts = CompletionCounts::of(&todos);
    println!();
    println!("{} of {} completed", counts.completed, counts.total);

    Ok(())
}

/// Run the rename command: overwrite a todo's name.
pub async fn run_rename(pool: &PgPool, id_str: &str, name: &str) -> Result<()> {
    let id = parse_id(id_str)?;
    let todo = service::update_todo(
        pool,
        UpdateTodo {
            id,
            name: name.to_string(),
        },
    )
    .await?;

    println!("Renamed {} to {}", todo.id, todo.name);
    Ok(())
}

/// Run the done/undone command: set a todo's completion flag.
pub async fn run_set_complete(pool: &PgPool, id_str: &str, complete: bool) -> Result<()> {
    let id = parse_id(id_str)?;
    let todo = service::set_complete(pool, id, complete).await?;

    let state = if todo.is_complete { "done" } else { "not done" };
    println!("Marked {} as {state}", todo.id);
    Ok(())
}

/// Run the rm command: delete a todo. Reports when the id matched nothing.
pub async fn run_rm(pool: &PgPool, id_str: &str) -> Result<()> {
    let id = parse_id(id_str)?;
    let outcome = service::delete_todo(pool, id).await?;

    if outcome.deleted {
        println!("Deleted {id}");
    } else {
        println!("Nothing to delete: no todo with id {id}");
    }
    Ok(())
}
