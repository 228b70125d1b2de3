//! `minder serve` command: the server-rendered web app.
//!
//! Page loads and form submissions drive everything: the list page posts
//! forms for create/rename/toggle and redirects back to `/`, while delete
//! returns a structured JSON outcome so the list view can refresh in place.

use std::net::SocketAddr;

use anyhow::Result;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use minder_core::error::TodoError;
use minder_core::todo::service;
use minder_core::todo::{CompletionCounts, CreateTodo, DeleteOutcome, UpdateTodo};
use minder_db::models::Todo;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn internal(err: anyhow::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("{err:#}"),
        }
    }
}

impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::Validation(e) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: e.to_string(),
            },
            TodoError::NotFound(id) => Self::not_found(format!("todo {id} not found")),
            TodoError::Store(e) => Self::internal(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Form types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CreateForm {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RenameForm {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ToggleForm {
    complete: bool,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router(pool: PgPool) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/todos", get(list_todos_handler))
        .route("/todos", post(create_todo_handler))
        .route("/todos/{id}/edit", get(edit_page))
        .route("/todos/{id}", post(rename_todo_handler))
        .route("/todos/{id}/toggle", post(toggle_todo_handler))
        .route("/todos/{id}/delete", post(delete_todo_handler))
        .layer(CorsLayer::permissive())
        .with_state(pool)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(pool: PgPool, bind: &str, port: u16) -> Result<()> {
    let app = build_router(pool);
    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    tracing::info!("minder serve listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("minder serve shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
}

// ---------------------------------------------------------------------------
// HTML rendering
// ---------------------------------------------------------------------------

/// Escape text for interpolation into HTML body or attribute positions.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_row(todo: &Todo) -> String {
    let name = escape_html(&todo.name);
    let mark = if todo.is_complete { "[x]" } else { "[ ]" };
    // The toggle form posts the desired state, the opposite of the current one.
    let next = !todo.is_complete;
    format!(
        "<tr>\
<td><form method=\"post\" action=\"/todos/{id}/toggle\">\
<input type=\"hidden\" name=\"complete\" value=\"{next}\">\
<button type=\"submit\" aria-label=\"toggle\">{mark}</button></form></td>\
<td><a href=\"/todos/{id}/edit\">{name}</a></td>\
<td>{created}</td>\
<td><button onclick=\"deleteTodo('{id}')\">Delete</button></td>\
</tr>",
        id = todo.id,
        created = todo.created_at.format("%Y-%m-%d %H:%M UTC"),
    )
}

fn render_index(todos: &[Todo]) -> String {
    let counts = CompletionCounts::of(todos);
    let badge = if counts.total > 0 {
        format!(
            "<p><em>{} of {} completed</em></p>",
            counts.completed, counts.total
        )
    } else {
        String::new()
    };

    let rows = if todos.is_empty() {
        "<tr><td colspan=\"4\">No todos yet.</td></tr>".to_string()
    } else {
        todos.iter().map(render_row).collect::<Vec<_>>().join("\n")
    };

    format!(
        "<!DOCTYPE html>\
<html><head><title>minder</title></head><body>\
<h1>Todo List</h1>\
{badge}\
<form method=\"post\" action=\"/todos\">\
<input name=\"name\" placeholder=\"Enter your todo...\" aria-label=\"Name\" autofocus>\
<button type=\"submit\">Add</button></form>\
<table><tr><th></th><th>Name</th><th>Created</th><th></th></tr>{rows}</table>\
<script>\
async function deleteTodo(id) {{\
  await fetch('/todos/' + id + '/delete', {{ method: 'POST' }});\
  window.location.reload();\
}}\
</script>\
</body></html>"
    )
}

fn render_edit(todo: &Todo) -> String {
    let name = escape_html(&todo.name);
    format!(
        "<!DOCTYPE html>\
<html><head><title>minder - edit</title></head><body>\
<p><a href=\"/\">&larr; Todo List</a></p>\
<h1>Edit Todo</h1>\
<form method=\"post\" action=\"/todos/{id}\">\
<input name=\"name\" value=\"{name}\" aria-label=\"Name\" autofocus>\
<button type=\"submit\">Save</button></form>\
</body></html>",
        id = todo.id,
    )
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn index(State(pool): State<PgPool>) -> Result<Html<String>, AppError> {
    let todos = service::list_todos(&pool).await?;
    Ok(Html(render_index(&todos)))
}

async fn list_todos_handler(State(pool): State<PgPool>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = service::list_todos(&pool).await?;
    Ok(Json(todos))
}

async fn create_todo_handler(
    State(pool): State<PgPool>,
    Form(form): Form<CreateForm>,
) -> Result<Redirect, AppError> {
    service::create_todo(&pool, CreateTodo { name: form.name }).await?;
    Ok(Redirect::to("/"))
}

async fn edit_page(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let todo = service::get_todo(&pool, id).await?;
    Ok(Html(render_edit(&todo)))
}

async fn rename_todo_handler(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Form(form): Form<RenameForm>,
) -> Result<Redirect, AppError> {
    service::update_todo(&pool, UpdateTodo { id, name: form.name }).await?;
    Ok(Redirect::to("/"))
}

async fn toggle_todo_handler(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Form(form): Form<ToggleForm>,
) -> Result<Redirect, AppError> {
    service::set_complete(&pool, id, form.complete).await?;
    Ok(Redirect::to("/"))
}

async fn delete_todo_handler(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteOutcome>, AppError> {
    let outcome = service::delete_todo(&pool, id).await?;
    Ok(Json(outcome))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
