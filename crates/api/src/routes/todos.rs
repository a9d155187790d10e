//! Handlers for the todo collection and item routes.
//!
//! Handlers validate input, call the repository, and translate results into
//! HTTP responses. Absences become 404s here; storage faults bubble out as
//! [`AppError`] and are rendered by its `IntoResponse` impl.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use todo_core::error::CoreError;
use todo_core::types::DbId;
use todo_db::models::todo::{CreateTodo, Todo, UpdateTodo};
use todo_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// The uniform not-found error for this resource.
fn todo_not_found() -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Todo" })
}

/// Parse an `{id}` path segment.
///
/// A non-numeric segment can never match a stored row, so it is reported as
/// not-found rather than as a malformed request.
fn parse_id(raw: &str) -> AppResult<DbId> {
    raw.parse().map_err(|_| todo_not_found())
}

/// GET /api/todos
///
/// List all todos, newest first. An empty store yields `[]`, not an error.
pub async fn list_todos(State(state): State<AppState>) -> AppResult<Json<Vec<Todo>>> {
    let todos = TodoRepo::list(&state.pool).await?;

    Ok(Json(todos))
}

/// GET /api/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Todo>> {
    let id = parse_id(&id)?;
    let todo = TodoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(todo_not_found)?;

    Ok(Json(todo))
}

/// POST /api/todos
///
/// Create a todo. The title must be non-empty after trimming; the trimmed
/// title is what gets stored. Priority defaults to `medium` in the
/// repository when omitted.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let title = input.title.as_deref().unwrap_or("").trim();
    if title.is_empty() {
        return Err(CoreError::Validation("Title is required".to_string()).into());
    }

    let todo = TodoRepo::create(&state.pool, title, input.priority.as_deref()).await?;

    tracing::info!(todo_id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /api/todos/{id}
///
/// Merge-update a todo. The body is passed through as-is: omitted and null
/// fields keep their stored values, supplied fields replace them. Unlike
/// create, the title is not re-validated here.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(changes): Json<UpdateTodo>,
) -> AppResult<Json<Todo>> {
    let id = parse_id(&id)?;
    let todo = TodoRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(todo_not_found)?;

    tracing::info!(todo_id = id, "Todo updated");

    Ok(Json(todo))
}

/// DELETE /api/todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let id = parse_id(&id)?;
    let deleted = TodoRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(todo_not_found());
    }

    tracing::info!(todo_id = id, "Todo deleted");

    Ok(Json(json!({ "message": "Todo deleted successfully" })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/{id}", get(get_todo).put(update_todo).delete(delete_todo))
}
