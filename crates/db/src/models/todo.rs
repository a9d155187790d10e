//! Todo entity and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::types::{DbId, Timestamp};

/// A row from the `todos` table.
///
/// `completed` is kept as the stored 0/1 integer rather than a bool so the
/// JSON shape matches the wire contract (`"completed": 0`).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub completed: i64,
    pub priority: String,
    pub created_at: Timestamp,
}

/// DTO for creating a todo.
///
/// `title` is optional at the type level so that a missing field reaches the
/// handler's own validation (400 "Title is required") instead of surfacing
/// as a body deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
    pub priority: Option<String>,
}

/// DTO for partially updating a todo.
///
/// Absent and `null` fields both mean "keep the existing value". Explicit
/// falsy values (`"completed": 0`, `"title": ""`) are applied as given;
/// title emptiness is deliberately not re-validated on update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<i64>,
    pub priority: Option<String>,
}
