//! Repository for the `todos` table.
//!
//! Absence is a normal result here: lookups return `Ok(None)` and deletes
//! return `Ok(false)` for unknown ids. Only genuine storage faults surface
//! as `Err`.

use sqlx::SqlitePool;
use todo_core::types::DbId;

use crate::models::todo::{Todo, UpdateTodo};

/// Column list for `todos` queries.
const COLUMNS: &str = "id, title, completed, priority, created_at";

/// Provides data access for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// List all todos, newest first.
    ///
    /// `created_at` has one-second resolution, so `id` breaks ties between
    /// rows inserted within the same second (ids are monotonic, so
    /// newest-first still holds).
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// Find a todo by its id. Returns `None` if no row matches.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = ?1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new todo and return the freshly created row.
    ///
    /// `priority` falls back to `medium` when not supplied; `completed` and
    /// `created_at` come from the column defaults. `RETURNING` hands back
    /// the row as stored so the caller observes every engine-assigned value.
    pub async fn create(
        pool: &SqlitePool,
        title: &str,
        priority: Option<&str>,
    ) -> Result<Todo, sqlx::Error> {
        let query =
            format!("INSERT INTO todos (title, priority) VALUES (?1, ?2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Todo>(&query)
            .bind(title)
            .bind(priority.unwrap_or("medium"))
            .fetch_one(pool)
            .await
    }

    /// Merge-update a todo: each supplied field replaces the stored value,
    /// everything else is preserved by reading the existing row first.
    ///
    /// Returns `None` if the todo does not exist. Note that an empty title
    /// is accepted here; only creation validates title contents.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        changes: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let Some(existing) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let title = changes.title.clone().unwrap_or(existing.title);
        let completed = changes.completed.unwrap_or(existing.completed);
        let priority = changes.priority.clone().unwrap_or(existing.priority);

        let query = format!(
            "UPDATE todos SET title = ?1, completed = ?2, priority = ?3 \
             WHERE id = ?4 RETURNING {COLUMNS}"
        );
        let todo = sqlx::query_as::<_, Todo>(&query)
            .bind(title)
            .bind(completed)
            .bind(priority)
            .bind(id)
            .fetch_one(pool)
            .await?;

        Ok(Some(todo))
    }

    /// Delete a todo by id. Returns whether a row was actually removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
