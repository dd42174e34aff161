//! Repository for the `todos` table.

use quintet_core::types::DbId;
use sqlx::PgPool;

use crate::models::todo::{CreateTodo, Todo, UpdateTodo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, description, completed, created_at, updated_at";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (description, completed)
             VALUES ($1, COALESCE($2, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.description)
            .bind(input.completed)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all todos in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY id");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// Update a todo. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET
                description = COALESCE($2, description),
                completed = COALESCE($3, completed),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.completed)
            .fetch_optional(pool)
            .await
    }

    /// Delete a todo by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
