//! Todo entity model and DTOs.

use quintet_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `todos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub description: String,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a todo.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTodo {
    #[validate(length(min = 1, message = "is required"))]
    pub description: String,
    /// Defaults to `false` if omitted.
    pub completed: Option<bool>,
}

/// DTO for updating a todo. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTodo {
    #[validate(length(min = 1, message = "is required"))]
    pub description: Option<String>,
    pub completed: Option<bool>,
}
