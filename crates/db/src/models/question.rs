//! Trivia question model and DTOs.

use quintet_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: DbId,
    pub difficulty: i32,
}

/// DTO for creating a question.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestion {
    #[validate(length(min = 1, message = "is required"))]
    pub question: String,
    #[validate(length(min = 1, message = "is required"))]
    pub answer: String,
    pub difficulty: i32,
    pub category: DbId,
}

/// DTO for updating a question. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateQuestion {
    #[validate(length(min = 1, message = "is required"))]
    pub question: Option<String>,
    #[validate(length(min = 1, message = "is required"))]
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<DbId>,
}
