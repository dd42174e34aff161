//! Repository for the `questions` table.
//!
//! Listing and search share one filtered query so a blank search term yields
//! exactly the unfiltered listing.

use quintet_core::pagination::PageWindow;
use quintet_core::types::DbId;
use sqlx::PgPool;

use crate::models::question::{CreateQuestion, Question, UpdateQuestion};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, question, answer, category, difficulty";

/// Provides CRUD, paging and quiz selection for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question. An unknown `category` fails with a foreign-key violation.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.category)
            .bind(input.difficulty)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of questions ordered by id, optionally filtered by an
    /// `ILIKE` pattern on the question text.
    pub async fn list_page(
        pool: &PgPool,
        pattern: Option<&str>,
        window: PageWindow,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE ($1::text IS NULL OR question ILIKE $1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(pattern)
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(pool)
            .await
    }

    /// Number of questions matching the same filter as [`Self::list_page`].
    pub async fn count(pool: &PgPool, pattern: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM questions WHERE ($1::text IS NULL OR question ILIKE $1)",
        )
        .bind(pattern)
        .fetch_one(pool)
        .await
    }

    /// All questions in a category, ordered by id.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE category = $1 ORDER BY id");
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Pick one random question in `category_id` that is not in `previous`.
    ///
    /// Returns `None` once every question of the category has been played.
    pub async fn random_for_quiz(
        pool: &PgPool,
        category_id: DbId,
        previous: &[DbId],
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE category = $1 AND NOT (id = ANY($2))
             ORDER BY random()
             LIMIT 1"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .bind(previous)
            .fetch_optional(pool)
            .await
    }

    /// Update a question. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuestion,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "UPDATE questions SET
                question = COALESCE($2, question),
                answer = COALESCE($3, answer),
                category = COALESCE($4, category),
                difficulty = COALESCE($5, difficulty)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.category)
            .bind(input.difficulty)
            .fetch_optional(pool)
            .await
    }

    /// Delete a question by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
