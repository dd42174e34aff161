//! Repository for the `drinks` table.

use quintet_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::drink::{CreateDrink, Drink, UpdateDrink};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, recipe, created_at, updated_at";

/// Provides CRUD operations for drinks.
pub struct DrinkRepo;

impl DrinkRepo {
    /// Insert a new drink. A duplicate title fails with the
    /// `uq_drinks_title` unique violation.
    pub async fn create(pool: &PgPool, input: &CreateDrink) -> Result<Drink, sqlx::Error> {
        let query = format!(
            "INSERT INTO drinks (title, recipe)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Drink>(&query)
            .bind(&input.title)
            .bind(Json(&input.recipe))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Drink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drinks WHERE id = $1");
        sqlx::query_as::<_, Drink>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Drink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drinks ORDER BY id");
        sqlx::query_as::<_, Drink>(&query).fetch_all(pool).await
    }

    /// Update a drink. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDrink,
    ) -> Result<Option<Drink>, sqlx::Error> {
        let query = format!(
            "UPDATE drinks SET
                title = COALESCE($2, title),
                recipe = COALESCE($3, recipe),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Drink>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.recipe.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Delete a drink by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
