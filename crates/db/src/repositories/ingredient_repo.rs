//! Repository for the `ingredients` table.

use quintet_core::types::DbId;
use sqlx::PgPool;

use crate::models::recipe::{CreateIngredient, Ingredient, UpdateIngredient};

/// Column list shared with [`super::RecipeRepo`].
pub(crate) const COLUMNS: &str = "id, recipe_id, name, optional, measurement, measurement_unit";

/// Provides CRUD operations for individual ingredients.
pub struct IngredientRepo;

impl IngredientRepo {
    /// Insert an ingredient. A dangling `recipe_id` fails with a foreign-key violation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateIngredient,
    ) -> Result<Ingredient, sqlx::Error> {
        let query = format!(
            "INSERT INTO ingredients (recipe_id, name, optional, measurement, measurement_unit)
             VALUES ($1, $2, COALESCE($3, false), $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ingredient>(&query)
            .bind(input.recipe_id)
            .bind(&input.name)
            .bind(input.optional)
            .bind(input.measurement)
            .bind(&input.measurement_unit)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Ingredient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ingredients WHERE id = $1");
        sqlx::query_as::<_, Ingredient>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Ingredient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ingredients ORDER BY id");
        sqlx::query_as::<_, Ingredient>(&query).fetch_all(pool).await
    }

    /// Update an ingredient. Only non-`None` fields in `input` are applied.
    ///
    /// Moving it to another recipe with `recipe_id` is allowed; the target
    /// must exist. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateIngredient,
    ) -> Result<Option<Ingredient>, sqlx::Error> {
        let query = format!(
            "UPDATE ingredients SET
                recipe_id = COALESCE($2, recipe_id),
                name = COALESCE($3, name),
                optional = COALESCE($4, optional),
                measurement = COALESCE($5, measurement),
                measurement_unit = COALESCE($6, measurement_unit)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ingredient>(&query)
            .bind(id)
            .bind(input.recipe_id)
            .bind(&input.name)
            .bind(input.optional)
            .bind(input.measurement)
            .bind(&input.measurement_unit)
            .fetch_optional(pool)
            .await
    }

    /// Delete an ingredient by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ingredients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
