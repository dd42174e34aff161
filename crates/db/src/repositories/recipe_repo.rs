//! Repository for the `recipes` table and the ingredients each recipe owns.
//!
//! Writes that touch both tables run in one transaction so a failing
//! ingredient insert leaves the recipe untouched.

use std::collections::HashMap;

use quintet_core::types::DbId;
use sqlx::PgPool;

use crate::models::recipe::{
    CreateRecipe, Ingredient, NewIngredient, Recipe, RecipeWithIngredients, UpdateRecipe,
};
use crate::repositories::ingredient_repo::COLUMNS as INGREDIENT_COLUMNS;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, procedure, time_minutes";

/// Provides CRUD operations for recipes and their nested ingredients.
pub struct RecipeRepo;

impl RecipeRepo {
    /// Insert a recipe and any nested ingredients in a single transaction.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRecipe,
    ) -> Result<RecipeWithIngredients, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO recipes (name, procedure, time_minutes)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let recipe = sqlx::query_as::<_, Recipe>(&insert_query)
            .bind(&input.name)
            .bind(&input.procedure)
            .bind(input.time)
            .fetch_one(&mut *tx)
            .await?;

        let ingredients = match &input.ingredients {
            Some(items) => Self::insert_ingredients_inner(&mut tx, recipe.id, items).await?,
            None => Vec::new(),
        };

        tx.commit().await?;
        Ok(RecipeWithIngredients {
            recipe,
            ingredients,
        })
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes WHERE id = $1");
        sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a recipe by ID, enriched with its ingredients.
    pub async fn find_with_ingredients(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RecipeWithIngredients>, sqlx::Error> {
        let Some(recipe) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let query = format!(
            "SELECT {INGREDIENT_COLUMNS} FROM ingredients WHERE recipe_id = $1 ORDER BY id"
        );
        let ingredients = sqlx::query_as::<_, Ingredient>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;
        Ok(Some(RecipeWithIngredients {
            recipe,
            ingredients,
        }))
    }

    /// List every recipe with its ingredients, using two queries total.
    pub async fn list_with_ingredients(
        pool: &PgPool,
    ) -> Result<Vec<RecipeWithIngredients>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes ORDER BY id");
        let recipes = sqlx::query_as::<_, Recipe>(&query).fetch_all(pool).await?;

        let query = format!("SELECT {INGREDIENT_COLUMNS} FROM ingredients ORDER BY recipe_id, id");
        let all_ingredients = sqlx::query_as::<_, Ingredient>(&query)
            .fetch_all(pool)
            .await?;

        let mut by_recipe: HashMap<DbId, Vec<Ingredient>> = HashMap::new();
        for ingredient in all_ingredients {
            by_recipe
                .entry(ingredient.recipe_id)
                .or_default()
                .push(ingredient);
        }

        Ok(recipes
            .into_iter()
            .map(|recipe| {
                let ingredients = by_recipe.remove(&recipe.id).unwrap_or_default();
                RecipeWithIngredients {
                    recipe,
                    ingredients,
                }
            })
            .collect())
    }

    /// Update a recipe. Only non-`None` scalar fields are applied; if
    /// `ingredients` is `Some`, the whole ingredient set is replaced.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRecipe,
    ) -> Result<Option<RecipeWithIngredients>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE recipes SET
                name = COALESCE($2, name),
                procedure = COALESCE($3, procedure),
                time_minutes = COALESCE($4, time_minutes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(recipe) = sqlx::query_as::<_, Recipe>(&update_query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.procedure)
            .bind(input.time)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let ingredients = match &input.ingredients {
            Some(items) => {
                sqlx::query("DELETE FROM ingredients WHERE recipe_id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
                Self::insert_ingredients_inner(&mut tx, id, items).await?
            }
            None => {
                let query = format!(
                    "SELECT {INGREDIENT_COLUMNS} FROM ingredients WHERE recipe_id = $1 ORDER BY id"
                );
                sqlx::query_as::<_, Ingredient>(&query)
                    .bind(id)
                    .fetch_all(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        Ok(Some(RecipeWithIngredients {
            recipe,
            ingredients,
        }))
    }

    /// Delete a recipe and, by cascade, its ingredients. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Ingredient helpers
    // -----------------------------------------------------------------------

    async fn insert_ingredients_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        recipe_id: DbId,
        items: &[NewIngredient],
    ) -> Result<Vec<Ingredient>, sqlx::Error> {
        let query = format!(
            "INSERT INTO ingredients (recipe_id, name, optional, measurement, measurement_unit)
             VALUES ($1, $2, COALESCE($3, false), $4, $5)
             RETURNING {INGREDIENT_COLUMNS}"
        );
        let mut inserted = Vec::with_capacity(items.len());
        for item in items {
            let ingredient = sqlx::query_as::<_, Ingredient>(&query)
                .bind(recipe_id)
                .bind(&item.name)
                .bind(item.optional)
                .bind(item.measurement)
                .bind(&item.measurement_unit)
                .fetch_one(&mut **tx)
                .await?;
            inserted.push(ingredient);
        }
        Ok(inserted)
    }
}
