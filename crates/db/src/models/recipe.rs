//! Recipe and ingredient models and DTOs.

use quintet_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `recipes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Recipe {
    pub id: DbId,
    pub name: String,
    pub procedure: Option<String>,
    /// Cooking time in minutes.
    #[sqlx(rename = "time_minutes")]
    pub time: Option<i32>,
}

/// A row from the `ingredients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ingredient {
    pub id: DbId,
    pub recipe_id: DbId,
    pub name: String,
    pub optional: bool,
    pub measurement: Option<i32>,
    pub measurement_unit: Option<String>,
}

/// A recipe together with the ingredients it owns.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeWithIngredients {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub ingredients: Vec<Ingredient>,
}

/// Ingredient payload nested inside a recipe create/update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewIngredient {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    pub optional: Option<bool>,
    pub measurement: Option<i32>,
    pub measurement_unit: Option<String>,
}

/// DTO for creating a recipe, optionally with its ingredients.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRecipe {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    pub procedure: Option<String>,
    pub time: Option<i32>,
    #[validate(nested)]
    pub ingredients: Option<Vec<NewIngredient>>,
}

/// DTO for updating a recipe.
///
/// When `ingredients` is present it replaces the whole ingredient set.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRecipe {
    #[validate(length(min = 1, message = "is required"))]
    pub name: Option<String>,
    pub procedure: Option<String>,
    pub time: Option<i32>,
    #[validate(nested)]
    pub ingredients: Option<Vec<NewIngredient>>,
}

/// DTO for creating a standalone ingredient under an existing recipe.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateIngredient {
    pub recipe_id: DbId,
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    pub optional: Option<bool>,
    pub measurement: Option<i32>,
    pub measurement_unit: Option<String>,
}

/// DTO for updating an ingredient. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateIngredient {
    pub recipe_id: Option<DbId>,
    #[validate(length(min = 1, message = "is required"))]
    pub name: Option<String>,
    pub optional: Option<bool>,
    pub measurement: Option<i32>,
    pub measurement_unit: Option<String>,
}
