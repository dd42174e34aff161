//! Drink model, DTOs and the public/detailed projections.

use quintet_core::drink::{short_recipe, RecipePart, ShortRecipePart};
use quintet_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `drinks` table. `recipe` is stored as JSONB.
#[derive(Debug, Clone, FromRow)]
pub struct Drink {
    pub id: DbId,
    pub title: String,
    pub recipe: Json<Vec<RecipePart>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Full drink view with ingredient names.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkDetail {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<RecipePart>,
}

/// Public drink view: colors and proportions only.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkSummary {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<ShortRecipePart>,
}

impl Drink {
    pub fn long(&self) -> DrinkDetail {
        DrinkDetail {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.0.clone(),
        }
    }

    pub fn short(&self) -> DrinkSummary {
        DrinkSummary {
            id: self.id,
            title: self.title.clone(),
            recipe: short_recipe(&self.recipe.0),
        }
    }
}

/// DTO for creating a drink.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDrink {
    #[validate(length(min = 1, message = "is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "must contain at least one part"))]
    pub recipe: Vec<RecipePart>,
}

/// DTO for updating a drink. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDrink {
    #[validate(length(min = 1, message = "is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "must contain at least one part"))]
    pub recipe: Option<Vec<RecipePart>>,
}
