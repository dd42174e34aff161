//! Handlers for the kitchen `/recipes` resource.

use axum::extract::State;
use quintet_core::error::CoreError;
use quintet_core::types::DbId;
use quintet_db::models::recipe::{CreateRecipe, RecipeWithIngredients, UpdateRecipe};
use quintet_db::repositories::RecipeRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::response::{success, Reply};
use crate::state::AppState;

#[derive(Serialize)]
pub struct RecipeList {
    pub result: Vec<RecipeWithIngredients>,
}

#[derive(Serialize)]
pub struct RecipeResult {
    pub result: RecipeWithIngredients,
}

#[derive(Serialize)]
pub struct RecipeDeleted {
    pub recipe_id: DbId,
}

/// GET /recipes (`read:recipes`)
pub async fn list(State(state): State<AppState>) -> Reply<RecipeList> {
    let result = RecipeRepo::list_with_ingredients(&state.pool).await?;
    Ok(success(RecipeList { result }))
}

/// GET /recipes/{id} (`read:recipes`)
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> Reply<RecipeResult> {
    let result = RecipeRepo::find_with_ingredients(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Recipe", id))?;
    Ok(success(RecipeResult { result }))
}

/// POST /recipes (`create:recipes`)
///
/// Nested `ingredients` are inserted in the same transaction as the recipe.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateRecipe>,
) -> Reply<RecipeResult> {
    input.validate().map_err(CoreError::from)?;
    let result = RecipeRepo::create(&state.pool, &input).await?;
    tracing::info!(
        recipe_id = result.recipe.id,
        ingredients = result.ingredients.len(),
        "Recipe created"
    );
    Ok(success(RecipeResult { result }))
}

/// PATCH /recipes/{id} (`update:recipes`)
///
/// At least one of `name`, `procedure` or `time` must be present, even when
/// `ingredients` is supplied. A present `ingredients` list replaces the
/// recipe's whole ingredient set.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateRecipe>,
) -> Reply<RecipeResult> {
    RecipeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Recipe", id))?;
    if input.name.is_none() && input.procedure.is_none() && input.time.is_none() {
        return Err(CoreError::Validation(
            "at least one of [name, procedure, time] must be provided".into(),
        )
        .into());
    }
    input.validate().map_err(CoreError::from)?;

    let result = RecipeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Recipe", id))?;
    Ok(success(RecipeResult { result }))
}

/// DELETE /recipes/{id} (`delete:recipes`)
///
/// Ingredients go with it.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> Reply<RecipeDeleted> {
    if RecipeRepo::delete(&state.pool, id).await? {
        tracing::info!(recipe_id = id, "Recipe deleted");
        Ok(success(RecipeDeleted { recipe_id: id }))
    } else {
        Err(AppError::not_found("Recipe", id))
    }
}
