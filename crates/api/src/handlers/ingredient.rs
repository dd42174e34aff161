//! Handlers for the kitchen `/ingredients` resource.

use axum::extract::State;
use quintet_core::error::CoreError;
use quintet_core::types::DbId;
use quintet_core::validation::require_any_field;
use quintet_db::models::recipe::{CreateIngredient, Ingredient, UpdateIngredient};
use quintet_db::repositories::IngredientRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::response::{success, Reply};
use crate::state::AppState;

#[derive(Serialize)]
pub struct IngredientList {
    pub result: Vec<Ingredient>,
}

#[derive(Serialize)]
pub struct IngredientResult {
    pub result: Ingredient,
}

#[derive(Serialize)]
pub struct IngredientDeleted {
    pub ingredient_id: DbId,
}

/// GET /ingredients (`read:recipes`)
pub async fn list(State(state): State<AppState>) -> Reply<IngredientList> {
    let result = IngredientRepo::list(&state.pool).await?;
    Ok(success(IngredientList { result }))
}

/// GET /ingredients/{id} (`read:recipes`)
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> Reply<IngredientResult> {
    let result = IngredientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Ingredient", id))?;
    Ok(success(IngredientResult { result }))
}

/// POST /ingredients (`create:recipes`)
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateIngredient>,
) -> Reply<IngredientResult> {
    input.validate().map_err(CoreError::from)?;
    let result = IngredientRepo::create(&state.pool, &input).await?;
    Ok(success(IngredientResult { result }))
}

/// PATCH /ingredients/{id} (`update:recipes`)
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateIngredient>,
) -> Reply<IngredientResult> {
    IngredientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Ingredient", id))?;
    require_any_field(&[
        ("recipe_id", input.recipe_id.is_some()),
        ("name", input.name.is_some()),
        ("optional", input.optional.is_some()),
        ("measurement", input.measurement.is_some()),
        ("measurement_unit", input.measurement_unit.is_some()),
    ])?;
    input.validate().map_err(CoreError::from)?;
    let result = IngredientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Ingredient", id))?;
    Ok(success(IngredientResult { result }))
}

/// DELETE /ingredients/{id} (`delete:recipes`)
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> Reply<IngredientDeleted> {
    if IngredientRepo::delete(&state.pool, id).await? {
        Ok(success(IngredientDeleted { ingredient_id: id }))
    } else {
        Err(AppError::not_found("Ingredient", id))
    }
}
