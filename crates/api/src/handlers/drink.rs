//! Handlers for the coffee-shop `/drinks` resource.
//!
//! The public listing exposes only the short recipe (colors and parts);
//! every other route sits behind a permission gate and returns the long
//! form.

use axum::extract::State;
use axum::Extension;
use quintet_core::error::CoreError;
use quintet_core::types::DbId;
use quintet_core::validation::require_any_field;
use quintet_db::models::drink::{CreateDrink, DrinkDetail, DrinkSummary, UpdateDrink};
use quintet_db::repositories::DrinkRepo;
use serde::Serialize;
use validator::Validate;

use crate::auth::TokenClaims;
use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::response::{success, Reply};
use crate::state::AppState;

#[derive(Serialize)]
pub struct DrinkMenu {
    pub drinks: Vec<DrinkSummary>,
}

#[derive(Serialize)]
pub struct DrinkDetails {
    pub drinks: Vec<DrinkDetail>,
}

#[derive(Serialize)]
pub struct DrinkDeleted {
    pub delete: DbId,
}

/// GET /drinks (public)
pub async fn list(State(state): State<AppState>) -> Reply<DrinkMenu> {
    let drinks = DrinkRepo::list(&state.pool).await?;
    Ok(success(DrinkMenu {
        drinks: drinks.iter().map(|d| d.short()).collect(),
    }))
}

/// GET /drinks-detail (`get:drinks-detail`)
pub async fn list_detail(State(state): State<AppState>) -> Reply<DrinkDetails> {
    let drinks = DrinkRepo::list(&state.pool).await?;
    Ok(success(DrinkDetails {
        drinks: drinks.iter().map(|d| d.long()).collect(),
    }))
}

/// POST /drinks (`post:drinks`)
pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    AppJson(input): AppJson<CreateDrink>,
) -> Reply<DrinkDetails> {
    input.validate().map_err(CoreError::from)?;
    let drink = DrinkRepo::create(&state.pool, &input).await?;
    tracing::info!(drink_id = drink.id, title = %drink.title, sub = %claims.sub, "Drink created");
    Ok(success(DrinkDetails {
        drinks: vec![drink.long()],
    }))
}

/// PATCH /drinks/{id} (`patch:drinks`)
pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateDrink>,
) -> Reply<DrinkDetails> {
    DrinkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Drink", id))?;
    require_any_field(&[
        ("title", input.title.is_some()),
        ("recipe", input.recipe.is_some()),
    ])?;
    input.validate().map_err(CoreError::from)?;

    let drink = DrinkRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Drink", id))?;
    tracing::info!(drink_id = id, sub = %claims.sub, "Drink updated");
    Ok(success(DrinkDetails {
        drinks: vec![drink.long()],
    }))
}

/// DELETE /drinks/{id} (`delete:drinks`)
pub async fn delete(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    AppPath(id): AppPath<DbId>,
) -> Reply<DrinkDeleted> {
    if DrinkRepo::delete(&state.pool, id).await? {
        tracing::info!(drink_id = id, sub = %claims.sub, "Drink deleted");
        Ok(success(DrinkDeleted { delete: id }))
    } else {
        Err(AppError::not_found("Drink", id))
    }
}
