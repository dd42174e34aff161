//! Route definitions for the recipe/ingredient API. Every route is gated.

use axum::routing::{delete, get, patch, post, MethodRouter};
use axum::Router;
use quintet_core::permissions::{CREATE_RECIPES, DELETE_RECIPES, READ_RECIPES, UPDATE_RECIPES};

use crate::handlers::{ingredient, recipe};
use crate::middleware::requires_auth;
use crate::state::AppState;

/// ```text
/// GET    /recipes             -> list        read:recipes
/// POST   /recipes             -> create      create:recipes
/// GET    /recipes/{id}        -> get_by_id   read:recipes
/// PATCH  /recipes/{id}        -> update      update:recipes
/// DELETE /recipes/{id}        -> delete      delete:recipes
///
/// /ingredients and /ingredients/{id} mirror the same methods and scopes.
/// ```
pub fn router(state: &AppState) -> Router<AppState> {
    let read = |route: MethodRouter<AppState>| requires_auth(state, READ_RECIPES, route);
    let create = |route: MethodRouter<AppState>| requires_auth(state, CREATE_RECIPES, route);
    let update = |route: MethodRouter<AppState>| requires_auth(state, UPDATE_RECIPES, route);
    let remove = |route: MethodRouter<AppState>| requires_auth(state, DELETE_RECIPES, route);

    Router::new()
        .route(
            "/recipes",
            read(get(recipe::list)).merge(create(post(recipe::create))),
        )
        .route(
            "/recipes/{id}",
            read(get(recipe::get_by_id))
                .merge(update(patch(recipe::update)))
                .merge(remove(delete(recipe::delete))),
        )
        .route(
            "/ingredients",
            read(get(ingredient::list)).merge(create(post(ingredient::create))),
        )
        .route(
            "/ingredients/{id}",
            read(get(ingredient::get_by_id))
                .merge(update(patch(ingredient::update)))
                .merge(remove(delete(ingredient::delete))),
        )
}
