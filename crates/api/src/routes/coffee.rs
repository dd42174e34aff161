//! Route definitions for the coffee-shop drink menu.

use axum::routing::{delete, get, patch, post};
use axum::Router;
use quintet_core::permissions::{DELETE_DRINKS, GET_DRINKS_DETAIL, PATCH_DRINKS, POST_DRINKS};

use crate::handlers::drink;
use crate::middleware::requires_auth;
use crate::state::AppState;

/// ```text
/// GET    /drinks          -> list         (public)
/// POST   /drinks          -> create       post:drinks
/// GET    /drinks-detail   -> list_detail  get:drinks-detail
/// PATCH  /drinks/{id}     -> update       patch:drinks
/// DELETE /drinks/{id}     -> delete       delete:drinks
/// ```
pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/drinks",
            get(drink::list).merge(requires_auth(state, POST_DRINKS, post(drink::create))),
        )
        .route(
            "/drinks-detail",
            requires_auth(state, GET_DRINKS_DETAIL, get(drink::list_detail)),
        )
        .route(
            "/drinks/{id}",
            requires_auth(state, PATCH_DRINKS, patch(drink::update))
                .merge(requires_auth(state, DELETE_DRINKS, delete(drink::delete))),
        )
}
