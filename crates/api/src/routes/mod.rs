pub mod coffee;
pub mod fyyur;
pub mod health;
pub mod kitchen;
pub mod todo;
pub mod trivia;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the root.
///
/// ```text
/// /todos ...                         todo list
/// /venues, /artists, /shows ...      booking site
/// /categories, /questions, /quizzes  trivia
/// /drinks, /drinks-detail ...        coffee shop (partly gated)
/// /recipes, /ingredients ...         kitchen (gated)
/// ```
///
/// Gated routes capture `state` so their permission gate can reach the
/// token verifier.
pub fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(todo::router())
        .merge(fyyur::router())
        .merge(trivia::router())
        .merge(coffee::router(state))
        .merge(kitchen::router(state))
}
