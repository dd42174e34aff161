//! Route definitions for the trivia API.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{category, question, quiz};
use crate::state::AppState;

/// ```text
/// GET    /categories                  -> list
/// GET    /categories/{id}/questions   -> questions
///
/// GET    /questions?page=             -> list
/// POST   /questions                   -> create
/// POST   /questions/search?page=      -> search
/// GET    /questions/{id}              -> get_by_id
/// PATCH  /questions/{id}              -> update
/// DELETE /questions/{id}              -> delete
///
/// POST   /quizzes                     -> play
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(category::list))
        .route("/categories/{id}/questions", get(category::questions))
        .route("/questions", get(question::list).post(question::create))
        .route("/questions/search", post(question::search))
        .route(
            "/questions/{id}",
            get(question::get_by_id)
                .patch(question::update)
                .delete(question::delete),
        )
        .route("/quizzes", post(quiz::play))
}
