//! Route definitions for the `/todos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::todo;
use crate::state::AppState;

/// ```text
/// GET    /todos       -> list
/// POST   /todos       -> create
/// GET    /todos/{id}  -> get_by_id
/// PATCH  /todos/{id}  -> update
/// DELETE /todos/{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/todos", get(todo::list).post(todo::create))
        .route(
            "/todos/{id}",
            get(todo::get_by_id)
                .patch(todo::update)
                .delete(todo::delete),
        )
}
