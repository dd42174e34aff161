//! Route definitions for the booking site: venues, artists and shows.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{artist, show, venue};
use crate::state::AppState;

/// ```text
/// GET    /venues              -> list (grouped by area)
/// POST   /venues              -> create
/// POST   /venues/search       -> search
/// GET    /venues/{id}         -> get_by_id (with past/upcoming shows)
/// PATCH  /venues/{id}         -> update
/// DELETE /venues/{id}         -> delete
///
/// GET    /artists             -> list
/// POST   /artists             -> create
/// POST   /artists/search      -> search
/// GET    /artists/{id}        -> get_by_id (with past/upcoming shows)
/// PATCH  /artists/{id}        -> update
/// DELETE /artists/{id}        -> delete
///
/// GET    /shows               -> list
/// POST   /shows               -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/venues", get(venue::list).post(venue::create))
        .route("/venues/search", post(venue::search))
        .route(
            "/venues/{id}",
            get(venue::get_by_id)
                .patch(venue::update)
                .delete(venue::delete),
        )
        .route("/artists", get(artist::list).post(artist::create))
        .route("/artists/search", post(artist::search))
        .route(
            "/artists/{id}",
            get(artist::get_by_id)
                .patch(artist::update)
                .delete(artist::delete),
        )
        .route("/shows", get(show::list).post(show::create))
}
