//! Handlers for the `/shows` resource.

use axum::extract::State;
use quintet_db::models::show::{CreateShow, Show, ShowListing};
use quintet_db::repositories::ShowRepo;
use serde::Serialize;

use crate::extract::AppJson;
use crate::response::{success, Reply};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ShowList {
    pub shows: Vec<ShowListing>,
}

#[derive(Serialize)]
pub struct ShowBody {
    pub show: Show,
}

/// GET /shows
pub async fn list(State(state): State<AppState>) -> Reply<ShowList> {
    let shows = ShowRepo::list_detailed(&state.pool).await?;
    Ok(success(ShowList { shows }))
}

/// POST /shows
///
/// An unknown venue or artist id is rejected by the foreign keys (422).
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateShow>,
) -> Reply<ShowBody> {
    let show = ShowRepo::create(&state.pool, &input).await?;
    tracing::info!(
        show_id = show.id,
        venue_id = show.venue_id,
        artist_id = show.artist_id,
        "Show booked"
    );
    Ok(success(ShowBody { show }))
}
