//! Handlers for the `/artists` resource.

use axum::extract::State;
use chrono::Utc;
use quintet_core::error::CoreError;
use quintet_core::schedule::{split_shows, ShowSplit};
use quintet_core::search::optional_pattern;
use quintet_core::types::DbId;
use quintet_core::validation::require_any_field;
use quintet_db::models::artist::{Artist, ArtistSummary, CreateArtist, UpdateArtist};
use quintet_db::models::show::ArtistShow;
use quintet_db::repositories::{ArtistRepo, ShowRepo};
use serde::Serialize;
use validator::Validate;

use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::query::NameSearch;
use crate::response::{success, Reply};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ArtistList {
    pub artists: Vec<Artist>,
}

#[derive(Serialize)]
pub struct ArtistSearchResults {
    pub count: usize,
    pub data: Vec<ArtistSummary>,
}

#[derive(Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    #[serde(flatten)]
    pub shows: ShowSplit<ArtistShow>,
}

#[derive(Serialize)]
pub struct ArtistDetailBody {
    pub artist: ArtistDetail,
}

#[derive(Serialize)]
pub struct ArtistBody {
    pub artist: Artist,
}

#[derive(Serialize)]
pub struct ArtistDeleted {
    pub deleted: DbId,
}

/// GET /artists
pub async fn list(State(state): State<AppState>) -> Reply<ArtistList> {
    let artists = ArtistRepo::list(&state.pool).await?;
    Ok(success(ArtistList { artists }))
}

/// POST /artists/search
pub async fn search(
    State(state): State<AppState>,
    AppJson(input): AppJson<NameSearch>,
) -> Reply<ArtistSearchResults> {
    let pattern = optional_pattern(input.search_term.as_deref());
    let data = ArtistRepo::search(&state.pool, pattern.as_deref()).await?;
    Ok(success(ArtistSearchResults {
        count: data.len(),
        data,
    }))
}

/// GET /artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> Reply<ArtistDetailBody> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Artist", id))?;
    let shows = ShowRepo::list_for_artist(&state.pool, id).await?;
    Ok(success(ArtistDetailBody {
        artist: ArtistDetail {
            artist,
            shows: split_shows(shows, Utc::now()),
        },
    }))
}

/// POST /artists
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateArtist>,
) -> Reply<ArtistBody> {
    input.validate().map_err(CoreError::from)?;
    let artist = ArtistRepo::create(&state.pool, &input).await?;
    tracing::info!(artist_id = artist.id, name = %artist.name, "Artist listed");
    Ok(success(ArtistBody { artist }))
}

/// PATCH /artists/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateArtist>,
) -> Reply<ArtistBody> {
    ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Artist", id))?;
    require_any_field(&[
        ("name", input.name.is_some()),
        ("city", input.city.is_some()),
        ("state", input.state.is_some()),
        ("phone", input.phone.is_some()),
        ("genres", input.genres.is_some()),
        ("image_link", input.image_link.is_some()),
        ("facebook_link", input.facebook_link.is_some()),
        ("website", input.website.is_some()),
        ("seeking_venue", input.seeking_venue.is_some()),
        ("seeking_description", input.seeking_description.is_some()),
    ])?;
    input.validate().map_err(CoreError::from)?;
    let artist = ArtistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Artist", id))?;
    Ok(success(ArtistBody { artist }))
}

/// DELETE /artists/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> Reply<ArtistDeleted> {
    if ArtistRepo::delete(&state.pool, id).await? {
        tracing::info!(artist_id = id, "Artist deleted");
        Ok(success(ArtistDeleted { deleted: id }))
    } else {
        Err(AppError::not_found("Artist", id))
    }
}
