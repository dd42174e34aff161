//! Handlers for the `/venues` resource.

use axum::extract::State;
use chrono::Utc;
use quintet_core::error::CoreError;
use quintet_core::schedule::{group_by_area, split_shows, Area, ShowSplit};
use quintet_core::search::optional_pattern;
use quintet_core::types::DbId;
use quintet_core::validation::require_any_field;
use quintet_db::models::show::VenueShow;
use quintet_db::models::venue::{CreateVenue, UpdateVenue, Venue, VenueSummary};
use quintet_db::repositories::{ShowRepo, VenueRepo};
use serde::Serialize;
use validator::Validate;

use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::query::NameSearch;
use crate::response::{success, Reply};
use crate::state::AppState;

#[derive(Serialize)]
pub struct VenueAreas {
    pub areas: Vec<Area<VenueSummary>>,
}

#[derive(Serialize)]
pub struct VenueSearchResults {
    pub count: usize,
    pub data: Vec<VenueSummary>,
}

/// A venue with its shows split around the current time.
#[derive(Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    #[serde(flatten)]
    pub shows: ShowSplit<VenueShow>,
}

#[derive(Serialize)]
pub struct VenueDetailBody {
    pub venue: VenueDetail,
}

#[derive(Serialize)]
pub struct VenueBody {
    pub venue: Venue,
}

#[derive(Serialize)]
pub struct VenueDeleted {
    pub deleted: DbId,
}

/// GET /venues
///
/// Venues grouped by city and state.
pub async fn list(State(state): State<AppState>) -> Reply<VenueAreas> {
    let summaries = VenueRepo::list_summaries(&state.pool).await?;
    Ok(success(VenueAreas {
        areas: group_by_area(summaries),
    }))
}

/// POST /venues/search
pub async fn search(
    State(state): State<AppState>,
    AppJson(input): AppJson<NameSearch>,
) -> Reply<VenueSearchResults> {
    let pattern = optional_pattern(input.search_term.as_deref());
    let data = VenueRepo::search(&state.pool, pattern.as_deref()).await?;
    Ok(success(VenueSearchResults {
        count: data.len(),
        data,
    }))
}

/// GET /venues/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> Reply<VenueDetailBody> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Venue", id))?;
    let shows = ShowRepo::list_for_venue(&state.pool, id).await?;
    Ok(success(VenueDetailBody {
        venue: VenueDetail {
            venue,
            shows: split_shows(shows, Utc::now()),
        },
    }))
}

/// POST /venues
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateVenue>,
) -> Reply<VenueBody> {
    input.validate().map_err(CoreError::from)?;
    let venue = VenueRepo::create(&state.pool, &input).await?;
    tracing::info!(venue_id = venue.id, name = %venue.name, "Venue listed");
    Ok(success(VenueBody { venue }))
}

/// PATCH /venues/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateVenue>,
) -> Reply<VenueBody> {
    VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Venue", id))?;
    require_any_field(&[
        ("name", input.name.is_some()),
        ("city", input.city.is_some()),
        ("state", input.state.is_some()),
        ("address", input.address.is_some()),
        ("phone", input.phone.is_some()),
        ("genres", input.genres.is_some()),
        ("image_link", input.image_link.is_some()),
        ("facebook_link", input.facebook_link.is_some()),
        ("website", input.website.is_some()),
        ("seeking_talent", input.seeking_talent.is_some()),
        ("seeking_description", input.seeking_description.is_some()),
    ])?;
    input.validate().map_err(CoreError::from)?;
    let venue = VenueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Venue", id))?;
    Ok(success(VenueBody { venue }))
}

/// DELETE /venues/{id}
///
/// Also removes the venue's shows.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> Reply<VenueDeleted> {
    if VenueRepo::delete(&state.pool, id).await? {
        tracing::info!(venue_id = id, "Venue deleted");
        Ok(success(VenueDeleted { deleted: id }))
    } else {
        Err(AppError::not_found("Venue", id))
    }
}
