//! Artist entity model and DTOs.

use quintet_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an artist.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArtist {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "is required"))]
    pub state: String,
    pub phone: Option<String>,
    pub genres: Option<Vec<String>>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<String>,
}

/// DTO for updating an artist. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateArtist {
    #[validate(length(min = 1, message = "is required"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "is required"))]
    pub city: Option<String>,
    #[validate(length(min = 1, message = "is required"))]
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<Vec<String>>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<String>,
}

/// Artist search hit.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistSummary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}
