//! Venue entity model, DTOs and listing views.

use quintet_core::schedule::Located;
use quintet_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a venue.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVenue {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "is required"))]
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<Vec<String>>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: Option<bool>,
    pub seeking_description: Option<String>,
}

/// DTO for updating a venue. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateVenue {
    #[validate(length(min = 1, message = "is required"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "is required"))]
    pub city: Option<String>,
    #[validate(length(min = 1, message = "is required"))]
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<Vec<String>>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: Option<bool>,
    pub seeking_description: Option<String>,
}

/// Compact venue row used by the area listing and by search results.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    #[serde(skip_serializing)]
    pub city: String,
    #[serde(skip_serializing)]
    pub state: String,
    pub num_upcoming_shows: i64,
}

impl Located for VenueSummary {
    fn city(&self) -> &str {
        &self.city
    }

    fn state(&self) -> &str {
        &self.state
    }
}
