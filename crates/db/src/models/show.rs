//! Show entity model and the joined views used by the booking pages.

use quintet_core::schedule::Scheduled;
use quintet_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `shows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub start_time: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for booking a show. Both foreign keys must reference existing rows.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShow {
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub start_time: Timestamp,
}

/// Show joined with both the venue and the artist, for `/shows`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowListing {
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// A show as seen from its venue's page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueShow {
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// A show as seen from its artist's page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistShow {
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: Timestamp,
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> Timestamp {
        self.start_time
    }
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> Timestamp {
        self.start_time
    }
}
