//! Repository for the `shows` table and its venue/artist joins.

use quintet_core::types::DbId;
use sqlx::PgPool;

use crate::models::show::{ArtistShow, CreateShow, Show, ShowListing, VenueShow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, venue_id, artist_id, start_time, created_at";

/// Provides create and listing operations for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show. A dangling `venue_id` or `artist_id` fails with a
    /// foreign-key violation.
    pub async fn create(pool: &PgPool, input: &CreateShow) -> Result<Show, sqlx::Error> {
        let query = format!(
            "INSERT INTO shows (venue_id, artist_id, start_time)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(input.venue_id)
            .bind(input.artist_id)
            .bind(input.start_time)
            .fetch_one(pool)
            .await
    }

    /// Every show with venue and artist names, soonest first.
    pub async fn list_detailed(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT s.venue_id, v.name AS venue_name, s.artist_id, a.name AS artist_name, \
                a.image_link AS artist_image_link, s.start_time \
             FROM shows s \
             JOIN venues v ON v.id = s.venue_id \
             JOIN artists a ON a.id = s.artist_id \
             ORDER BY s.start_time, s.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Shows hosted by a venue, joined with the performing artist.
    pub async fn list_for_venue(
        pool: &PgPool,
        venue_id: DbId,
    ) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT a.id AS artist_id, a.name AS artist_name, \
                a.image_link AS artist_image_link, s.start_time \
             FROM shows s \
             JOIN artists a ON a.id = s.artist_id \
             WHERE s.venue_id = $1 \
             ORDER BY s.start_time, s.id",
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await
    }

    /// Shows played by an artist, joined with the hosting venue.
    pub async fn list_for_artist(
        pool: &PgPool,
        artist_id: DbId,
    ) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT v.id AS venue_id, v.name AS venue_name, \
                v.image_link AS venue_image_link, s.start_time \
             FROM shows s \
             JOIN venues v ON v.id = s.venue_id \
             WHERE s.artist_id = $1 \
             ORDER BY s.start_time, s.id",
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
    }
}
