//! Repository for the `venues` table.

use quintet_core::types::DbId;
use sqlx::PgPool;

use crate::models::venue::{CreateVenue, UpdateVenue, Venue, VenueSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, address, phone, genres, image_link, \
    facebook_link, website, seeking_talent, seeking_description, created_at, updated_at";

/// Summary projection with the number of shows that have not started yet.
///
/// `$1` is an optional `ILIKE` pattern on the venue name.
const SUMMARY_QUERY: &str = "SELECT v.id, v.name, v.city, v.state, \
        COUNT(s.id) FILTER (WHERE s.start_time >= NOW()) AS num_upcoming_shows \
     FROM venues v \
     LEFT JOIN shows s ON s.venue_id = v.id \
     WHERE ($1::text IS NULL OR v.name ILIKE $1) \
     GROUP BY v.id \
     ORDER BY v.state, v.city, v.name";

/// Provides CRUD operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues
                (name, city, state, address, phone, genres, image_link, facebook_link,
                 website, seeking_talent, seeking_description)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, '{{}}'), $7, $8, $9, COALESCE($10, false), $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All venues as summaries, ordered by state, city, name.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<VenueSummary>, sqlx::Error> {
        sqlx::query_as::<_, VenueSummary>(SUMMARY_QUERY)
            .bind(None::<String>)
            .fetch_all(pool)
            .await
    }

    /// Venues whose name matches `pattern`; `None` returns every venue.
    pub async fn search(
        pool: &PgPool,
        pattern: Option<&str>,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        sqlx::query_as::<_, VenueSummary>(SUMMARY_QUERY)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Update a venue. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVenue,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET
                name = COALESCE($2, name),
                city = COALESCE($3, city),
                state = COALESCE($4, state),
                address = COALESCE($5, address),
                phone = COALESCE($6, phone),
                genres = COALESCE($7, genres),
                image_link = COALESCE($8, image_link),
                facebook_link = COALESCE($9, facebook_link),
                website = COALESCE($10, website),
                seeking_talent = COALESCE($11, seeking_talent),
                seeking_description = COALESCE($12, seeking_description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a venue and, by cascade, its shows. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
