//! Repository for the `artists` table.

use quintet_core::types::DbId;
use sqlx::PgPool;

use crate::models::artist::{Artist, ArtistSummary, CreateArtist, UpdateArtist};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, phone, genres, image_link, facebook_link, \
    website, seeking_venue, seeking_description, created_at, updated_at";

/// Provides CRUD operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists
                (name, city, state, phone, genres, image_link, facebook_link,
                 website, seeking_venue, seeking_description)
             VALUES ($1, $2, $3, $4, COALESCE($5, '{{}}'), $6, $7, $8, COALESCE($9, false), $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all artists ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists ORDER BY name, id");
        sqlx::query_as::<_, Artist>(&query).fetch_all(pool).await
    }

    /// Artists whose name matches `pattern`, with their upcoming show count.
    /// `None` returns every artist.
    pub async fn search(
        pool: &PgPool,
        pattern: Option<&str>,
    ) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        sqlx::query_as::<_, ArtistSummary>(
            "SELECT a.id, a.name, \
                COUNT(s.id) FILTER (WHERE s.start_time >= NOW()) AS num_upcoming_shows \
             FROM artists a \
             LEFT JOIN shows s ON s.artist_id = a.id \
             WHERE ($1::text IS NULL OR a.name ILIKE $1) \
             GROUP BY a.id \
             ORDER BY a.name, a.id",
        )
        .bind(pattern)
        .fetch_all(pool)
        .await
    }

    /// Update an artist. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET
                name = COALESCE($2, name),
                city = COALESCE($3, city),
                state = COALESCE($4, state),
                phone = COALESCE($5, phone),
                genres = COALESCE($6, genres),
                image_link = COALESCE($7, image_link),
                facebook_link = COALESCE($8, facebook_link),
                website = COALESCE($9, website),
                seeking_venue = COALESCE($10, seeking_venue),
                seeking_description = COALESCE($11, seeking_description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artist and, by cascade, its shows. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
