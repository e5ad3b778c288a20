//! Repository for the `venues` table.

use sqlx::PgPool;

use crate::models::venue::{CreateVenue, Venue};

/// Column list for `venues` queries.
const COLUMNS: &str = "id, name, city, contact_name, contact_email, contact_phone, created_at";

/// Provides CRUD operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Create a new venue, returning the full row.
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues (name, city, contact_name, contact_email, contact_phone) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.contact_name)
            .bind(&input.contact_email)
            .bind(&input.contact_phone)
            .fetch_one(pool)
            .await
    }

    /// List venues, optionally filtered by city.
    pub async fn list_filtered(
        pool: &PgPool,
        city: Option<&str>,
    ) -> Result<Vec<Venue>, sqlx::Error> {
        let where_clause = if city.is_some() { "WHERE city = $1" } else { "" };
        let query = format!("SELECT {COLUMNS} FROM venues {where_clause}");

        let mut q = sqlx::query_as::<_, Venue>(&query);
        if let Some(c) = city {
            q = q.bind(c.to_string());
        }
        q.fetch_all(pool).await
    }

    /// Total number of venues. Used by the seed loader.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM venues")
            .fetch_one(pool)
            .await
    }
}
