//! Repository for the `gigs` table.

use nightshift_core::types::Id;
use sqlx::PgPool;

use crate::models::gig::{CreateGig, Gig};

/// Column list for `gigs` queries.
const COLUMNS: &str = "\
    id, title, club_name, city, date, location, pay, dress_code, \
    requirements, spots, notes, created_at";

/// Provides CRUD operations for gig postings.
pub struct GigRepo;

impl GigRepo {
    /// Create a new gig posting, returning the full row.
    pub async fn create(pool: &PgPool, input: &CreateGig) -> Result<Gig, sqlx::Error> {
        let query = format!(
            "INSERT INTO gigs \
                (title, club_name, city, date, location, pay, dress_code, \
                 requirements, spots, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gig>(&query)
            .bind(&input.title)
            .bind(&input.club_name)
            .bind(&input.city)
            .bind(&input.date)
            .bind(&input.location)
            .bind(&input.pay)
            .bind(&input.dress_code)
            .bind(&input.requirements)
            .bind(input.spots)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a gig by ID.
    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<Gig>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gigs WHERE id = $1");
        sqlx::query_as::<_, Gig>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List gigs with optional filters, newest first.
    ///
    /// `role` must be an exact element of the gig's `requirements` tags.
    pub async fn list_filtered(
        pool: &PgPool,
        city: Option<&str>,
        role: Option<&str>,
    ) -> Result<Vec<Gig>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 1;

        if city.is_some() {
            conditions.push(format!("city = ${param_idx}"));
            param_idx += 1;
        }
        if role.is_some() {
            conditions.push(format!("${param_idx} = ANY(requirements)"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query =
            format!("SELECT {COLUMNS} FROM gigs {where_clause} ORDER BY created_at DESC");

        let mut q = sqlx::query_as::<_, Gig>(&query);

        if let Some(c) = city {
            q = q.bind(c.to_string());
        }
        if let Some(r) = role {
            q = q.bind(r.to_string());
        }

        q.fetch_all(pool).await
    }

    /// Total number of gigs. Used by the seed loader.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM gigs")
            .fetch_one(pool)
            .await
    }
}
