//! Repository for the `applications` table.

use nightshift_core::types::{Id, Timestamp};
use sqlx::PgPool;

use crate::models::application::Application;

/// Column list for `applications` queries.
const COLUMNS: &str = "id, gig_id, model_id, message, status, applied_at, created_at";

/// Provides CRUD operations for gig applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Create a new application, returning the full row.
    ///
    /// The ids arrive pre-parsed; referential existence is the handler's
    /// concern and is checked only at creation time.
    pub async fn create(
        pool: &PgPool,
        gig_id: Id,
        model_id: Id,
        message: Option<&str>,
        status: &str,
        applied_at: Option<Timestamp>,
    ) -> Result<Application, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications (gig_id, model_id, message, status, applied_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(gig_id)
            .bind(model_id)
            .bind(message)
            .bind(status)
            .bind(applied_at)
            .fetch_one(pool)
            .await
    }

    /// List applications with optional gig and model filters.
    pub async fn list_filtered(
        pool: &PgPool,
        gig_id: Option<Id>,
        model_id: Option<Id>,
    ) -> Result<Vec<Application>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 1;

        if gig_id.is_some() {
            conditions.push(format!("gig_id = ${param_idx}"));
            param_idx += 1;
        }
        if model_id.is_some() {
            conditions.push(format!("model_id = ${param_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("SELECT {COLUMNS} FROM applications {where_clause}");

        let mut q = sqlx::query_as::<_, Application>(&query);

        if let Some(g) = gig_id {
            q = q.bind(g);
        }
        if let Some(m) = model_id {
            q = q.bind(m);
        }

        q.fetch_all(pool).await
    }
}
