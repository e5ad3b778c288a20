//! Repository for the `reports` table.

use nightshift_core::types::Id;
use sqlx::PgPool;

use crate::models::report::Report;

/// Column list for `reports` queries.
const COLUMNS: &str = "id, reporter, category, subject, details, contract_id, created_at";

/// Provides CRUD operations for incident reports.
pub struct ReportRepo;

impl ReportRepo {
    /// File a new report, returning the full row.
    pub async fn create(
        pool: &PgPool,
        reporter: Option<&str>,
        category: Option<&str>,
        subject: &str,
        details: Option<&str>,
        contract_id: Option<Id>,
    ) -> Result<Report, sqlx::Error> {
        let query = format!(
            "INSERT INTO reports (reporter, category, subject, details, contract_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(reporter)
            .bind(category)
            .bind(subject)
            .bind(details)
            .bind(contract_id)
            .fetch_one(pool)
            .await
    }

    /// List reports, newest first, capped at `limit`.
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<Report>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM reports ORDER BY created_at DESC LIMIT $1");
        sqlx::query_as::<_, Report>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
