//! Incident report entity model and DTOs.

use nightshift_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: Id,
    pub reporter: Option<String>,
    pub category: Option<String>,
    pub subject: String,
    pub details: Option<String>,
    pub contract_id: Option<Id>,
    pub created_at: Timestamp,
}

/// DTO for filing a report. `contract_id`, when present, is a loose
/// reference and is not checked for existence.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReport {
    pub reporter: Option<String>,
    pub category: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub subject: String,
    pub details: Option<String>,
    pub contract_id: Option<String>,
}

/// Query parameters for listing reports.
#[derive(Debug, Deserialize)]
pub struct ReportListParams {
    pub limit: Option<i64>,
}
