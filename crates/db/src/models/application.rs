//! Application entity model and DTOs.
//!
//! `gig_id` and `model_id` are loose references: checked for existence when
//! the application is created, never re-validated afterwards.

use nightshift_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Application {
    pub id: Id,
    pub gig_id: Id,
    pub model_id: Id,
    pub message: Option<String>,
    pub status: String,
    pub applied_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating an application.
///
/// The ids arrive as caller-supplied strings and are parsed in the handler
/// so a malformed id fails before any lookup runs.
#[derive(Debug, Deserialize)]
pub struct CreateApplication {
    pub gig_id: String,
    pub model_id: String,
    pub message: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    pub applied_at: Option<Timestamp>,
}

fn default_status() -> String {
    nightshift_core::application::STATUS_PENDING.to_string()
}

/// Query parameters for listing applications.
#[derive(Debug, Deserialize)]
pub struct ApplicationListParams {
    pub gig_id: Option<String>,
    pub model_id: Option<String>,
}
