//! Gig posting entity model and DTOs.

use nightshift_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `gigs` table.
///
/// `date` is an unparsed display string ("Fri 10PM-2AM" or ISO); recency
/// ordering always uses `created_at`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Gig {
    pub id: Id,
    pub title: String,
    pub club_name: String,
    pub city: String,
    pub date: String,
    pub location: Option<String>,
    pub pay: Option<String>,
    pub dress_code: Option<String>,
    pub requirements: Vec<String>,
    pub spots: i32,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a gig posting.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGig {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub club_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub city: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub date: String,
    pub location: Option<String>,
    pub pay: Option<String>,
    pub dress_code: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default = "default_spots")]
    #[validate(range(min = 1))]
    pub spots: i32,
    pub notes: Option<String>,
}

fn default_spots() -> i32 {
    1
}

/// Query parameters for listing gigs.
///
/// `role` uses exact list-membership against the gig's `requirements` tags.
#[derive(Debug, Deserialize)]
pub struct GigListParams {
    pub city: Option<String>,
    pub role: Option<String>,
}
