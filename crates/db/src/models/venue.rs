//! Venue entity model and DTOs.

use nightshift_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: Id,
    pub name: String,
    pub city: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a venue.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVenue {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub city: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

/// Query parameters for listing venues.
#[derive(Debug, Deserialize)]
pub struct VenueListParams {
    pub city: Option<String>,
}
