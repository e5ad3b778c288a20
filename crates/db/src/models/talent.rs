//! Talent profile entity model and DTOs.

use nightshift_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `talent_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TalentProfile {
    pub id: Id,
    pub name: String,
    pub city: String,
    pub bio: Option<String>,
    pub experience_years: i32,
    pub hourly_rate: Option<f64>,
    pub skills: Vec<String>,
    pub photos: Vec<String>,
    pub instagram: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a talent profile.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTalentProfile {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub city: String,
    pub bio: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, max = 50))]
    pub experience_years: i32,
    #[validate(range(min = 0.0))]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    pub instagram: Option<String>,
    pub phone: Option<String>,
}

/// Query parameters for listing talent profiles.
///
/// `skill` uses exact list-membership against the profile's `skills` tags.
#[derive(Debug, Deserialize)]
pub struct TalentListParams {
    pub city: Option<String>,
    pub skill: Option<String>,
}
