//! Repository for the `talent_profiles` table.

use nightshift_core::types::Id;
use sqlx::PgPool;

use crate::models::talent::{CreateTalentProfile, TalentProfile};

/// Column list for `talent_profiles` queries.
const COLUMNS: &str = "\
    id, name, city, bio, experience_years, hourly_rate, \
    skills, photos, instagram, phone, created_at";

/// Provides CRUD operations for talent profiles.
pub struct TalentRepo;

impl TalentRepo {
    /// Create a new talent profile, returning the full row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTalentProfile,
    ) -> Result<TalentProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO talent_profiles \
                (name, city, bio, experience_years, hourly_rate, \
                 skills, photos, instagram, phone) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TalentProfile>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.bio)
            .bind(input.experience_years)
            .bind(input.hourly_rate)
            .bind(&input.skills)
            .bind(&input.photos)
            .bind(&input.instagram)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find a talent profile by ID.
    pub async fn find_by_id(pool: &PgPool, id: Id) -> Result<Option<TalentProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM talent_profiles WHERE id = $1");
        sqlx::query_as::<_, TalentProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List talent profiles with optional filters.
    ///
    /// `city` is an equality match; `skill` must be an exact element of the
    /// profile's `skills` tags (no substring or case folding).
    pub async fn list_filtered(
        pool: &PgPool,
        city: Option<&str>,
        skill: Option<&str>,
    ) -> Result<Vec<TalentProfile>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 1;

        if city.is_some() {
            conditions.push(format!("city = ${param_idx}"));
            param_idx += 1;
        }
        if skill.is_some() {
            conditions.push(format!("${param_idx} = ANY(skills)"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("SELECT {COLUMNS} FROM talent_profiles {where_clause}");

        let mut q = sqlx::query_as::<_, TalentProfile>(&query);

        if let Some(c) = city {
            q = q.bind(c.to_string());
        }
        if let Some(s) = skill {
            q = q.bind(s.to_string());
        }

        q.fetch_all(pool).await
    }

    /// Total number of talent profiles. Used by the seed loader.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM talent_profiles")
            .fetch_one(pool)
            .await
    }
}
