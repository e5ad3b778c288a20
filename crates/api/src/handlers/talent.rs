//! Handlers for talent profiles, served under `/api/models`.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use nightshift_db::models::talent::{CreateTalentProfile, TalentListParams, TalentProfile};
use nightshift_db::repositories::TalentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/models
///
/// Create a talent profile. Returns 201 with the stored row.
pub async fn create_profile(
    State(state): State<AppState>,
    Json(input): Json<CreateTalentProfile>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::validation)?;

    let profile = TalentRepo::create(&state.pool, &input).await?;

    tracing::info!(profile_id = %profile.id, city = %profile.city, "Talent profile created");

    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/models
///
/// List talent profiles. `city` filters by equality; `skill` must be an
/// exact element of the profile's skill tags.
pub async fn list_profiles(
    State(state): State<AppState>,
    Query(params): Query<TalentListParams>,
) -> AppResult<Json<Vec<TalentProfile>>> {
    let profiles =
        TalentRepo::list_filtered(&state.pool, params.city.as_deref(), params.skill.as_deref())
            .await?;

    Ok(Json(profiles))
}
