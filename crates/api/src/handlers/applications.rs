//! Handlers for gig applications, served under `/api/applications`.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use nightshift_core::application;
use nightshift_core::error::CoreError;
use nightshift_db::models::application::{Application, ApplicationListParams, CreateApplication};
use nightshift_db::repositories::{ApplicationRepo, GigRepo, TalentRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::parse_id;
use crate::state::AppState;

/// POST /api/applications
///
/// Apply to a gig. The referenced gig and profile must exist at creation
/// time; the references are never re-validated afterwards.
pub async fn create_application(
    State(state): State<AppState>,
    Json(input): Json<CreateApplication>,
) -> AppResult<impl IntoResponse> {
    let gig_id = parse_id(&input.gig_id, "gig_id")?;
    let model_id = parse_id(&input.model_id, "model_id")?;
    application::validate_status(&input.status)?;

    if GigRepo::find_by_id(&state.pool, gig_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Gig",
            id: gig_id,
        }));
    }
    if TalentRepo::find_by_id(&state.pool, model_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "TalentProfile",
            id: model_id,
        }));
    }

    let app = ApplicationRepo::create(
        &state.pool,
        gig_id,
        model_id,
        input.message.as_deref(),
        &input.status,
        input.applied_at,
    )
    .await?;

    tracing::info!(
        application_id = %app.id,
        gig_id = %gig_id,
        model_id = %model_id,
        "Application submitted",
    );

    Ok((StatusCode::CREATED, Json(app)))
}

/// GET /api/applications
///
/// List applications with optional `gig_id` / `model_id` filters.
pub async fn list_applications(
    State(state): State<AppState>,
    Query(params): Query<ApplicationListParams>,
) -> AppResult<Json<Vec<Application>>> {
    let gig_id = params
        .gig_id
        .as_deref()
        .map(|v| parse_id(v, "gig_id"))
        .transpose()?;
    let model_id = params
        .model_id
        .as_deref()
        .map(|v| parse_id(v, "model_id"))
        .transpose()?;

    let apps = ApplicationRepo::list_filtered(&state.pool, gig_id, model_id).await?;

    Ok(Json(apps))
}
