//! Handlers for gig postings, served under `/api/gigs`.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use nightshift_db::models::gig::{CreateGig, Gig, GigListParams};
use nightshift_db::repositories::GigRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/gigs
///
/// Post a gig. Returns 201 with the stored row.
pub async fn create_gig(
    State(state): State<AppState>,
    Json(input): Json<CreateGig>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::validation)?;

    let gig = GigRepo::create(&state.pool, &input).await?;

    tracing::info!(gig_id = %gig.id, city = %gig.city, spots = gig.spots, "Gig posted");

    Ok((StatusCode::CREATED, Json(gig)))
}

/// GET /api/gigs
///
/// List gigs newest first. `city` filters by equality; `role` must be an
/// exact element of the gig's requirement tags.
pub async fn list_gigs(
    State(state): State<AppState>,
    Query(params): Query<GigListParams>,
) -> AppResult<Json<Vec<Gig>>> {
    let gigs = GigRepo::list_filtered(&state.pool, params.city.as_deref(), params.role.as_deref())
        .await?;

    Ok(Json(gigs))
}
