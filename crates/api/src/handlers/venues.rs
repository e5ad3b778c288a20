//! Handlers for venues, served under `/api/clubs`.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use nightshift_db::models::venue::{CreateVenue, Venue, VenueListParams};
use nightshift_db::repositories::VenueRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/clubs
///
/// Register a venue. Returns 201 with the stored row.
pub async fn create_venue(
    State(state): State<AppState>,
    Json(input): Json<CreateVenue>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::validation)?;

    let venue = VenueRepo::create(&state.pool, &input).await?;

    tracing::info!(venue_id = %venue.id, city = %venue.city, "Venue created");

    Ok((StatusCode::CREATED, Json(venue)))
}

/// GET /api/clubs
///
/// List venues, optionally filtered by city.
pub async fn list_venues(
    State(state): State<AppState>,
    Query(params): Query<VenueListParams>,
) -> AppResult<Json<Vec<Venue>>> {
    let venues = VenueRepo::list_filtered(&state.pool, params.city.as_deref()).await?;

    Ok(Json(venues))
}
