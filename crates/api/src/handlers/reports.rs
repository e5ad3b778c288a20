//! Handlers for incident reports, served under `/api/reports`.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use nightshift_db::models::report::{CreateReport, Report, ReportListParams};
use nightshift_db::repositories::ReportRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_id;
use crate::state::AppState;

/// Maximum page size for report listing.
const MAX_LIMIT: i64 = 200;

/// Default page size for report listing.
const DEFAULT_LIMIT: i64 = 50;

/// POST /api/reports
///
/// File a report. `contract_id`, when present, must be well-formed but is
/// stored as a loose reference without an existence check.
pub async fn create_report(
    State(state): State<AppState>,
    Json(input): Json<CreateReport>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::validation)?;
    let contract_id = input
        .contract_id
        .as_deref()
        .map(|v| parse_id(v, "contract_id"))
        .transpose()?;

    let report = ReportRepo::create(
        &state.pool,
        input.reporter.as_deref(),
        input.category.as_deref(),
        &input.subject,
        input.details.as_deref(),
        contract_id,
    )
    .await?;

    tracing::info!(report_id = %report.id, "Report filed");

    Ok((StatusCode::CREATED, Json(report)))
}

/// GET /api/reports
///
/// List reports newest first. `limit` defaults to 50, capped at 200.
pub async fn list_reports(
    State(state): State<AppState>,
    Query(params): Query<ReportListParams>,
) -> AppResult<Json<Vec<Report>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let reports = ReportRepo::list(&state.pool, limit).await?;

    Ok(Json(reports))
}
