//! Route definitions for incident reports.
//!
//! Mounted at `/api/reports` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Report routes.
///
/// ```text
/// POST   /    -> create_report
/// GET    /    -> list_reports (?limit=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(reports::create_report).get(reports::list_reports))
}
