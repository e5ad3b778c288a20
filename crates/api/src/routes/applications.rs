//! Route definitions for gig applications.
//!
//! Mounted at `/api/applications` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::applications;
use crate::state::AppState;

/// Application routes.
///
/// ```text
/// POST   /    -> create_application
/// GET    /    -> list_applications (?gig_id=&model_id=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(applications::create_application).get(applications::list_applications),
    )
}
