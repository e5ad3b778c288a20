//! Route definitions for talent profiles.
//!
//! Mounted at `/api/models` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::talent;
use crate::state::AppState;

/// Talent profile routes.
///
/// ```text
/// POST   /    -> create_profile
/// GET    /    -> list_profiles (?city=&skill=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(talent::create_profile).get(talent::list_profiles))
}
