//! Route definitions for venues.
//!
//! Mounted at `/api/clubs` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::venues;
use crate::state::AppState;

/// Venue routes.
///
/// ```text
/// POST   /    -> create_venue
/// GET    /    -> list_venues (?city=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(venues::create_venue).get(venues::list_venues))
}
