//! Route definitions for gig postings.
//!
//! Mounted at `/api/gigs` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::gigs;
use crate::state::AppState;

/// Gig routes.
///
/// ```text
/// POST   /    -> create_gig
/// GET    /    -> list_gigs (?city=&role=, newest first)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(gigs::create_gig).get(gigs::list_gigs))
}
