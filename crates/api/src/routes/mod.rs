pub mod applications;
pub mod contracts;
pub mod gigs;
pub mod health;
pub mod messages;
pub mod reports;
pub mod talent;
pub mod venues;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /hello                        greeting (rev-1 relic)
/// /seed                         idempotent demo-data loader (POST)
///
/// /models                       create, list (?city=&skill=)
/// /clubs                        create, list (?city=)
/// /gigs                         create, list (?city=&role=, newest first)
/// /applications                 create, list (?gig_id=&model_id=)
///
/// /messages                     send, list thread (?thread_id=)
/// /messages/threads             thread summaries (?limit=)
///
/// /contracts                    create, list (?talent_id=&client_id=&status=)
/// /contracts/{id}/sign          sign (actor=talent|client)
/// /contracts/{id}/checkin       stamp shift check-in
/// /contracts/{id}/checkout      stamp shift check-out, complete
///
/// /reports                      file, list (?limit=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(health::hello))
        .route("/seed", post(handlers::seed::seed_demo))
        .nest("/models", talent::router())
        .nest("/clubs", venues::router())
        .nest("/gigs", gigs::router())
        .nest("/applications", applications::router())
        .nest("/messages", messages::router())
        .nest("/contracts", contracts::router())
        .nest("/reports", reports::router())
}
