//! Route definitions for messaging.
//!
//! Mounted at `/api/messages` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::messages;
use crate::state::AppState;

/// Message routes.
///
/// ```text
/// POST   /          -> create_message
/// GET    /          -> list_messages (?thread_id=, required)
/// GET    /threads   -> list_threads (?limit=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(messages::create_message).get(messages::list_messages),
        )
        .route("/threads", get(messages::list_threads))
}
