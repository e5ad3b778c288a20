//! Route definitions for work contracts.
//!
//! Mounted at `/api/contracts` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::contracts;
use crate::state::AppState;

/// Contract routes.
///
/// ```text
/// POST   /                -> create_contract
/// GET    /                -> list_contracts (?talent_id=&client_id=&status=)
/// POST   /{id}/sign       -> sign_contract (actor=talent|client)
/// POST   /{id}/checkin    -> check_in
/// POST   /{id}/checkout   -> check_out
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(contracts::create_contract).get(contracts::list_contracts),
        )
        .route("/{id}/sign", post(contracts::sign_contract))
        .route("/{id}/checkin", post(contracts::check_in))
        .route("/{id}/checkout", post(contracts::check_out))
}
