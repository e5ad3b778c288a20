//! Root-level liveness and connectivity routes (not under `/api`).

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use crate::handlers::schema;
use crate::state::AppState;

/// Connectivity report for `GET /test`.
#[derive(Serialize)]
pub struct TestResponse {
    /// The API process itself is up if this rendered at all.
    pub backend: &'static str,
    /// Whether a probe query succeeded.
    pub database_reachable: bool,
    /// Name of the connected database, when reachable.
    pub database_name: Option<String>,
    /// Public table names, capped at 10.
    pub collections: Vec<String>,
    /// Whether `DATABASE_URL` is present in the environment.
    pub database_url_set: bool,
}

/// GET / -- liveness message.
async fn root() -> Json<Value> {
    Json(json!({ "message": "Nightshift talent marketplace API running" }))
}

/// GET /api/hello -- greeting retained from the first revision of the API.
pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello from the backend API!" }))
}

/// GET /test -- database connectivity and collection listing.
async fn test_database(State(state): State<AppState>) -> Json<TestResponse> {
    let database_reachable = nightshift_db::health_check(&state.pool).await.is_ok();

    let database_name = nightshift_db::database_name(&state.pool).await.ok();

    let mut collections = nightshift_db::table_names(&state.pool)
        .await
        .unwrap_or_default();
    collections.truncate(10);

    Json(TestResponse {
        backend: "running",
        database_reachable,
        database_name,
        collections,
        database_url_set: std::env::var("DATABASE_URL").is_ok(),
    })
}

/// Mount root-level routes.
///
/// ```text
/// GET /        -> liveness message
/// GET /test    -> database connectivity report
/// GET /schema  -> JSON Schema for every entity
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/test", get(test_database))
        .route("/schema", get(schema::entity_schemas))
}
