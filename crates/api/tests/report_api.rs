//! HTTP-level tests for the incident report endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test(migrations = "../db/migrations")]
async fn file_and_list_reports(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/reports",
        serde_json::json!({
            "reporter": "ava",
            "category": "no-show",
            "subject": "Client never arrived",
            "details": "Waited 45 minutes at the door.",
            "contract_id": Uuid::new_v4().to_string()
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_string());
    assert_eq!(json["category"], "no-show");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/reports").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_subject_fails_validation(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/reports", serde_json::json!({"subject": ""})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_contract_reference_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/reports",
        serde_json::json!({"subject": "x", "contract_id": "oops"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_respects_limit_and_orders_newest_first(pool: PgPool) {
    for i in 0..4 {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/reports",
            serde_json::json!({"subject": format!("report {i}")}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/reports?limit=2").await).await;
    let reports = json.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["subject"], "report 3");
    assert_eq!(reports[1]["subject"], "report 2");
}
