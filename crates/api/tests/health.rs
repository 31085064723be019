//! Health endpoint smoke test.

mod common;

use axum::http::{Method, StatusCode};
use sqlx::PgPool;

use common::{body_json, build_test_app, send_json};

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_reports_ok(pool: PgPool) {
    let app = build_test_app(pool);

    let response = send_json(&app, Method::GET, "/health", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db_healthy"], true);
}
