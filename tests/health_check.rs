mod common;

use common::spawn_app;
use serde_json::{Value, json};

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let body: Value = response.json().await.expect("Failed to parse JSON body");
    assert_eq!(
        body,
        json!({ "status": "healthy", "service": "blocking-responses-api" })
    );
}

#[tokio::test]
async fn health_check_body_keeps_field_order() {
    let app = spawn_app().await;

    let body = reqwest::get(format!("{}/api/health", app.address))
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read response body");

    assert_eq!(body, r#"{"status":"healthy","service":"blocking-responses-api"}"#);
}

#[tokio::test]
async fn health_check_answers_head() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .head(format!("{}/api/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body = response.bytes().await.expect("Failed to read response body");
    assert!(body.is_empty());
}
