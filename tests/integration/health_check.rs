// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, create_test_app_with_models, upload};
use serde_json::Value;

#[tokio::test]
async fn test_health_check_in_demo_mode() {
    let app = create_test_app().await;

    let response = app.server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["models_loaded"], false);
    assert_eq!(body["message"], "Server is running correctly!");
    assert_eq!(body["data_source"], "direct_csv_reading");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_health_check_with_models() {
    let app = create_test_app_with_models().await;

    let body: Value = app.server.get("/health").await.json();
    assert_eq!(body["models_loaded"], true);
}

#[tokio::test]
async fn test_test_endpoint_reports_latest_scan() {
    let app = create_test_app().await;

    let body: Value = app.server.get("/test").await.json();
    assert_eq!(body["message"], "Test endpoint working!");
    assert_eq!(body["models_loaded"], false);
    assert_eq!(body["latest_scan"]["result"], Value::Null);

    upload(&app, "capture.csv", "8").await;

    let body: Value = app.server.get("/test").await.json();
    assert_eq!(body["latest_scan"]["result"], "scanning");
    assert_eq!(body["latest_scan"]["filename"], "capture.csv");
}
