// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, create_test_app_with_limit, csv_form, csv_with_label, upload};
use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::{json, Value};

/// 测试上传成功时的响应结构
#[tokio::test]
async fn test_scan_returns_decoded_label() {
    let app = create_test_app().await;

    let body = upload(&app, "capture.csv", "5").await;

    assert_eq!(body["result"], "mitm");
    assert_eq!(body["result_display"], "mitm attack");
    assert_eq!(body["filename"], "capture.csv");
    assert_eq!(body["has_actual_label"], true);
    assert_eq!(body["models_loaded"], false);
    assert_eq!(body["data_source"], "direct_from_csv");
    assert_eq!(body["prediction_correct"], Value::Null);

    let prob = body["prob"].as_f64().unwrap();
    assert!((55.0..=78.0).contains(&prob), "prob {} out of range", prob);
    // Two decimal places at most
    assert!(((prob * 100.0).round() - prob * 100.0).abs() < 1e-6);

    assert!(app.upload_dir.path().join("capture.csv").is_file());
}

#[tokio::test]
async fn test_scan_benign_and_unknown_labels() {
    let app = create_test_app().await;

    let benign = upload(&app, "benign.csv", "0").await;
    assert_eq!(benign["result"], "Benign");
    assert_eq!(benign["result_display"], "Benign");

    let unknown = upload(&app, "weird.csv", "42").await;
    assert_eq!(unknown["result"], "Unknown");
    let prob = unknown["prob"].as_f64().unwrap();
    assert!((50.0..=70.0).contains(&prob));

    // Float labels are truncated, missing markers read as benign
    assert_eq!(upload(&app, "float.csv", "3.0").await["result"], "dos");
    assert_eq!(upload(&app, "nan.csv", "NaN").await["result"], "Benign");
    assert_eq!(upload(&app, "text.csv", "abc").await["result"], "Unknown");
}

#[tokio::test]
async fn test_scan_missing_column_is_rejected() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/Scan")
        .multipart(csv_form("capture.csv", "Src IP,Label\n1.1.1.1,3\n"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Column \"Num Attack\" not found in CSV file" }));

    let results: Vec<Value> = app.server.get("/results").await.json();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_scan_malformed_csv_is_processing_error() {
    let app = create_test_app().await;

    for (filename, body, message) in [
        (
            "wide.csv",
            "Num Attack\n1\n2,3\n",
            "Processing error: Expected 1 fields in line 3, saw 2",
        ),
        ("empty.csv", "", "Processing error: No columns to parse from file"),
    ] {
        let response = app
            .server
            .post("/Scan")
            .multipart(csv_form(filename, body))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "error": message }));
    }

    let results: Vec<Value> = app.server.get("/results").await.json();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_scan_rejects_invalid_file_type() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/Scan")
        .multipart(csv_form("capture.xlsx", &csv_with_label("1")))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Invalid file type" }));
}

#[tokio::test]
async fn test_scan_without_file_part() {
    let app = create_test_app().await;

    let form = MultipartForm::new().add_text("comment", "no file here");
    let response = app.server.post("/Scan").multipart(form).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "No file part" }));

    // Not a multipart request at all
    let response = app.server.post("/Scan").json(&json!({ "file": "x" })).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "No file part" }));
}

#[tokio::test]
async fn test_scan_with_empty_filename() {
    let app = create_test_app().await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(csv_with_label("1").into_bytes()).file_name(""),
    );
    let response = app.server.post("/Scan").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "No file selected" }));
}

#[tokio::test]
async fn test_scan_sanitizes_filename() {
    let app = create_test_app().await;

    let body = upload(&app, "../../tmp/my capture.csv", "2").await;
    let filename = body["filename"].as_str().unwrap();

    assert!(!filename.contains('/'));
    assert!(!filename.contains(' '));
    assert!(filename.ends_with("capture.csv"));
    assert!(app.upload_dir.path().join(filename).is_file());
}

#[tokio::test]
async fn test_scan_rejects_oversized_upload() {
    let app = create_test_app_with_limit(256).await;

    let rows = "10.0.0.1,10.0.0.2,TCP,1\n".repeat(64);
    let csv = format!("Src IP,Dst IP,Protocol,Num Attack\n{}", rows);
    let response = app
        .server
        .post("/Scan")
        .multipart(csv_form("big.csv", &csv))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_scanning_reports_latest_scan() {
    let app = create_test_app().await;

    let response = app.server.get("/scanning").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "message": "No scans yet", "result": null }));

    upload(&app, "first.csv", "1").await;
    let second = upload(&app, "second.csv", "9").await;

    let latest: Value = app.server.get("/scanning").await.json();
    assert_eq!(latest["result"], "xss");
    assert_eq!(latest["filename"], "second.csv");
    assert_eq!(latest["prob"], second["prob"]);
    assert_eq!(latest["timestamp"], second["timestamp"]);
}
