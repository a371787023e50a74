// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use netscan::config::settings::{ModelSettings, ScanSettings};
use netscan::domain::services::scan_service::ScanService;
use netscan::infrastructure::model_registry::ModelRegistry;
use netscan::infrastructure::repositories::scan_result_repo_impl::ScanResultRepositoryImpl;
use netscan::infrastructure::storage::LocalStorage;
use netscan::presentation::routes;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use tempfile::TempDir;

pub const MODEL_FILE: &str = "GRU_model.pkl";

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db_pool: Arc<DatabaseConnection>,
    pub service: Arc<ScanService>,
    // Keep directories alive
    pub upload_dir: TempDir,
    pub model_dir: TempDir,
}

/// 测试用数据库：单连接的内存 SQLite，并应用全部迁移
pub async fn create_test_db() -> Arc<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_string());
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    Arc::new(db)
}

pub fn scan_settings(max_upload_bytes: usize) -> ScanSettings {
    ScanSettings {
        required_column: "Num Attack".to_string(),
        allowed_extensions: vec!["csv".to_string()],
        max_upload_bytes,
    }
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with_options(false, 16 * 1024 * 1024).await
}

pub async fn create_test_app_with_models() -> TestApp {
    create_test_app_with_options(true, 16 * 1024 * 1024).await
}

pub async fn create_test_app_with_limit(max_upload_bytes: usize) -> TestApp {
    create_test_app_with_options(false, max_upload_bytes).await
}

async fn create_test_app_with_options(with_models: bool, max_upload_bytes: usize) -> TestApp {
    let db_pool = create_test_db().await;

    let upload_dir = TempDir::new().expect("Failed to create upload dir");
    let storage = LocalStorage::new(upload_dir.path());
    storage.ensure_root().await.expect("Failed to create upload root");

    let model_dir = TempDir::new().expect("Failed to create model dir");
    if with_models {
        std::fs::write(model_dir.path().join(MODEL_FILE), b"weights")
            .expect("Failed to write model file");
    }
    let models = Arc::new(
        ModelRegistry::load(&ModelSettings {
            directory: model_dir.path().to_string_lossy().into_owned(),
            artifacts: vec![MODEL_FILE.to_string()],
        })
        .await,
    );

    let settings = scan_settings(max_upload_bytes);
    let service = Arc::new(ScanService::new(
        Arc::new(ScanResultRepositoryImpl::new(db_pool.clone())),
        Arc::new(storage),
        settings.clone(),
    ));

    let app = routes::app(service.clone(), models, &settings);
    let server = TestServer::new(app).expect("Failed to create test server");

    TestApp {
        server,
        db_pool,
        service,
        upload_dir,
        model_dir,
    }
}

/// 构造只含一个 `file` 部分的上传表单
pub fn csv_form(filename: &str, body: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(body.as_bytes().to_vec())
            .file_name(filename.to_string())
            .mime_type("text/csv"),
    )
}

/// 生成最后一行标签为 `code` 的 CSV
pub fn csv_with_label(code: &str) -> String {
    format!(
        "Src IP,Dst IP,Protocol,Num Attack\n\
         192.168.1.10,10.0.0.5,TCP,0\n\
         192.168.1.11,10.0.0.5,UDP,{}\n",
        code
    )
}

/// 上传一份文件并返回响应 JSON
#[allow(dead_code)]
pub async fn upload(app: &TestApp, filename: &str, code: &str) -> serde_json::Value {
    let response = app
        .server
        .post("/Scan")
        .multipart(csv_form(filename, &csv_with_label(code)))
        .await;
    response.assert_status_ok();
    response.json()
}
