// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use netscan::config::settings::Settings;
use netscan::domain::services::scan_service::ScanService;
use netscan::infrastructure::database::connection;
use netscan::infrastructure::metrics;
use netscan::infrastructure::model_registry::ModelRegistry;
use netscan::infrastructure::repositories::scan_result_repo_impl::ScanResultRepositoryImpl;
use netscan::infrastructure::storage::LocalStorage;
use netscan::presentation::routes;
use netscan::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting netscan...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // Initialize Prometheus Metrics
    metrics::init_metrics(&settings.metrics);

    // 3. Connect to database and apply migrations
    let db = Arc::new(connection::connect_and_migrate(&settings.database).await?);
    info!("Database ready");

    // 4. Prepare upload storage
    let storage = LocalStorage::from_settings(&settings.storage);
    storage.ensure_root().await?;
    info!("Upload directory: {}", storage.base_path().display());

    // 5. Probe model artifacts
    let models = Arc::new(ModelRegistry::load(&settings.models).await);

    // 6. Initialize Components
    let repository = Arc::new(ScanResultRepositoryImpl::new(db.clone()));
    let service = Arc::new(ScanService::new(
        repository,
        Arc::new(storage),
        settings.scan.clone(),
    ));

    // 7. Start HTTP server
    let app = routes::app(service, models, &settings.scan);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
