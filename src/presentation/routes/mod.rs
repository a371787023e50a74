// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ScanSettings;
use crate::domain::services::scan_service::ScanService;
use crate::infrastructure::model_registry::ModelRegistry;
use crate::presentation::handlers::{result_handler, scan_handler, system_handler};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 返回值
///
/// 返回未挂载共享状态的路由
pub fn routes() -> Router {
    let scan_routes = Router::new()
        .route("/Scan", post(scan_handler::scan))
        .route("/scanning", get(scan_handler::latest_scan));

    let result_routes = Router::new()
        .route("/results", get(result_handler::list_results))
        .route("/Dashboard", get(result_handler::dashboard))
        .route("/Dashboard/{id}", patch(result_handler::archive_result))
        .route("/Archive", get(result_handler::archive_list))
        .route("/api/filter", get(result_handler::filter_results));

    let system_routes = Router::new()
        .route("/health", get(system_handler::health_check))
        .route("/test", get(system_handler::test_endpoint));

    Router::new()
        .merge(scan_routes)
        .merge(result_routes)
        .merge(system_routes)
}

/// 组装完整应用
///
/// 挂载扫描服务、模型注册表、上传大小限制、CORS与请求追踪
pub fn app(
    service: Arc<ScanService>,
    models: Arc<ModelRegistry>,
    settings: &ScanSettings,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes()
        .layer(Extension(service))
        .layer(Extension(models))
        .layer(DefaultBodyLimit::max(settings.max_upload_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
