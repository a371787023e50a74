// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, Json};
use chrono::Local;
use std::sync::Arc;

use crate::application::dto::scan_response::LatestScanDto;
use crate::application::dto::system_response::{HealthDto, TestEndpointDto, DATA_SOURCE_DIRECT};
use crate::domain::services::scan_service::ScanService;
use crate::infrastructure::model_registry::ModelRegistry;

/// 健康检查端点
pub async fn health_check(Extension(models): Extension<Arc<ModelRegistry>>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "healthy".to_string(),
        models_loaded: models.models_loaded(),
        timestamp: Local::now().to_rfc3339(),
        message: "Server is running correctly!".to_string(),
        data_source: DATA_SOURCE_DIRECT.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// 自检端点，报告模型状态与最近一次扫描
pub async fn test_endpoint(
    Extension(models): Extension<Arc<ModelRegistry>>,
    Extension(service): Extension<Arc<ScanService>>,
) -> Json<TestEndpointDto> {
    Json(TestEndpointDto {
        message: "Test endpoint working!".to_string(),
        models_loaded: models.models_loaded(),
        latest_scan: LatestScanDto::from(service.latest()),
        data_source: DATA_SOURCE_DIRECT.to_string(),
    })
}
