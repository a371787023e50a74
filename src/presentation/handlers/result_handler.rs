// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{rejection::PathRejection, Extension, Path, Query},
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::application::dto::filter_request::FilterQueryDto;
use crate::application::dto::result_response::{
    DashboardRecordDto, FilterRecordDto, MessageDto, ResultRecordDto,
};
use crate::domain::services::scan_service::ScanService;
use crate::presentation::errors::AppError;
use crate::utils::errors::ScanError;

/// 全部历史记录（`GET /results`）
pub async fn list_results(
    Extension(service): Extension<Arc<ScanService>>,
) -> Result<Json<Vec<ResultRecordDto>>, AppError> {
    let results = service.list_all().await?;
    Ok(Json(results.into_iter().map(Into::into).collect()))
}

/// 仪表盘视图（`GET /Dashboard`）
pub async fn dashboard(
    Extension(service): Extension<Arc<ScanService>>,
) -> Result<Json<Vec<DashboardRecordDto>>, AppError> {
    let results = service.list_active().await?;
    Ok(Json(results.into_iter().map(Into::into).collect()))
}

/// 归档视图（`GET /Archive`）
pub async fn archive_list(
    Extension(service): Extension<Arc<ScanService>>,
) -> Result<Json<Vec<DashboardRecordDto>>, AppError> {
    let results = service.list_archived().await?;
    Ok(Json(results.into_iter().map(Into::into).collect()))
}

/// 归档一条记录（`PATCH /Dashboard/{id}`）
pub async fn archive_result(
    Extension(service): Extension<Arc<ScanService>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageDto>, AppError> {
    // Non-numeric ids cannot name a stored result
    let Path(id) = id.map_err(|_| ScanError::NotFound)?;

    service.archive(id).await?;
    Ok(Json(MessageDto::new("Result archived successfully")))
}

/// 按文件名和日期过滤（`GET /api/filter`）
pub async fn filter_results(
    Extension(service): Extension<Arc<ScanService>>,
    Query(params): Query<FilterQueryDto>,
) -> Result<Json<Vec<FilterRecordDto>>, AppError> {
    params.validate()?;

    let results = service
        .filter(params.filename.as_deref(), params.date.as_deref())
        .await?;
    Ok(Json(results.into_iter().map(Into::into).collect()))
}
