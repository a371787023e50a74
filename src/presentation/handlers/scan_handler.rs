// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Extension, Multipart,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::application::dto::scan_response::{LatestScanDto, NoScanDto, ScanResponseDto};
use crate::domain::services::scan_service::ScanService;
use crate::presentation::errors::AppError;
use crate::utils::errors::ScanError;

/// 承载上传文件的表单字段名
const FILE_FIELD: &str = "file";

fn upload_error(err: MultipartError) -> ScanError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ScanError::PayloadTooLarge
    } else {
        ScanError::Upload(err.body_text())
    }
}

/// 上传流量捕获文件并分类（`POST /Scan`）
pub async fn scan(
    Extension(service): Extension<Arc<ScanService>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ScanResponseDto>, AppError> {
    // A request that is not multipart cannot carry a file part
    let mut multipart = multipart.map_err(|_| ScanError::NoFilePart)?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        // Plain form values named "file" are not file parts
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field.bytes().await.map_err(upload_error)?;
        upload = Some((filename, data));
        break;
    }

    let (filename, data) = upload.ok_or(ScanError::NoFilePart)?;
    debug!("Upload received: '{}' ({} bytes)", filename, data.len());

    let outcome = service.scan_upload(&filename, &data).await?;
    Ok(Json(ScanResponseDto::from(&outcome)))
}

/// 最近一次扫描结果（`GET /scanning`）
pub async fn latest_scan(Extension(service): Extension<Arc<ScanService>>) -> Response {
    match service.latest() {
        Some(scan) => Json(LatestScanDto::from(scan)).into_response(),
        None => Json(NoScanDto::default()).into_response(),
    }
}
