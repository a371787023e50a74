// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;
use validator::ValidationErrors;

use crate::domain::repositories::scan_result_repository::RepositoryError;
use crate::utils::errors::ScanError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，统一渲染为 `{"error": "..."}`
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    /// 根据错误来源确定HTTP状态码
    pub fn status(&self) -> StatusCode {
        if let Some(scan_err) = self.0.downcast_ref::<ScanError>() {
            return match scan_err {
                ScanError::NotFound => StatusCode::NOT_FOUND,
                ScanError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
                e if e.is_client_error() => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
        }

        match self.0.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            Some(RepositoryError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            None if self.0.is::<ValidationErrors>() => StatusCode::BAD_REQUEST,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = self.0.to_string();

        if status.is_server_error() {
            error!("Request failed: {:#}", self.0);
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
