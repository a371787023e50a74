// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::scan_result::ScanResult;

/// 历史记录中日期的格式
pub const RESULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// 仪表盘与归档视图中日期的格式
pub const DASHBOARD_DATE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// 完整历史记录条目（`/results`）
#[derive(Debug, Deserialize, Serialize)]
pub struct ResultRecordDto {
    pub id: i32,
    pub filename: String,
    pub result: String,
    pub probability: Option<f64>,
    pub prediction_correct: Option<bool>,
    pub date: String,
    pub archive: bool,
}

impl From<ScanResult> for ResultRecordDto {
    fn from(r: ScanResult) -> Self {
        Self {
            id: r.id,
            date: r.created_at.format(RESULT_DATE_FORMAT).to_string(),
            filename: r.filename,
            result: r.result,
            probability: r.probability,
            prediction_correct: r.prediction_correct,
            archive: r.archived,
        }
    }
}

/// 仪表盘或归档视图条目（`/Dashboard`、`/Archive`）
#[derive(Debug, Deserialize, Serialize)]
pub struct DashboardRecordDto {
    pub id: i32,
    pub date: String,
    pub filename: String,
    pub result: String,
    pub probability: Option<f64>,
}

impl From<ScanResult> for DashboardRecordDto {
    fn from(r: ScanResult) -> Self {
        Self {
            id: r.id,
            date: r.created_at.format(DASHBOARD_DATE_FORMAT).to_string(),
            filename: r.filename,
            result: r.result,
            probability: r.probability,
        }
    }
}

/// 过滤结果条目（`/api/filter`）
#[derive(Debug, Deserialize, Serialize)]
pub struct FilterRecordDto {
    pub id: i32,
    pub filename: String,
    pub result: String,
    pub date: String,
    pub archive: bool,
}

impl From<ScanResult> for FilterRecordDto {
    fn from(r: ScanResult) -> Self {
        Self {
            id: r.id,
            date: r.created_at.format(RESULT_DATE_FORMAT).to_string(),
            filename: r.filename,
            result: r.result,
            archive: r.archived,
        }
    }
}

/// 通用消息响应
#[derive(Debug, Deserialize, Serialize)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
