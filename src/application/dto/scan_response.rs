// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::services::latest_scan::LatestScan;
use crate::domain::services::scan_service::ScanOutcome;

/// 上传响应中 `timestamp` 的格式（毫秒精度）
pub const SCAN_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// 标签直接来自上传文件
pub const DATA_SOURCE_CSV: &str = "direct_from_csv";

/// 上传扫描响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct ScanResponseDto {
    /// 攻击类别名称
    pub result: String,
    /// 清洗后的文件名
    pub filename: String,
    /// 合成置信度
    pub prob: f64,
    /// 预测是否正确，始终为空
    pub prediction_correct: Option<bool>,
    /// 标签是否直接取自文件
    pub has_actual_label: bool,
    /// 本次分类是否使用了模型，始终为 false
    pub models_loaded: bool,
    pub data_source: String,
    pub timestamp: String,
    /// 面向展示的标签
    pub result_display: String,
}

impl From<&ScanOutcome> for ScanResponseDto {
    fn from(outcome: &ScanOutcome) -> Self {
        let record = &outcome.record;
        Self {
            result: record.result.clone(),
            filename: record.filename.clone(),
            prob: record.probability.unwrap_or_default(),
            prediction_correct: record.prediction_correct,
            has_actual_label: true,
            models_loaded: false,
            data_source: DATA_SOURCE_CSV.to_string(),
            timestamp: record.created_at.format(SCAN_TIMESTAMP_FORMAT).to_string(),
            result_display: outcome.category.display_label(),
        }
    }
}

/// 最近一次扫描数据传输对象
///
/// 尚无扫描时所有字段为空
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LatestScanDto {
    pub result: Option<String>,
    pub filename: Option<String>,
    pub prob: Option<f64>,
    pub prediction_correct: Option<bool>,
    pub timestamp: Option<String>,
}

impl From<LatestScan> for LatestScanDto {
    fn from(scan: LatestScan) -> Self {
        Self {
            result: Some(scan.result),
            filename: Some(scan.filename),
            prob: scan.prob,
            prediction_correct: scan.prediction_correct,
            timestamp: Some(scan.timestamp.format(SCAN_TIMESTAMP_FORMAT).to_string()),
        }
    }
}

impl From<Option<LatestScan>> for LatestScanDto {
    fn from(scan: Option<LatestScan>) -> Self {
        scan.map(Into::into).unwrap_or_default()
    }
}

/// 尚无扫描时 `/scanning` 的响应
#[derive(Debug, Deserialize, Serialize)]
pub struct NoScanDto {
    pub message: String,
    pub result: Option<String>,
}

impl Default for NoScanDto {
    fn default() -> Self {
        Self {
            message: "No scans yet".to_string(),
            result: None,
        }
    }
}
