// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use super::scan_response::LatestScanDto;

/// 进程状态中的数据来源说明
pub const DATA_SOURCE_DIRECT: &str = "direct_csv_reading";

/// 健康检查响应
#[derive(Debug, Deserialize, Serialize)]
pub struct HealthDto {
    pub status: String,
    pub models_loaded: bool,
    /// ISO-8601 时间
    pub timestamp: String,
    pub message: String,
    pub data_source: String,
    pub version: String,
}

/// 自检端点响应
#[derive(Debug, Deserialize, Serialize)]
pub struct TestEndpointDto {
    pub message: String,
    pub models_loaded: bool,
    pub latest_scan: LatestScanDto,
    pub data_source: String,
}
