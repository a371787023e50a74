// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scan_result::{NewScanResult, ScanResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Result not found")]
    NotFound,
}

/// 扫描结果查询参数
///
/// 所有条件均为可选，未设置的条件不参与过滤
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScanResultQuery {
    /// 按归档状态过滤
    pub archived: Option<bool>,
    /// 文件名包含该子串（不区分大小写）
    pub filename_contains: Option<String>,
    /// 记录时间落在该日历日
    pub date: Option<NaiveDate>,
}

impl ScanResultQuery {
    /// 仪表盘视图：未归档记录
    pub fn active() -> Self {
        Self {
            archived: Some(false),
            ..Default::default()
        }
    }

    /// 归档视图：已归档记录
    pub fn archived() -> Self {
        Self {
            archived: Some(true),
            ..Default::default()
        }
    }
}

/// 扫描结果仓库特质
///
/// 定义扫描结果数据访问接口。列表查询一律按记录时间倒序返回，
/// 时间相同时按ID倒序。
#[async_trait]
pub trait ScanResultRepository: Send + Sync {
    /// 插入新记录并返回持久化后的结果
    async fn create(&self, result: NewScanResult) -> Result<ScanResult, RepositoryError>;
    /// 根据ID查找记录
    async fn find_by_id(&self, id: i32) -> Result<Option<ScanResult>, RepositoryError>;
    /// 按条件列出记录
    async fn list(&self, query: ScanResultQuery) -> Result<Vec<ScanResult>, RepositoryError>;
    /// 将记录标记为已归档，记录不存在时返回 `NotFound`
    async fn archive(&self, id: i32) -> Result<ScanResult, RepositoryError>;
}
