// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{Local, NaiveDate};
use metrics::counter;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::settings::ScanSettings;
use crate::domain::models::attack::AttackCategory;
use crate::domain::models::scan_result::{NewScanResult, ScanResult};
use crate::domain::repositories::scan_result_repository::{
    RepositoryError, ScanResultQuery, ScanResultRepository,
};
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::domain::services::confidence::random_confidence;
use crate::domain::services::label_extractor::extract_attack_label;
use crate::domain::services::latest_scan::{LatestScan, LatestScanSlot};
use crate::utils::errors::ScanError;
use crate::utils::filename::secure_filename;

/// 一次成功扫描的结果
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// 已持久化的记录
    pub record: ScanResult,
    /// 解码得到的攻击类别
    pub category: AttackCategory,
    /// CSV 数据行数
    pub row_count: usize,
}

/// 扫描服务
///
/// 负责上传文件的校验、落盘、标签提取、置信度生成与入库，
/// 并持有最近一次扫描结果的单槽缓存
pub struct ScanService {
    repository: Arc<dyn ScanResultRepository>,
    storage: Arc<dyn StorageRepository>,
    settings: ScanSettings,
    latest: LatestScanSlot,
}

impl ScanService {
    /// 创建新的扫描服务实例
    ///
    /// # 参数
    ///
    /// * `repository` - 扫描结果仓库
    /// * `storage` - 上传文件存储
    /// * `settings` - 扫描规则配置
    pub fn new(
        repository: Arc<dyn ScanResultRepository>,
        storage: Arc<dyn StorageRepository>,
        settings: ScanSettings,
    ) -> Self {
        Self {
            repository,
            storage,
            settings,
            latest: LatestScanSlot::new(),
        }
    }

    /// 处理一次上传
    ///
    /// # 参数
    ///
    /// * `original_filename` - 客户端提供的文件名
    /// * `data` - 文件内容
    ///
    /// # 返回值
    ///
    /// * `Ok(ScanOutcome)` - 记录已入库并写入最近扫描缓存
    /// * `Err(ScanError)` - 校验、解析或持久化失败，此时不会插入记录
    pub async fn scan_upload(
        &self,
        original_filename: &str,
        data: &[u8],
    ) -> Result<ScanOutcome, ScanError> {
        let outcome = self.process_upload(original_filename, data).await;

        match &outcome {
            Ok(outcome) => {
                counter!("scan_uploads_total", "result" => outcome.category.as_str()).increment(1);
            }
            Err(e) => {
                warn!("Scan of '{}' failed: {}", original_filename, e);
                counter!("scan_upload_failures_total", "reason" => e.reason()).increment(1);
            }
        }

        outcome
    }

    async fn process_upload(
        &self,
        original_filename: &str,
        data: &[u8],
    ) -> Result<ScanOutcome, ScanError> {
        if original_filename.is_empty() {
            return Err(ScanError::NoFileSelected);
        }
        if !self.settings.is_allowed_extension(original_filename) {
            return Err(ScanError::InvalidFileType);
        }

        let filename = secure_filename(original_filename);
        if !self.settings.is_allowed_extension(&filename) {
            return Err(ScanError::InvalidFileType);
        }

        self.storage.save(&filename, data).await?;
        info!("File received: {} ({} bytes)", filename, data.len());

        let extraction = extract_attack_label(data, &self.settings.required_column)?;
        let probability = random_confidence(extraction.category);
        info!(
            "Attack type from data: {} (confidence {:.2}%)",
            extraction.category, probability
        );

        let record = self
            .repository
            .create(NewScanResult::new(
                filename,
                extraction.category,
                probability,
                Local::now().naive_local(),
            ))
            .await?;

        self.latest.offer(LatestScan::from(&record));

        Ok(ScanOutcome {
            record,
            category: extraction.category,
            row_count: extraction.row_count,
        })
    }

    /// 最近一次扫描结果
    pub fn latest(&self) -> Option<LatestScan> {
        self.latest.current()
    }

    /// 全部记录，按时间倒序
    pub async fn list_all(&self) -> Result<Vec<ScanResult>, ScanError> {
        Ok(self.repository.list(ScanResultQuery::default()).await?)
    }

    /// 仪表盘视图：未归档记录
    pub async fn list_active(&self) -> Result<Vec<ScanResult>, ScanError> {
        Ok(self.repository.list(ScanResultQuery::active()).await?)
    }

    /// 归档视图：已归档记录
    pub async fn list_archived(&self) -> Result<Vec<ScanResult>, ScanError> {
        Ok(self.repository.list(ScanResultQuery::archived()).await?)
    }

    /// 按文件名和日期过滤记录
    ///
    /// 空字符串视为未提供该条件；日期格式必须为 `YYYY-MM-DD`
    pub async fn filter(
        &self,
        filename: Option<&str>,
        date: Option<&str>,
    ) -> Result<Vec<ScanResult>, ScanError> {
        let date = match date.filter(|d| !d.is_empty()) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ScanError::InvalidDate)?,
            ),
            None => None,
        };

        let query = ScanResultQuery {
            archived: None,
            filename_contains: filename.filter(|f| !f.is_empty()).map(str::to_string),
            date,
        };

        Ok(self.repository.list(query).await?)
    }

    /// 归档一条记录
    ///
    /// 归档是单向操作；对已归档记录重复调用同样成功
    pub async fn archive(&self, id: i32) -> Result<ScanResult, ScanError> {
        let record = self.repository.archive(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ScanError::NotFound,
            other => ScanError::Repository(other),
        })?;
        counter!("scan_results_archived_total").increment(1);
        info!("Result {} archived", id);
        Ok(record)
    }
}

#[cfg(test)]
#[path = "scan_service_test.rs"]
mod tests;
