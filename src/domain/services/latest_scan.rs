// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDateTime;
use parking_lot::RwLock;

use crate::domain::models::scan_result::ScanResult;

/// 最近一次扫描的摘要
#[derive(Debug, Clone, PartialEq)]
pub struct LatestScan {
    /// 对应的持久化记录ID
    pub id: i32,
    pub result: String,
    pub filename: String,
    pub prob: Option<f64>,
    pub prediction_correct: Option<bool>,
    pub timestamp: NaiveDateTime,
}

impl From<&ScanResult> for LatestScan {
    fn from(result: &ScanResult) -> Self {
        Self {
            id: result.id,
            result: result.result.clone(),
            filename: result.filename.clone(),
            prob: result.probability,
            prediction_correct: result.prediction_correct,
            timestamp: result.created_at,
        }
    }
}

/// 最近扫描结果的单槽缓存
///
/// 更新受写锁保护，且只接受 `(timestamp, id)` 更大的记录，与历史列表的
/// 排序键一致，因此并发上传时槽位总是收敛到 `/results` 的第一行。
#[derive(Debug, Default)]
pub struct LatestScanSlot {
    slot: RwLock<Option<LatestScan>>,
}

impl LatestScan {
    /// 与历史列表相同的排序键：时间优先，ID 兜底
    fn order_key(&self) -> (NaiveDateTime, i32) {
        (self.timestamp, self.id)
    }
}

impl LatestScanSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// 尝试用新记录替换槽位内容
    ///
    /// # 返回值
    ///
    /// 槽位被替换时返回 `true`
    pub fn offer(&self, scan: LatestScan) -> bool {
        let mut slot = self.slot.write();
        match slot.as_ref() {
            Some(current) if current.order_key() >= scan.order_key() => false,
            _ => {
                *slot = Some(scan);
                true
            }
        }
    }

    /// 当前槽位内容的副本
    pub fn current(&self) -> Option<LatestScan> {
        self.slot.read().clone()
    }
}
