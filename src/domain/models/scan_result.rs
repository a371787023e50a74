// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::attack::AttackCategory;

/// 扫描结果实体
///
/// 每次成功上传流量捕获文件后生成一条记录。记录创建后只允许一种变更：
/// `archived` 由 false 变为 true，且不可撤销；记录从不删除。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    /// 自增主键
    pub id: i32,
    /// 清洗后的上传文件名
    pub filename: String,
    /// 攻击类别名称
    pub result: String,
    /// 记录时间（本地时间，微秒精度）
    pub created_at: NaiveDateTime,
    /// 是否已归档
    pub archived: bool,
    /// 合成的置信度（0-100）
    pub probability: Option<f64>,
    /// 预测是否正确，没有真实标签可比对，因此始终为空
    pub prediction_correct: Option<bool>,
}

impl ScanResult {
    /// 解析存储的类别名称，无法识别时返回 `Unknown`
    pub fn category(&self) -> AttackCategory {
        self.result.parse().unwrap_or_default()
    }
}

/// 待插入的扫描结果
#[derive(Debug, Clone, PartialEq)]
pub struct NewScanResult {
    pub filename: String,
    pub category: AttackCategory,
    pub probability: f64,
    pub created_at: NaiveDateTime,
}

impl NewScanResult {
    /// 创建一条待插入记录
    ///
    /// # 参数
    ///
    /// * `filename` - 清洗后的文件名
    /// * `category` - 解码得到的攻击类别
    /// * `probability` - 合成的置信度
    /// * `created_at` - 记录时间
    pub fn new(
        filename: impl Into<String>,
        category: AttackCategory,
        probability: f64,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            filename: filename.into(),
            category,
            probability,
            created_at,
        }
    }
}
