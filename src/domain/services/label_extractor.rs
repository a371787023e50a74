// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use csv::ReaderBuilder;
use tracing::debug;

use crate::domain::models::attack::AttackCategory;
use crate::utils::errors::ScanError;

/// 被视为缺失值的单元格内容
const MISSING_MARKERS: [&str; 8] = ["NaN", "nan", "NA", "N/A", "null", "NULL", "None", "<NA>"];

/// CSV 标签提取结果
#[derive(Debug, Clone, PartialEq)]
pub struct LabelExtraction {
    /// 解码得到的攻击类别
    pub category: AttackCategory,
    /// 最后一行中标签列的原始内容，没有数据行时为空
    pub raw_value: Option<String>,
    /// 数据行数（不含表头）
    pub row_count: usize,
    /// 表头列名
    pub columns: Vec<String>,
}

/// 从流量捕获 CSV 中提取攻击标签
///
/// 读取表头定位标签列，取最后一个数据行中该列的值并解码。
///
/// # 参数
///
/// * `data` - CSV 文件原始内容
/// * `column` - 标签列名
///
/// # 返回值
///
/// * `Ok(LabelExtraction)` - 提取结果
/// * `Err(ScanError::MissingColumn)` - 表头中没有标签列
/// * `Err(ScanError::Parse)` - 空文件、数据行字段多于表头或其他 CSV 格式错误
pub fn extract_attack_label(data: &[u8], column: &str) -> Result<LabelExtraction, ScanError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| ScanError::Parse(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    // Blank input yields no header, or a single empty field for whitespace
    if columns.iter().all(|name| name.trim().is_empty()) {
        return Err(ScanError::Parse("No columns to parse from file".to_string()));
    }

    let index = columns
        .iter()
        .position(|name| name == column)
        .ok_or_else(|| ScanError::MissingColumn(column.to_string()))?;

    let mut row_count = 0usize;
    let mut raw_value = None;
    for record in reader.records() {
        let record = record.map_err(|e| ScanError::Parse(e.to_string()))?;
        if record.len() > columns.len() {
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            return Err(ScanError::Parse(format!(
                "Expected {} fields in line {}, saw {}",
                columns.len(),
                line,
                record.len()
            )));
        }
        row_count += 1;
        // Short rows leave the label missing
        raw_value = Some(record.get(index).unwrap_or_default().to_string());
    }

    debug!(
        "CSV shape: {} rows x {} columns, columns: {:?}",
        row_count,
        columns.len(),
        columns
    );

    let category = match raw_value.as_deref() {
        Some(raw) => decode_cell(raw),
        None => AttackCategory::from_code(0),
    };

    Ok(LabelExtraction {
        category,
        raw_value,
        row_count,
        columns,
    })
}

/// 将单元格内容解码为攻击类别
///
/// 缺失值按编码 0 处理；浮点数截断取整；其他无法解析的内容为 `Unknown`
fn decode_cell(raw: &str) -> AttackCategory {
    let value = raw.trim();
    if value.is_empty() || MISSING_MARKERS.contains(&value) {
        return AttackCategory::from_code(0);
    }

    if let Ok(code) = value.parse::<i64>() {
        return AttackCategory::from_code(code);
    }

    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => AttackCategory::from_code(number.trunc() as i64),
        _ => AttackCategory::Unknown,
    }
}
