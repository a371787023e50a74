// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 历史记录过滤请求DTO（查询字符串）
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct FilterQueryDto {
    /// 文件名子串（不区分大小写）
    #[validate(length(max = 255))]
    pub filename: Option<String>,

    /// 日期，格式 `YYYY-MM-DD`
    pub date: Option<String>,
}
