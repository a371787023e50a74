// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 定义攻击类别与扫描结果等核心业务实体
pub mod attack;
pub mod scan_result;
