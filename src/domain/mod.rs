// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：攻击类别与扫描记录
/// - 仓库接口（repositories）：数据持久化与文件存储的抽象接口
/// - 服务（services）：标签解码、置信度生成与扫描流程
///
/// 领域层不依赖于任何外部实现，具体存储由基础设施层提供。
pub mod models;
pub mod repositories;
pub mod services;
