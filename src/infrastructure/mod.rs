// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，负责与外部系统的交互。
///
/// 包含的子模块：
/// - 数据库（database）：提供数据库连接和实体映射
/// - 指标（metrics）：Prometheus 指标导出
/// - 模型注册表（model_registry）：探测模型文件是否就绪
/// - 仓库实现（repositories）：提供领域仓库接口的具体实现
/// - 存储（storage）：上传文件的本地与内存存储
pub mod database;
pub mod metrics;
pub mod model_registry;
pub mod repositories;
pub mod storage;
